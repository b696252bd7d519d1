pub mod calculator;
pub mod cli;
pub mod core;
pub mod ledger;
pub mod store;

use crate::core::LedgerKind;
use crate::core::config::AppConfig;
use crate::ledger::LedgerStore;
use anyhow::Result;
use tracing::{debug, info};

/// A transaction as typed by the user: amount keys, category and optional
/// note and date.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub kind: LedgerKind,
    pub keys: String,
    pub category: String,
    pub note: Option<String>,
    pub date: Option<String>,
}

pub enum AppCommand {
    Add(AddRequest),
    List { kind: LedgerKind, all: bool },
    Balance,
    Categories { kind: LedgerKind },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("SaveIt starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Add(request) => {
            cli::add::run(&open_ledger(&config)?, request, &config.currency_symbol).await
        }
        AppCommand::List { kind, all } => {
            cli::list::run(
                &open_ledger(&config)?,
                kind,
                all,
                config.recent_limit,
                &config.currency_symbol,
            )
            .await
        }
        AppCommand::Balance => {
            cli::balance::run(&open_ledger(&config)?, &config.currency_symbol).await
        }
        AppCommand::Categories { kind } => cli::categories::run(kind),
    }
}

fn open_ledger(config: &AppConfig) -> Result<LedgerStore> {
    Ok(LedgerStore::new(store::open(config)?))
}
