use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use saveit::core::LedgerKind;
use saveit::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for saveit::AppCommand {
    fn from(cmd: Commands) -> saveit::AppCommand {
        match cmd {
            Commands::Add {
                kind,
                keys,
                category,
                note,
                date,
            } => saveit::AppCommand::Add(saveit::AddRequest {
                kind,
                keys,
                category,
                note,
                date,
            }),
            Commands::List { kind, all } => saveit::AppCommand::List { kind, all },
            Commands::Balance => saveit::AppCommand::Balance,
            Commands::Categories { kind } => saveit::AppCommand::Categories { kind },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record an expense or an income
    Add {
        /// expense or income
        kind: LedgerKind,
        /// Amount keys, e.g. "45.50" or "40+5.5="
        #[arg(allow_hyphen_values = true)]
        keys: String,
        /// Category name, see `categories`
        #[arg(long)]
        category: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
        /// Date as DD/MM/YY, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the most recent records of a ledger
    List {
        /// expense or income
        kind: LedgerKind,
        /// Show every record instead of the most recent ones
        #[arg(short, long)]
        all: bool,
    },
    /// Display income, expense and available balance
    Balance,
    /// List the suggested categories
    Categories {
        /// expense or income
        kind: LedgerKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => saveit::cli::setup::setup(),
        Some(cmd) => saveit::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
