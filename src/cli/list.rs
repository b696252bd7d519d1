use super::ui;
use crate::core::LedgerKind;
use crate::ledger::{LedgerStore, RecentView};
use anyhow::Result;
use comfy_table::Cell;
use rust_decimal::Decimal;

fn title(kind: LedgerKind) -> &'static str {
    match kind {
        LedgerKind::Expense => "Gastos",
        LedgerKind::Income => "Ingresos",
    }
}

pub fn render(kind: LedgerKind, view: &RecentView, currency_symbol: &str) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text(title(kind), ui::StyleType::Title)
    );

    if view.items.is_empty() {
        output.push_str(&ui::style_text(
            &format!("No {kind} records yet."),
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Note"),
        ui::header_cell("Amount"),
    ]);

    let is_expense = kind == LedgerKind::Expense;
    for record in &view.items {
        table.add_row(vec![
            Cell::new(&record.date),
            Cell::new(format!("{} {}", record.icon, record.category)),
            if record.note.is_empty() {
                ui::subtle_cell("-")
            } else {
                Cell::new(&record.note)
            },
            ui::amount_cell(
                ui::format_amount(currency_symbol, record.amount),
                is_expense,
            ),
        ]);
    }
    output.push_str(&table.to_string());

    let shown: Decimal = view.items.iter().map(|r| r.amount).sum();
    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Total shown", ui::StyleType::TotalLabel),
        ui::style_text(
            &ui::format_amount(currency_symbol, shown),
            ui::StyleType::TotalValue
        )
    ));

    if view.has_more {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                "More records available, use --all to see everything.",
                ui::StyleType::Subtle
            )
        ));
    }
    output
}

pub async fn run(
    ledger: &LedgerStore,
    kind: LedgerKind,
    all: bool,
    recent_limit: usize,
    currency_symbol: &str,
) -> Result<()> {
    let view = if all {
        RecentView {
            items: ledger.list_or_empty(kind).await,
            has_more: false,
        }
    } else {
        ledger.recent_or_empty(kind, recent_limit).await
    };

    println!("{}", render(kind, &view, currency_symbol));
    Ok(())
}
