use super::ui;
use crate::ledger::{LedgerStore, Totals};
use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub fn render(totals: &Totals, currency_symbol: &str) -> String {
    let balance_style = if totals.balance >= Decimal::ZERO {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Error
    };

    format!(
        "Ingresos: {}\nGastos:   {}\n\n{}: {}",
        ui::format_amount(currency_symbol, totals.income),
        ui::format_amount(currency_symbol, totals.expense),
        ui::style_text("Saldo disponible", ui::StyleType::TotalLabel),
        ui::style_text(
            &ui::format_amount(currency_symbol, totals.balance),
            balance_style
        )
    )
}

pub async fn run(ledger: &LedgerStore, currency_symbol: &str) -> Result<()> {
    let totals = ledger
        .totals()
        .await
        .context("Could not compute the available balance")?;
    println!("{}", render(&totals, currency_symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_balance() {
        let totals = Totals {
            income: Decimal::from(1000),
            expense: Decimal::new(4550, 2),
            balance: Decimal::new(95450, 2),
        };
        let output = render(&totals, "$");
        assert!(output.contains("$1000.00"));
        assert!(output.contains("$45.50"));
        assert!(output.contains("$954.50"));
    }
}
