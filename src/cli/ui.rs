use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use rust_decimal::{Decimal, RoundingStrategy};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Formats an amount for display, rounded to two decimals with halves away
/// from zero.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("{symbol}{:.2}", amount.abs())
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a right-aligned amount cell, red for expenses and green for incomes.
pub fn amount_cell(text: String, is_expense: bool) -> Cell {
    let color = if is_expense { Color::Red } else { Color::Green };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Creates a dimmed cell, used for empty notes.
pub fn subtle_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        assert_eq!(format_amount("$", Decimal::from_str("45.5").unwrap()), "$45.50");
        assert_eq!(format_amount("$", Decimal::from_str("954.5").unwrap()), "$954.50");
        assert_eq!(format_amount("€", Decimal::from_str("-12").unwrap()), "-€12.00");
        assert_eq!(format_amount("$", Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_amount_rounds_halves_away_from_zero() {
        assert_eq!(format_amount("$", Decimal::from_str("0.125").unwrap()), "$0.13");
        assert_eq!(format_amount("$", Decimal::from_str("2.675").unwrap()), "$2.68");
        assert_eq!(format_amount("$", Decimal::from_str("-0.125").unwrap()), "-$0.13");
        assert_eq!(format_amount("$", Decimal::from_str("0.124").unwrap()), "$0.12");
        assert_eq!(format_amount("$", Decimal::from_str("-0.004").unwrap()), "$0.00");
    }
}
