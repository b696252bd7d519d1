use super::ui;
use crate::AddRequest;
use crate::calculator::Entry;
use crate::core::category;
use crate::core::{NewTransaction, Transaction, TransactionDate};
use crate::ledger::LedgerStore;
use anyhow::{Context, Result};
use tracing::debug;

/// Builds the record to append: the keys go through the calculator and the
/// category is matched against the suggested set for the kind.
pub fn prepare(request: &AddRequest) -> Result<NewTransaction> {
    let mut entry = Entry::new();
    entry
        .feed(&request.keys)
        .with_context(|| format!("Invalid amount keys: {}", request.keys))?;
    let amount = entry.amount()?;

    let name = match category::find(request.kind, &request.category) {
        Some(c) => c.name.to_string(),
        None => {
            debug!(
                "'{}' is not a suggested {} category",
                request.category, request.kind
            );
            request.category.trim().to_string()
        }
    };
    let icon = category::icon_for(request.kind, &request.category);
    anyhow::ensure!(!name.is_empty(), "Category must not be empty");

    let mut new = NewTransaction::new(name, icon, amount);
    if let Some(note) = &request.note {
        new = new.with_note(note.trim());
    }
    if let Some(date) = &request.date {
        new = new.with_date(date.parse::<TransactionDate>()?);
    }
    Ok(new)
}

pub fn describe(record: &Transaction, request: &AddRequest, currency_symbol: &str) -> String {
    format!(
        "Saved {} {} {} {} on {}",
        request.kind,
        record.icon,
        ui::style_text(&record.category, ui::StyleType::TotalLabel),
        ui::format_amount(currency_symbol, record.amount),
        record.date
    )
}

pub async fn run(ledger: &LedgerStore, request: AddRequest, currency_symbol: &str) -> Result<()> {
    let new = prepare(&request)?;
    let record = ledger
        .append(request.kind, new)
        .await
        .with_context(|| format!("Could not save the {}", request.kind))?;
    println!("{}", describe(&record, &request, currency_symbol));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::FALLBACK_ICON;
    use crate::core::{LedgerKind, ValidationError};
    use rust_decimal::Decimal;

    fn request(kind: LedgerKind, keys: &str, category: &str) -> AddRequest {
        AddRequest {
            kind,
            keys: keys.to_string(),
            category: category.to_string(),
            note: None,
            date: None,
        }
    }

    #[test]
    fn test_prepare_uses_suggested_category() {
        let mut req = request(LedgerKind::Expense, "40+5.5=", "comida");
        req.note = Some(" almuerzo ".to_string());
        req.date = Some("fecha:10/06/24".to_string());

        let new = prepare(&req).unwrap();
        assert_eq!(new.category, "Comida");
        assert_eq!(new.icon, "🍴");
        assert_eq!(new.amount, Decimal::new(455, 1));
        assert_eq!(new.note, "almuerzo");
        assert_eq!(new.date.unwrap().as_str(), "10/06/24");
    }

    #[test]
    fn test_prepare_accepts_free_text_category() {
        let new = prepare(&request(LedgerKind::Income, "20", "Venta")).unwrap();
        assert_eq!(new.category, "Venta");
        assert_eq!(new.icon, FALLBACK_ICON);
        assert!(new.date.is_none());
    }

    #[test]
    fn test_prepare_icon_matches_category_lookup() {
        for (kind, name) in [
            (LedgerKind::Expense, " transporte"),
            (LedgerKind::Income, "BONUS"),
            (LedgerKind::Income, "Comida"),
            (LedgerKind::Expense, "Viajes"),
        ] {
            let new = prepare(&request(kind, "5", name)).unwrap();
            assert_eq!(new.icon, category::icon_for(kind, name));
        }
    }

    #[test]
    fn test_prepare_rejects_invalid_amounts() {
        let err = prepare(&request(LedgerKind::Expense, "0", "Casa")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NonPositiveAmount)
        );

        assert!(prepare(&request(LedgerKind::Expense, "12abc", "Casa")).is_err());
        assert!(prepare(&request(LedgerKind::Expense, "12", "  ")).is_err());

        let mut req = request(LedgerKind::Expense, "12", "Casa");
        req.date = Some("2024-06-10".to_string());
        assert!(prepare(&req).is_err());
    }
}
