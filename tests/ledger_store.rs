use rust_decimal::Decimal;
use saveit::core::{LedgerError, LedgerKind, NewTransaction};
use saveit::ledger::LedgerStore;
use saveit::store::disk::DiskStore;
use std::str::FromStr;
use std::sync::Arc;
use tempfile::TempDir;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn disk_ledger() -> (LedgerStore, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = DiskStore::open(dir.path()).expect("Failed to open disk store");
    (LedgerStore::new(Arc::new(store)), dir)
}

#[test_log::test(tokio::test)]
async fn test_disk_ledger_scenario() {
    let (ledger, _dir) = disk_ledger();

    let expense = ledger
        .append(
            LedgerKind::Expense,
            NewTransaction::new("Comida", "🍴", d("45.50")),
        )
        .await
        .unwrap();
    ledger
        .append(
            LedgerKind::Income,
            NewTransaction::new("Salario", "💼", d("1000.00")),
        )
        .await
        .unwrap();

    assert_eq!(ledger.available_balance().await.unwrap(), d("954.50"));

    let expenses = ledger.list_all(LedgerKind::Expense).await.unwrap();
    assert_eq!(expenses, vec![expense]);
    assert_eq!(ledger.list_all(LedgerKind::Income).await.unwrap().len(), 1);
}

#[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
async fn test_disk_ledger_concurrent_appends() {
    let (ledger, _dir) = disk_ledger();

    let handles: Vec<_> = (1..=10)
        .map(|i| {
            let ledger = ledger.clone();
            tokio::spawn(async move {
                ledger
                    .append(
                        LedgerKind::Expense,
                        NewTransaction::new("Facturas", "📃", Decimal::from(i)),
                    )
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let expenses = ledger.list_all(LedgerKind::Expense).await.unwrap();
    assert_eq!(expenses.len(), 10);
    assert!(
        expenses
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at)
    );
    assert_eq!(ledger.available_balance().await.unwrap(), Decimal::from(-55));
}

#[test_log::test(tokio::test)]
async fn test_disk_ledger_rejects_zero_amount() {
    let (ledger, _dir) = disk_ledger();

    let err = ledger
        .append(
            LedgerKind::Income,
            NewTransaction::new("Bonus", "💵", Decimal::ZERO),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(ledger.list_all(LedgerKind::Income).await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_recent_view_on_disk() {
    let (ledger, _dir) = disk_ledger();
    for category in ["Ahorros", "Depositos", "Bonus"] {
        ledger
            .append(
                LedgerKind::Income,
                NewTransaction::new(category, "💰", d("10")),
            )
            .await
            .unwrap();
    }

    let view = ledger.recent_n(LedgerKind::Income, 2).await.unwrap();
    assert!(view.has_more);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].category, "Bonus");

    let none = ledger.recent_n(LedgerKind::Expense, 2).await.unwrap();
    assert!(none.items.is_empty());
    assert!(!none.has_more);
}
