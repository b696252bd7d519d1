//! The income and expense ledgers and their aggregates.

use crate::core::error::{LedgerError, StorageStep};
use crate::core::kv::KeyValueStore;
use crate::core::transaction::{LedgerKind, NewTransaction, Transaction};
use futures::try_join;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;

/// The head of a ledger plus whether anything was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentView {
    pub items: Vec<Transaction>,
    pub has_more: bool,
}

impl RecentView {
    fn head(mut items: Vec<Transaction>, n: usize) -> Self {
        let has_more = items.len() > n;
        items.truncate(n);
        Self { items, has_more }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Default)]
struct KindLocks {
    expense: Mutex<()>,
    income: Mutex<()>,
}

impl KindLocks {
    fn for_kind(&self, kind: LedgerKind) -> &Mutex<()> {
        match kind {
            LedgerKind::Expense => &self.expense,
            LedgerKind::Income => &self.income,
        }
    }
}

/// Sole owner of the persisted `gastos` and `ingresos` collections.
///
/// Holds no cached state: every read goes to the store. Appends to the same
/// kind are serialized, so concurrent appends never lose a record. Clones
/// share the store and the locks.
#[derive(Clone)]
pub struct LedgerStore {
    store: Arc<dyn KeyValueStore>,
    locks: Arc<KindLocks>,
}

impl LedgerStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            locks: Arc::new(KindLocks::default()),
        }
    }

    /// Records a new transaction at the head of its ledger and returns it
    /// with `id` and `created_at` filled in.
    pub async fn append(&self, kind: LedgerKind, new: NewTransaction) -> Result<Transaction> {
        new.validate()?;
        let key = kind.storage_key();

        let _guard = self.locks.for_kind(kind).lock().await;
        let mut records = self.load(kind, StorageStep::ReadExisting).await?;

        let record = Transaction::from_new(new);
        records.insert(0, record.clone());

        let payload = serde_json::to_string(&records).map_err(|e| LedgerError::CorruptStore {
            key: key.to_string(),
            source: e,
        })?;
        self.store
            .set(key, payload)
            .await
            .map_err(|source| LedgerError::Storage {
                step: StorageStep::WriteBack,
                key: key.to_string(),
                source,
            })?;

        info!(
            %kind,
            id = %record.id,
            category = %record.category,
            amount = %record.amount,
            "Transaction saved"
        );
        Ok(record)
    }

    /// Every record of `kind`, newest first.
    pub async fn list_all(&self, kind: LedgerKind) -> Result<Vec<Transaction>> {
        let mut records = self.load(kind, StorageStep::Read).await?;
        // Stable: records sharing a timestamp keep their head-first stored order
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    pub async fn recent_n(&self, kind: LedgerKind, n: usize) -> Result<RecentView> {
        Ok(RecentView::head(self.list_all(kind).await?, n))
    }

    /// `recent_n` with the same degradation as `list_or_empty`.
    pub async fn recent_or_empty(&self, kind: LedgerKind, n: usize) -> RecentView {
        RecentView::head(self.list_or_empty(kind).await, n)
    }

    /// `list_all` for display purposes: failures are logged and shown as an
    /// empty ledger. Nothing is written back.
    pub async fn list_or_empty(&self, kind: LedgerKind) -> Vec<Transaction> {
        match self.list_all(kind).await {
            Ok(records) => {
                if records.is_empty() {
                    debug!(%kind, "Ledger is empty");
                }
                records
            }
            Err(e @ LedgerError::CorruptStore { .. }) => {
                warn!(%kind, error = %e, "Ledger data is corrupt, showing no records");
                Vec::new()
            }
            Err(e) => {
                warn!(%kind, error = %e, "Failed to read ledger, showing no records");
                Vec::new()
            }
        }
    }

    /// Sum of incomes minus sum of expenses, read fresh from storage.
    pub async fn available_balance(&self) -> Result<Decimal> {
        Ok(self.totals().await?.balance)
    }

    pub async fn totals(&self) -> Result<Totals> {
        let (incomes, expenses) = try_join!(
            self.load(LedgerKind::Income, StorageStep::Read),
            self.load(LedgerKind::Expense, StorageStep::Read)
        )?;
        let income = sum_amounts(&incomes);
        let expense = sum_amounts(&expenses);
        debug!(%income, %expense, "Computed totals");

        Ok(Totals {
            income,
            expense,
            balance: income - expense,
        })
    }

    async fn load(&self, kind: LedgerKind, step: StorageStep) -> Result<Vec<Transaction>> {
        let key = kind.storage_key();
        let raw = self
            .store
            .get(key)
            .await
            .map_err(|source| LedgerError::Storage {
                step,
                key: key.to_string(),
                source,
            })?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| LedgerError::CorruptStore {
                key: key.to_string(),
                source,
            }),
        }
    }
}

fn sum_amounts(records: &[Transaction]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}
