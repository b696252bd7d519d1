//! Ledger records and their persisted shape

use super::error::ValidationError;
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Which ledger a record lives in. The kind carries the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerKind {
    Expense,
    Income,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 2] = [LedgerKind::Expense, LedgerKind::Income];

    /// Key of the persisted collection for this kind.
    pub fn storage_key(&self) -> &'static str {
        match self {
            LedgerKind::Expense => "gastos",
            LedgerKind::Income => "ingresos",
        }
    }
}

impl Display for LedgerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LedgerKind::Expense => "expense",
                LedgerKind::Income => "income",
            }
        )
    }
}

impl FromStr for LedgerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" | "expenses" | "gasto" | "gastos" => Ok(LedgerKind::Expense),
            "income" | "incomes" | "ingreso" | "ingresos" => Ok(LedgerKind::Income),
            _ => Err(anyhow::anyhow!("Invalid ledger kind: {}", s)),
        }
    }
}

/// A calendar date in `DD/MM/YY` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDate(String);

impl TransactionDate {
    const FORMAT: &'static str = "%d/%m/%y";

    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TransactionDate {
    type Err = ValidationError;

    /// Accepts `DD/MM/YY`, optionally labelled as `fecha:DD/MM/YY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix("fecha:").unwrap_or(raw).trim();
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .map(Self::from_naive)
            .map_err(|_| ValidationError::InvalidDate(s.to_string()))
    }
}

impl Display for TransactionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller-supplied part of a record; `id` and `created_at` are assigned
/// by the ledger on append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub category: String,
    pub icon: String,
    pub amount: Decimal,
    pub note: String,
    pub date: Option<TransactionDate>,
}

impl NewTransaction {
    pub fn new(category: impl Into<String>, icon: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            icon: icon.into(),
            amount,
            note: String::new(),
            date: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_date(mut self, date: TransactionDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// A single immutable income or expense record.
///
/// The icon is copied from the category when the record is created, so a
/// later change to a category's icon does not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "icono")]
    pub icon: String,
    #[serde(rename = "monto", with = "amount_number")]
    pub amount: Decimal,
    #[serde(rename = "nota", default)]
    pub note: String,
    #[serde(rename = "fecha")]
    pub date: TransactionDate,
    #[serde(rename = "timestamp", with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_new(new: NewTransaction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: new.category,
            icon: new.icon,
            amount: new.amount,
            note: new.note,
            date: new.date.unwrap_or_else(TransactionDate::today),
            // Persisted with millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Amounts are JSON numbers on the wire and exact decimals in memory. The
/// number keeps every digit of the decimal (serde_json `arbitrary_precision`).
mod amount_number {
    use super::*;
    use serde::de::Error;

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let text = amount.normalize().to_string();
        let number = serde_json::Number::from_str(&text)
            .map_err(|e| {
                <S::Error as serde::ser::Error>::custom(format!("invalid amount {text}: {e}"))
            })?;
        number.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        let text = number.to_string();
        let amount = Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| D::Error::custom(format!("invalid amount {text}: {e}")))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(D::Error::custom(format!("negative amount {text}")));
        }
        Ok(amount)
    }
}

mod iso_millis {
    use super::*;
    use serde::de::Error;

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp {raw}: {e}")))
    }
}
