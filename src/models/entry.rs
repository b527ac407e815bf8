//! Financial entries ("lançamentos"): income or expense booked against a month.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "INCOME",
            EntryType::Expense => "EXPENSE",
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(EntryType::Income),
            "EXPENSE" => Ok(EntryType::Expense),
            other => Err(format!("unknown entry type: {}", other)),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Cancelled,
    Settled,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDING",
            EntryStatus::Cancelled => "CANCELLED",
            EntryStatus::Settled => "SETTLED",
        }
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(EntryStatus::Pending),
            "CANCELLED" => Ok(EntryStatus::Cancelled),
            "SETTLED" => Ok(EntryStatus::Settled),
            other => Err(format!("unknown entry status: {}", other)),
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry owned by a user. `id` and `created_on` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub description: String,
    /// 1..=12
    pub month: i16,
    pub year: i16,
    pub amount: Decimal,
    pub entry_type: EntryType,
    #[serde(default)]
    pub status: EntryStatus,
    pub created_on: Option<NaiveDate>,
}

impl FinancialEntry {
    /// Unsaved pending entry.
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        month: i16,
        year: i16,
        amount: Decimal,
        entry_type: EntryType,
    ) -> Self {
        Self {
            id: None,
            user_id,
            description: description.into(),
            month,
            year,
            amount,
            entry_type,
            status: EntryStatus::Pending,
            created_on: None,
        }
    }
}
