//! Transaction models

use chrono::{DateTime, Utc};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Direction of a transaction, taken from the merchant catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "expense" => Some(TransactionKind::Expense),
            "income" => Some(TransactionKind::Income),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Declined,
}

impl TransactionStatus {
    /// Map a uniform draw in [0, 1) onto a status (70% / 15% / 15%)
    pub fn from_draw(r: f64) -> Self {
        if r < 0.7 {
            TransactionStatus::Completed
        } else if r < 0.85 {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Declined
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "completed" => Some(TransactionStatus::Completed),
            "pending" => Some(TransactionStatus::Pending),
            "declined" => Some(TransactionStatus::Declined),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Declined => "Declined",
        }
    }
}

/// A single feed entry. `amount` is always a positive magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Declined transactions never moved money
    pub fn counts_toward_balance(&self) -> bool {
        self.status != TransactionStatus::Declined
    }

    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// `+12.34 EUR` for income, `-12.34 EUR` for expenses
    pub fn formatted_amount(&self) -> String {
        let prefix = match self.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        format!("{}{:.2} EUR", prefix, self.amount)
    }

    /// `dd/mm/yyyy`
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// `Mon YYYY` label for a calendar month (1-based)
pub fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{} {}", name, year)
}
