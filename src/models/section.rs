//! Month-bucketed section models

use serde::Serialize;
use super::transaction::Transaction;

/// A calendar month of transactions, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip)]
    pub year: i32,
    #[serde(skip)]
    pub month: u32,
    pub items: Vec<Transaction>,
}

impl Section {
    /// Net of income minus expenses, declined transactions excluded
    pub fn total_signed(&self) -> f64 {
        self.items
            .iter()
            .filter(|tx| tx.counts_toward_balance())
            .map(Transaction::signed_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::models::{TransactionKind, TransactionStatus};

    fn tx(kind: TransactionKind, status: TransactionStatus, amount: f64) -> Transaction {
        Transaction {
            id: "1".to_string(),
            title: "Salary Deposit".to_string(),
            amount,
            date: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
            kind,
            status,
        }
    }

    #[test]
    fn test_total_signed_skips_declined() {
        let section = Section {
            title: "May 2024".to_string(),
            year: 2024,
            month: 5,
            items: vec![
                tx(TransactionKind::Income, TransactionStatus::Completed, 100.0),
                tx(TransactionKind::Expense, TransactionStatus::Pending, 30.0),
                tx(TransactionKind::Expense, TransactionStatus::Declined, 500.0),
            ],
        };
        assert!((section.total_signed() - 70.0).abs() < 1e-9);
    }
}
