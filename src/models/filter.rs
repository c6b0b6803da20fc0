//! Status / type filter from the transactions filter sheet

use std::collections::HashSet;
use super::transaction::{Transaction, TransactionKind, TransactionStatus};

/// Empty sets match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub statuses: HashSet<TransactionStatus>,
    pub kinds: HashSet<TransactionKind>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.kinds.is_empty()
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        (self.statuses.is_empty() || self.statuses.contains(&tx.status))
            && (self.kinds.is_empty() || self.kinds.contains(&tx.kind))
    }

    /// Short human readable summary, e.g. `status=Pending,Declined type=income`
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }

        let mut parts = Vec::new();
        if !self.statuses.is_empty() {
            let mut names: Vec<&str> = self.statuses.iter().map(|s| s.as_str()).collect();
            names.sort_unstable();
            parts.push(format!("status={}", names.join(",")));
        }
        if !self.kinds.is_empty() {
            let mut names: Vec<&str> = self.kinds.iter().map(|k| k.as_str()).collect();
            names.sort_unstable();
            parts.push(format!("type={}", names.join(",")));
        }
        parts.join(" ")
    }
}
