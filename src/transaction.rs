use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;

/// Kind of a committed operation. Doubles as the wire spelling in the
/// runner's CSV input and output.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

/// Immutable description of one committed operation. Exactly one of
/// `from_account`/`to_account` is absent for deposits and withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub from_account: Option<AccountId>,
    pub to_account: Option<AccountId>,
}

/// Append-only, insertion-ordered history of committed operations.
/// Entries are never mutated or removed; log order is commit order.
#[derive(Debug, Default)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// All records in commit order. Callers cannot mutate the log
    /// through the returned view.
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn record(kind: TransactionKind, amount: Decimal) -> TransactionRecord {
        TransactionRecord {
            timestamp: Utc::now(),
            kind,
            amount,
            from_account: None,
            to_account: Some(1),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransactionLog::new();
        assert!(log.is_empty());
        assert!(log.records().is_empty());
    }

    #[test]
    fn append_preserves_commit_order() {
        let mut log = TransactionLog::new();
        log.append(record(TransactionKind::Deposit, dec!(1)));
        log.append(record(TransactionKind::Withdraw, dec!(2)));
        log.append(record(TransactionKind::Deposit, dec!(3)));

        assert_eq!(log.len(), 3);
        let amounts: Vec<Decimal> = log.records().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![dec!(1), dec!(2), dec!(3)]);
    }
}
