use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    transaction::TransactionRecord,
};

pub mod in_memory;

/// Every failure is a rejected operation, never a corrupted ledger:
/// validation always completes before any balance is touched, so none of
/// these leave partial state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },
    #[error("{detail}")]
    InvalidArgument { detail: String },
    #[error("Account with id {id} not found")]
    NotFound { id: AccountId },
    #[error("Insufficient funds: balance {balance} does not cover {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
}

/// Interface the external request layer consumes. Each operation is a
/// single-shot, immediately-committed unit; callers never observe a
/// partially-applied state.
pub trait LedgerService {
    /// Credits the account and returns the post-operation balance.
    fn deposit(&mut self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Debits the account and returns the post-operation balance.
    fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Moves funds between two distinct accounts. Either both balances
    /// change together or neither does.
    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Decimal)
    -> Result<(), LedgerError>;

    /// Snapshot of the account's current id and balance.
    fn account(&self, id: AccountId) -> Result<Account, LedgerError>;

    /// All committed records in commit order; empty when nothing has
    /// been recorded, never a failure.
    fn transactions(&self) -> &[TransactionRecord];
}
