use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId},
    ledger::{LedgerError, LedgerService, in_memory::InMemoryLedger},
    transaction::TransactionRecord,
};

/// Cloneable handle serializing all ledger access behind one mutex.
///
/// A single coarse critical section keeps concurrent read-modify-write of
/// any balance linearizable and makes opposite-direction transfers
/// deadlock-free by construction. Per-account locking is not worth the
/// ordering discipline at this account count and call volume.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<InMemoryLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: InMemoryLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn deposit(&self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.inner.lock().deposit(account, amount)
    }

    pub fn withdraw(&self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.inner.lock().withdraw(account, amount)
    }

    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.inner.lock().transfer(from, to, amount)
    }

    pub fn account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.inner.lock().account(id)
    }

    /// Owned snapshot of the log at the time of the call.
    pub fn transactions(&self) -> Vec<TransactionRecord> {
        self.inner.lock().transactions().to_vec()
    }
}
