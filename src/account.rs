use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::LedgerError;

pub type AccountId = u32;

/// A balance-holding entity. The id is assigned at seed time and never
/// changes; the balance is mutated only by the ledger service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub balance: Decimal,
}

/// Keyed collection of accounts. The store hands out balance access but
/// enforces no business rules; non-negativity is the ledger's job since
/// the store has no operation-level context.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates a starting account. Initialization only; the
    /// transactional surface never creates accounts.
    pub fn seed(&mut self, id: AccountId, balance: Decimal) {
        self.accounts.insert(id, Account { id, balance });
    }

    pub fn get(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts.get(&id).ok_or(LedgerError::NotFound { id })
    }

    pub fn get_mut(&mut self, id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&id)
            .ok_or(LedgerError::NotFound { id })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}
