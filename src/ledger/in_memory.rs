use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    account::{Account, AccountId, AccountStore},
    transaction::{TransactionKind, TransactionLog, TransactionRecord},
};

use super::{LedgerError, LedgerService};

/// In memory ledger owning its account store and transaction log.
/// State lives for the process lifetime only and is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: AccountStore,
    log: TransactionLog,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger pre-populated with starting accounts.
    pub fn with_accounts(accounts: impl IntoIterator<Item = (AccountId, Decimal)>) -> Self {
        let mut ledger = Self::new();
        for (id, balance) in accounts {
            ledger.accounts.seed(id, balance);
        }
        ledger
    }

    /// Current accounts, in no particular order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    fn check_amount(amount: Decimal) -> Result<(), LedgerError> {
        if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(LedgerError::InvalidAmount { amount })
        }
    }

    /// Records a validated, already-applied operation. Appending happens
    /// last, so the log length always equals the number of operations
    /// that succeeded.
    fn commit(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        from: Option<AccountId>,
        to: Option<AccountId>,
    ) {
        self.log.append(TransactionRecord {
            timestamp: Utc::now(),
            kind,
            amount,
            from_account: from,
            to_account: to,
        });
        debug!(?kind, %amount, ?from, ?to, "operation committed");
    }
}

impl LedgerService for InMemoryLedger {
    fn deposit(&mut self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        Self::check_amount(amount)?;
        let acc = self.accounts.get_mut(account)?;
        acc.balance += amount;
        let balance = acc.balance;
        self.commit(TransactionKind::Deposit, amount, None, Some(account));
        Ok(balance)
    }

    fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<Decimal, LedgerError> {
        Self::check_amount(amount)?;
        let acc = self.accounts.get_mut(account)?;
        if acc.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                balance: acc.balance,
                requested: amount,
            });
        }
        acc.balance -= amount;
        let balance = acc.balance;
        self.commit(TransactionKind::Withdraw, amount, Some(account), None);
        Ok(balance)
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if from == to {
            return Err(LedgerError::InvalidArgument {
                detail: "Cannot transfer to the same account".to_string(),
            });
        }
        Self::check_amount(amount)?;

        // Resolve both sides before touching either balance, so a missing
        // destination never leaves the source debited.
        let from_balance = self.accounts.get(from)?.balance;
        self.accounts.get(to)?;
        if from_balance < amount {
            return Err(LedgerError::InsufficientFunds {
                balance: from_balance,
                requested: amount,
            });
        }

        self.accounts.get_mut(from)?.balance -= amount;
        self.accounts.get_mut(to)?.balance += amount;
        self.commit(TransactionKind::Transfer, amount, Some(from), Some(to));
        Ok(())
    }

    fn account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.accounts.get(id).copied()
    }

    fn transactions(&self) -> &[TransactionRecord] {
        self.log.records()
    }
}
