use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountId,
    ledger::{LedgerError, LedgerService},
    transaction::TransactionKind,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("A destination account is required for {kind:?}")]
    MissingTo { kind: TransactionKind },
    #[error("A source account is required for {kind:?}")]
    MissingFrom { kind: TransactionKind },
}

/// A structurally valid operation, ready to hand to the ledger. Which
/// side of the wire row is required depends on the kind; amount and
/// account existence are the ledger's checks, not ours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Deposit { account: AccountId, amount: Decimal },
    Withdraw { account: AccountId, amount: Decimal },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    },
}

impl Operation {
    pub fn from_parts(
        kind: TransactionKind,
        from: Option<AccountId>,
        to: Option<AccountId>,
        amount: Decimal,
    ) -> Result<Self, RequestError> {
        match kind {
            TransactionKind::Deposit => Ok(Self::Deposit {
                account: to.ok_or(RequestError::MissingTo { kind })?,
                amount,
            }),
            TransactionKind::Withdraw => Ok(Self::Withdraw {
                account: from.ok_or(RequestError::MissingFrom { kind })?,
                amount,
            }),
            TransactionKind::Transfer => Ok(Self::Transfer {
                from: from.ok_or(RequestError::MissingFrom { kind })?,
                to: to.ok_or(RequestError::MissingTo { kind })?,
                amount,
            }),
        }
    }

    pub fn apply(self, ledger: &mut impl LedgerService) -> Result<(), LedgerError> {
        match self {
            Self::Deposit { account, amount } => ledger.deposit(account, amount).map(|_| ()),
            Self::Withdraw { account, amount } => ledger.withdraw(account, amount).map(|_| ()),
            Self::Transfer { from, to, amount } => ledger.transfer(from, to, amount),
        }
    }
}
