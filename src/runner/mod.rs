use std::io::{Read, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    ledger::{LedgerError, LedgerService, in_memory::InMemoryLedger},
    request::{Operation, RequestError},
};
use csv_parser::{CsvOperationParser, OperationRow};
use csv_printer::{print_accounts, print_transactions};

pub mod csv_parser;
pub mod csv_printer;

/// Starting accounts for a freshly booted ledger.
pub const SEED_ACCOUNTS: [(AccountId, Decimal); 2] = [(1, dec!(1000.00)), (2, dec!(500.00))];

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Applies a CSV operation script against a seeded ledger, reporting
/// rejected rows through `error_printer` and printing the final balances
/// followed by the committed transaction log.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);
        let mut ledger = InMemoryLedger::with_accounts(SEED_ACCOUNTS);

        for (line, row) in parser {
            if let Err(err) = Self::dispatch(&mut ledger, row) {
                (self.error_printer)(line, err);
            }
        }

        // HashMap iteration order is randomized; sort for stable output.
        let mut accounts: Vec<Account> = ledger.accounts().copied().collect();
        accounts.sort_unstable_by_key(|acc| acc.id);

        print_accounts(self.output, &accounts)?;
        self.output.write_all(b"\n")?;
        print_transactions(self.output, ledger.transactions())
    }

    fn dispatch(ledger: &mut InMemoryLedger, row: OperationRow) -> Result<(), OperationError> {
        let op = Operation::from_parts(row.kind, row.from, row.to, row.amount)?;
        op.apply(ledger)?;
        Ok(())
    }
}
