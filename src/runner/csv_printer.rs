use std::io::Write;

use chrono::{DateTime, Utc};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    account::{Account, AccountId},
    transaction::{TransactionKind, TransactionRecord},
};

#[derive(Debug, Serialize)]
struct BalanceRow {
    account: AccountId,
    balance: Decimal,
}

#[derive(Debug, Serialize)]
struct TransactionRow {
    kind: TransactionKind,
    amount: Decimal,
    from: Option<AccountId>,
    to: Option<AccountId>,
    timestamp: DateTime<Utc>,
}

pub fn print_accounts<W>(output: &mut W, accounts: &[Account]) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        let row = BalanceRow {
            account: acc.id,
            balance: acc.balance,
        };
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

pub fn print_transactions<W>(output: &mut W, records: &[TransactionRecord]) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for record in records {
        let row = TransactionRow {
            kind: record.kind,
            amount: record.amount,
            from: record.from_account,
            to: record.to_account,
            timestamp: record.timestamp,
        };
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
