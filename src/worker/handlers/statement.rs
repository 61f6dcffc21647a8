use std::io::Write;

use crate::{
    common::{error::AppError, money::Money},
    domain::{
        registry::Registry,
        savings::SavingsAccount,
        transaction::{Describe, TransactionRecord},
    },
    io::writer,
};

pub fn list<W: Write>(account: &SavingsAccount<'_>, out: &mut W) -> Result<(), AppError> {
    let account = account.account();
    writeln!(out, "Transactions for {}:", account.name())?;
    for line in account.transactions() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints any describable entry. Works the same for one-off and recurring
/// records.
pub fn print_entry<W: Write>(entry: &dyn Describe, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{}", entry.describe())?;
    Ok(())
}

/// Builds a display-only recurring record, prints it and drops it.
pub fn recurring<W: Write>(
    registry: &Registry,
    kind: String,
    amount: Money,
    times: u32,
    out: &mut W,
) -> Result<(), AppError> {
    match TransactionRecord::recurring(registry, kind, amount, times) {
        Ok(record) => print_entry(&record, out),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(())
        }
    }
}

pub fn export<W: Write>(account: &SavingsAccount<'_>, out: &mut W) -> Result<(), AppError> {
    writer::write_statement(out, account.account())?;
    Ok(())
}

pub fn counts<W: Write>(registry: &Registry, out: &mut W) -> Result<(), AppError> {
    writeln!(
        out,
        "Live accounts: {}, live transactions: {}",
        registry.total_accounts(),
        registry.total_transactions()
    )?;
    Ok(())
}
