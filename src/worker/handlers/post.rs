use std::io::Write;

use crate::{
    common::{error::AppError, money::Money},
    domain::{account::posting_summary, savings::SavingsAccount},
};

pub fn handle<W: Write>(
    account: &mut SavingsAccount<'_>,
    kind: String,
    amount: Money,
    out: &mut W,
) -> Result<(), AppError> {
    let account = account.account_mut();
    match account.add_transaction(kind, amount) {
        Ok(_) => writeln!(out, "{}", posting_summary(account.name(), amount))?,
        // capacity is reported, not fatal
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

pub fn handle_bulk<W: Write>(
    account: &mut SavingsAccount<'_>,
    entries: Vec<(String, Money)>,
    out: &mut W,
) -> Result<(), AppError> {
    let account = account.account_mut();
    let amounts: Vec<Money> = entries.iter().map(|(_, amount)| *amount).collect();
    let results = account.add_bulk(entries);

    let mut recorded = 0;
    for (amount, result) in amounts.iter().zip(&results) {
        match result {
            Ok(_) => {
                recorded += 1;
                writeln!(out, "{}", posting_summary(account.name(), *amount))?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    writeln!(
        out,
        "Bulk add: {recorded} of {} entries recorded.",
        results.len()
    )?;
    Ok(())
}
