use std::io::Write;

use crate::{
    common::{error::AppError, money::Money},
    domain::savings::SavingsAccount,
};

pub fn show<W: Write>(account: &SavingsAccount<'_>, out: &mut W) -> Result<(), AppError> {
    let account = account.account();
    writeln!(
        out,
        "Current Balance in {}: ${}",
        account.name(),
        account.balance()
    )?;
    Ok(())
}

pub fn set<W: Write>(
    account: &mut SavingsAccount<'_>,
    balance: Money,
    out: &mut W,
) -> Result<(), AppError> {
    match account.account_mut().set_balance(balance) {
        Ok(()) => writeln!(out, "Balance set to ${balance}")?,
        Err(err) => writeln!(out, "Balance not changed: {err}")?,
    }
    Ok(())
}

pub fn rename<W: Write>(
    account: &mut SavingsAccount<'_>,
    name: String,
    out: &mut W,
) -> Result<(), AppError> {
    account.account_mut().set_name(name);
    writeln!(out, "Account renamed to {}", account.account().name())?;
    Ok(())
}
