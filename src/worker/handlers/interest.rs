use std::io::Write;

use crate::{common::error::AppError, domain::savings::SavingsAccount};

pub fn handle<W: Write>(account: &mut SavingsAccount<'_>, out: &mut W) -> Result<(), AppError> {
    let balance = account.apply_interest();
    writeln!(out, "Interest applied! New balance: ${balance}")?;
    Ok(())
}
