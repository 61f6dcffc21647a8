use std::io::Write;

use crate::{
    common::{error::AppError, event::LedgerCommand},
    domain::savings::SavingsAccount,
    worker::handlers::{balance, interest, post, statement},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process<W: Write>(
        &mut self,
        account: &mut SavingsAccount<'_>,
        command: LedgerCommand,
        out: &mut W,
    ) -> Result<(), AppError> {
        match command {
            LedgerCommand::AddTransaction { kind, amount } => {
                post::handle(account, kind, amount, out)?;
            }
            LedgerCommand::AddBulk { entries } => {
                post::handle_bulk(account, entries, out)?;
            }
            LedgerCommand::ShowBalance => {
                balance::show(account, out)?;
            }
            LedgerCommand::ShowTransactions => {
                statement::list(account, out)?;
            }
            LedgerCommand::ApplyInterest => {
                interest::handle(account, out)?;
            }
            LedgerCommand::ShowRecurring {
                kind,
                amount,
                times,
            } => {
                statement::recurring(account.account().registry(), kind, amount, times, out)?;
            }
            LedgerCommand::Rename { name } => {
                balance::rename(account, name, out)?;
            }
            LedgerCommand::SetBalance { balance: value } => {
                balance::set(account, value, out)?;
            }
            LedgerCommand::ExportStatement => {
                statement::export(account, out)?;
            }
            LedgerCommand::ShowCounts => {
                statement::counts(account.account().registry(), out)?;
            }
        }
        Ok(())
    }
}
