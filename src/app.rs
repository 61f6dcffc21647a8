use std::{
    fmt::Display,
    io::{BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::Parser;
use tracing::info;

use crate::{
    common::{error::AppError, event::LedgerCommand, money::Money},
    domain::{
        account::DEFAULT_CAPACITY,
        registry::Registry,
        savings::{InterestRate, SavingsAccount},
    },
    io::reader,
    worker::processor::Processor,
};

const MENU: &str = "\n*** Expense Tracker Menu ***\n\
1. Add Transaction\n\
2. Display Balance\n\
3. Display All Transactions\n\
4. Apply Interest (Savings Account Only)\n\
5. Add Bulk Transactions\n\
6. Show Recurring Transaction\n\
7. Rename Account\n\
8. Set Balance\n\
9. Export Statement (CSV)\n\
10. Show Instance Counts\n\
0. Exit\n\
Enter your choice: ";

/// Expense Tracker - a single savings account ledger driven from a text menu
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Track income and expenses on a savings account from the terminal")]
#[command(version)]
pub struct Cli {
    /// Account name (prompted for when omitted)
    #[arg(short, long, env = "EXPENSE_TRACKER_NAME")]
    pub name: Option<String>,

    /// Initial balance, e.g. "500" or "-20.5" (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub balance: Option<String>,

    /// Interest rate in percent, e.g. "5" (prompted for when omitted)
    #[arg(short, long)]
    pub rate: Option<String>,

    /// Maximum number of transactions the account can hold
    #[arg(short, long, env = "EXPENSE_TRACKER_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// CSV file with a `kind,amount` header to post as a bulk add at startup
    #[arg(long)]
    pub import: Option<PathBuf>,

    /// Log postings and interest to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            name: None,
            balance: None,
            rate: None,
            capacity: DEFAULT_CAPACITY,
            import: None,
            verbose: false,
        }
    }
}

enum Choice {
    Command(LedgerCommand),
    Exit,
    Invalid,
    /// The operation was abandoned after bad input; already reported.
    Skipped,
}

/// Line-oriented prompt over any reader/writer pair.
struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `None` means the input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn parse_or_report<T>(&mut self, raw: &str, what: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                writeln!(self.out, "Invalid {what}: {e}")?;
                Ok(None)
            }
        }
    }

    /// Keeps asking until the answer parses; `None` only on end of input.
    fn ask_until_valid<T>(&mut self, question: &str, what: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
        T::Err: Display,
    {
        while let Some(raw) = self.ask(question)? {
            if let Some(value) = self.parse_or_report(&raw, what)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// One attempt: `Ok(None)` covers both end of input and a reported parse
    /// failure.
    fn ask_once<T>(&mut self, question: &str, what: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.ask(question)? {
            Some(raw) => self.parse_or_report(&raw, what),
            None => Ok(None),
        }
    }

    fn read_bulk_entries(&mut self) -> Result<Vec<(String, Money)>, AppError> {
        writeln!(
            self.out,
            "Enter one transaction per line as type,amount (empty line to finish):"
        )?;
        let mut entries = Vec::new();
        let mut row_no = 0;
        while let Some(line) = self.ask("> ")? {
            if line.is_empty() {
                break;
            }
            row_no += 1;
            match reader::parse_line(row_no, &line) {
                Ok(entry) => entries.push(entry),
                Err(e) => writeln!(self.out, "Skipping entry: {e}")?,
            }
        }
        Ok(entries)
    }

    fn read_choice(&mut self) -> Result<Option<Choice>, AppError> {
        let Some(raw) = self.ask(MENU)? else {
            return Ok(None);
        };
        let choice = match raw.as_str() {
            "1" => {
                let Some(kind) = self.ask("Enter transaction type (Income/Expense): ")? else {
                    return Ok(None);
                };
                match self.ask_once::<Money>(
                    "Enter transaction amount (positive for income, negative for expense): ",
                    "amount",
                )? {
                    Some(amount) => Choice::Command(LedgerCommand::AddTransaction { kind, amount }),
                    None => Choice::Skipped,
                }
            }
            "2" => Choice::Command(LedgerCommand::ShowBalance),
            "3" => Choice::Command(LedgerCommand::ShowTransactions),
            "4" => Choice::Command(LedgerCommand::ApplyInterest),
            "5" => Choice::Command(LedgerCommand::AddBulk {
                entries: self.read_bulk_entries()?,
            }),
            "6" => {
                let Some(kind) = self.ask("Enter transaction type: ")? else {
                    return Ok(None);
                };
                let Some(amount) = self.ask_once::<Money>("Enter amount: ", "amount")? else {
                    return Ok(Some(Choice::Skipped));
                };
                match self.ask_once::<u32>("Enter number of recurrences: ", "count")? {
                    Some(times) => Choice::Command(LedgerCommand::ShowRecurring {
                        kind,
                        amount,
                        times,
                    }),
                    None => Choice::Skipped,
                }
            }
            "7" => match self.ask("Enter the new account name: ")? {
                Some(name) => Choice::Command(LedgerCommand::Rename { name }),
                None => return Ok(None),
            },
            "8" => match self.ask_once::<Money>("Enter the new balance: ", "amount")? {
                Some(balance) => Choice::Command(LedgerCommand::SetBalance { balance }),
                None => Choice::Skipped,
            },
            "9" => Choice::Command(LedgerCommand::ExportStatement),
            "10" => Choice::Command(LedgerCommand::ShowCounts),
            "0" => Choice::Exit,
            _ => Choice::Invalid,
        };
        Ok(Some(choice))
    }
}

fn parse_arg<T>(raw: &str, what: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| AppError::Parse(format!("invalid {what} '{raw}': {e}")))
}

fn import_entries(path: &Path) -> Result<Vec<(String, Money)>, AppError> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    reader::read_entries(&mut rdr)
        .map(|entry| entry.map_err(AppError::Parse))
        .collect()
}

pub fn run<R, W>(cli: &Cli, input: R, out: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut console = Console { input, out };
    writeln!(console.out, "Welcome to the Expense Tracker!")?;

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => console
            .ask("Enter the account name: ")?
            .ok_or_else(|| AppError::Parse("no account name given".into()))?,
    };
    let balance: Money = match &cli.balance {
        Some(raw) => parse_arg(raw, "balance")?,
        None => console
            .ask_until_valid("Enter the initial balance: ", "amount")?
            .ok_or_else(|| AppError::Parse("no initial balance given".into()))?,
    };
    let rate: InterestRate = match &cli.rate {
        Some(raw) => parse_arg(raw, "interest rate")?,
        None => console
            .ask_until_valid("Enter the interest rate (for savings account): ", "interest rate")?
            .ok_or_else(|| AppError::Parse("no interest rate given".into()))?,
    };

    let registry = Registry::new();
    let mut account = SavingsAccount::with_capacity(&registry, name, balance, rate, cli.capacity);
    let mut processor = Processor::new();
    info!(
        account = account.account().name(),
        rate = %account.rate(),
        capacity = cli.capacity,
        "expense tracker started"
    );

    if let Some(path) = &cli.import {
        let entries = import_entries(path)?;
        processor.process(
            &mut account,
            LedgerCommand::AddBulk { entries },
            &mut console.out,
        )?;
    }

    loop {
        match console.read_choice()? {
            Some(Choice::Command(command)) => {
                processor.process(&mut account, command, &mut console.out)?
            }
            Some(Choice::Invalid) => writeln!(console.out, "Invalid choice. Please try again.")?,
            Some(Choice::Skipped) => {}
            Some(Choice::Exit) | None => break,
        }
    }

    writeln!(console.out, "Exiting the Expense Tracker. Goodbye!")?;
    account.close();
    Ok(())
}
