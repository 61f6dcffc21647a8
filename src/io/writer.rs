use std::io::Write;

use crate::domain::{
    account::Account,
    transaction::{Recurrence, TransactionRecord},
};

#[derive(serde::Serialize)]
/// Internal CSV output row for an account statement.
///
/// Headers written (in this order): `position,kind,amount,recurrence`.
/// `amount` is formatted to 4 decimal places; `recurrence` is empty for
/// one-off records.
struct StatementRow<'a> {
    position: usize,
    kind: &'a str,
    amount: String,
    recurrence: Option<u32>,
}

impl<'a> StatementRow<'a> {
    fn from_record(position: usize, record: &'a TransactionRecord<'_>) -> Self {
        Self {
            position,
            kind: record.kind(),
            amount: record.amount().to_string_4dp(),
            recurrence: match record.recurrence() {
                Recurrence::Once => None,
                Recurrence::Repeating(times) => Some(times.get()),
            },
        }
    }
}

/// Writes an account's ledger to a CSV writer, oldest record first.
///
/// Positions start at 1.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use expense_tracker::common::money::Money;
/// use expense_tracker::domain::{account::Account, registry::Registry};
/// use expense_tracker::io::writer::write_statement;
///
/// let registry = Registry::new();
/// let mut account = Account::open(&registry, "Checking", Money::zero());
/// account.add_transaction("Income", Money::from_units(300)).unwrap();
///
/// let mut out = Vec::new();
/// write_statement(&mut out, &account).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "position,kind,amount,recurrence\n1,Income,300.0000,\n");
/// ```
pub fn write_statement<W: Write>(writer: W, account: &Account<'_>) -> Result<(), csv::Error> {
    write_records(writer, account.records())
}

pub fn write_records<W: Write>(
    writer: W,
    records: &[TransactionRecord<'_>],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if records.is_empty() {
        wtr.write_record(["position", "kind", "amount", "recurrence"])?;
    }
    for (i, record) in records.iter().enumerate() {
        wtr.serialize(StatementRow::from_record(i + 1, record))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::registry::Registry};
    use std::str::FromStr;

    fn write_to_string(records: &[TransactionRecord<'_>]) -> String {
        let mut out = Vec::new();
        write_records(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_ledger_order() {
        let registry = Registry::new();
        let mut account = Account::open(&registry, "Checking", Money::zero());
        account
            .add_transaction("Income", Money::from_str("1.25").unwrap())
            .unwrap();
        account
            .add_transaction("Expense", Money::from_str("-0.5").unwrap())
            .unwrap();

        let s = write_to_string(account.records());
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "position,kind,amount,recurrence");
        assert_eq!(lines[1], "1,Income,1.2500,");
        assert_eq!(lines[2], "2,Expense,-0.5000,");
    }

    #[test]
    fn writes_recurrence_count() {
        let registry = Registry::new();
        let gym =
            TransactionRecord::recurring(&registry, "Gym", Money::from_units(-50), 3).unwrap();

        let s = write_to_string(std::slice::from_ref(&gym));
        assert_eq!(s.lines().nth(1), Some("1,Gym,-50.0000,3"));
    }

    #[test]
    fn empty_ledger_still_has_header() {
        let s = write_to_string(&[]);
        assert_eq!(s, "position,kind,amount,recurrence\n");
    }

    #[test]
    fn quotes_kinds_containing_commas() {
        let registry = Registry::new();
        let mut account = Account::open(&registry, "Checking", Money::zero());
        account
            .add_transaction("Food, drinks", Money::from_units(-8))
            .unwrap();

        let s = write_to_string(account.records());
        assert_eq!(s.lines().nth(1), Some("1,\"Food, drinks\",-8.0000,"));
    }
}
