use crate::common::money::Money;
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row for bulk entries: `kind,amount`.
struct CsvRow {
    kind: String,
    amount: String,
}

/// Reads bulk entries from a CSV reader.
///
/// Each row is `kind,amount`; the reader decides whether a header line is
/// expected. Blank kinds and unparsable amounts are reported with their
/// (1-based) row number.
///
/// # Examples
///
/// ```
/// use expense_tracker::io::reader::read_entries;
/// use csv::ReaderBuilder;
///
/// let data = "kind,amount\n\
/// Income,1200\n\
/// Expense,-75.5\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let entries: Vec<_> = read_entries(&mut rdr).collect();
///
/// assert_eq!(entries.len(), 2);
/// let (kind, amount) = entries[1].as_ref().unwrap();
/// assert_eq!(kind, "Expense");
/// assert_eq!(amount.to_string(), "-75.5");
/// ```
pub fn read_entries<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<(String, Money), String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, res)| to_entry(i + 1, res))
}

/// Parses one hand-typed `kind,amount` line on its own, so a malformed line
/// (an unclosed quote, say) cannot swallow the lines after it.
///
/// ```
/// use expense_tracker::io::reader::parse_line;
///
/// let (kind, amount) = parse_line(3, "Rent, -900").unwrap();
/// assert_eq!(kind, "Rent");
/// assert_eq!(amount.to_string(), "-900");
/// assert!(parse_line(4, "Rent").unwrap_err().starts_with("row 4:"));
/// ```
pub fn parse_line(row_no: usize, line: &str) -> Result<(String, Money), String> {
    let mut rdr = headerless(line.as_bytes());
    match rdr.deserialize::<CsvRow>().next() {
        Some(res) => to_entry(row_no, res),
        None => Err(format!("row {row_no}: empty row")),
    }
}

fn to_entry(row_no: usize, res: Result<CsvRow, csv::Error>) -> Result<(String, Money), String> {
    let row = res.map_err(|e| format!("row {row_no}: {e}"))?;
    let kind = row.kind.trim().to_string();
    if kind.is_empty() {
        return Err(format!("row {row_no}: missing transaction type"));
    }
    let amount = Money::from_str(&row.amount)
        .map_err(|e| format!("row {row_no}: invalid amount '{}': {e}", row.amount.trim()))?;
    Ok((kind, amount))
}

/// Builds the reader used for hand-typed bulk input: no header, trimmed
/// fields.
pub fn headerless<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_entries(input: &str, headers: bool) -> Vec<Result<(String, Money), String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(headers)
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());
        read_entries(&mut reader).collect()
    }

    #[test]
    fn parses_rows_in_order() {
        let data = "kind,amount\nIncome,300\nExpense,-100\nGym Membership , -50 \n";
        let entries = collect_entries(data, true);

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0],
            Ok(("Income".to_string(), Money::from_str("300").unwrap()))
        );
        assert_eq!(
            entries[1],
            Ok(("Expense".to_string(), Money::from_str("-100").unwrap()))
        );
        assert_eq!(
            entries[2],
            Ok(("Gym Membership".to_string(), Money::from_str("-50").unwrap()))
        );
    }

    #[test]
    fn headerless_input() {
        let mut reader = headerless("Income,10\nExpense,-2.5\n".as_bytes());
        let entries: Vec<_> = read_entries(&mut reader).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.is_ok()));
    }

    #[test]
    fn reports_bad_amount_with_row_number() {
        let entries = collect_entries("Income,10\nExpense,lots\n", false);

        assert!(entries[0].is_ok());
        let err = entries[1].as_ref().unwrap_err();
        assert!(err.starts_with("row 2: invalid amount 'lots'"), "{err}");
    }

    #[test]
    fn reports_missing_kind() {
        let entries = collect_entries(",10\n", false);
        assert_eq!(entries[0], Err("row 1: missing transaction type".to_string()));
    }

    #[test]
    fn unclosed_quote_only_spoils_its_own_line() {
        let lines = ["\"Food,10", "Income,5", "Expense,-2"];
        let entries: Vec<_> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| parse_line(i + 1, line))
            .collect();

        assert!(entries[0].as_ref().unwrap_err().starts_with("row 1:"));
        assert_eq!(
            entries[1],
            Ok(("Income".to_string(), Money::from_str("5").unwrap()))
        );
        assert_eq!(
            entries[2],
            Ok(("Expense".to_string(), Money::from_str("-2").unwrap()))
        );
    }

    #[test]
    fn blank_line_is_reported() {
        assert_eq!(parse_line(7, ""), Err("row 7: empty row".to_string()));
    }

    #[test]
    fn reports_short_row() {
        let entries = collect_entries("Income\n", false);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_err());
    }
}
