use std::num::NonZeroU32;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::registry::{Registration, Registry},
};

/// Anything that can render itself as one line of a ledger listing.
pub trait Describe {
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Once,
    Repeating(NonZeroU32),
}

#[derive(Debug)]
pub struct TransactionRecord<'r> {
    kind: String,
    amount: Money,
    recurrence: Recurrence,
    _registration: Registration<'r>,
}

impl<'r> TransactionRecord<'r> {
    pub fn simple(registry: &'r Registry, kind: impl Into<String>, amount: Money) -> Self {
        Self {
            kind: kind.into(),
            amount,
            recurrence: Recurrence::Once,
            _registration: registry.register_transaction(),
        }
    }

    /// A record annotated with a repeat count. A count of zero is rejected
    /// before anything is registered.
    pub fn recurring(
        registry: &'r Registry,
        kind: impl Into<String>,
        amount: Money,
        times: u32,
    ) -> Result<Self, LedgerError> {
        let times = NonZeroU32::new(times).ok_or(LedgerError::InvalidRecurrence)?;
        Ok(Self {
            kind: kind.into(),
            amount,
            recurrence: Recurrence::Repeating(times),
            _registration: registry.register_transaction(),
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn recurrence(&self) -> Recurrence {
        self.recurrence
    }
}

impl Describe for TransactionRecord<'_> {
    fn describe(&self) -> String {
        let base = format!("Transaction Type: {}, Amount: ${}", self.kind, self.amount);
        match self.recurrence {
            Recurrence::Once => base,
            Recurrence::Repeating(times) => format!("{base} Recurring for {times} times."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(v: &str) -> Money {
        Money::from_str(v).unwrap()
    }

    fn render(item: &dyn Describe) -> String {
        item.describe()
    }

    #[test]
    fn simple_description() {
        let registry = Registry::new();
        let tx = TransactionRecord::simple(&registry, "Income", money("300"));
        assert_eq!(tx.describe(), "Transaction Type: Income, Amount: $300");
        assert!(tx.amount().is_positive());
        assert_eq!(tx.recurrence(), Recurrence::Once);
    }

    #[test]
    fn recurring_description_appends_suffix() {
        let registry = Registry::new();
        let tx = TransactionRecord::recurring(&registry, "Gym", money("-50"), 3).unwrap();
        assert_eq!(
            tx.describe(),
            "Transaction Type: Gym, Amount: $-50 Recurring for 3 times."
        );
    }

    #[test]
    fn variants_are_interchangeable_behind_describe() {
        let registry = Registry::new();
        let items = [
            TransactionRecord::simple(&registry, "Expense", money("-12.75")),
            TransactionRecord::recurring(&registry, "Rent", money("-900"), 12).unwrap(),
        ];
        let lines: Vec<String> = items.iter().map(|t| render(t)).collect();
        assert_eq!(lines[0], "Transaction Type: Expense, Amount: $-12.75");
        assert_eq!(
            lines[1],
            "Transaction Type: Rent, Amount: $-900 Recurring for 12 times."
        );
    }

    #[test]
    fn zero_recurrence_is_rejected_without_counting() {
        let registry = Registry::new();
        let err = TransactionRecord::recurring(&registry, "Gym", money("-50"), 0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidRecurrence);
        assert_eq!(registry.total_transactions(), 0);
    }

    #[test]
    fn records_are_counted_while_alive() {
        let registry = Registry::new();
        let a = TransactionRecord::simple(&registry, "Income", money("0"));
        let b = TransactionRecord::recurring(&registry, "Gym", money("-50"), 1).unwrap();
        assert_eq!(registry.total_transactions(), 2);
        drop(a);
        assert_eq!(registry.total_transactions(), 1);
        drop(b);
        assert_eq!(registry.total_transactions(), 0);
    }
}
