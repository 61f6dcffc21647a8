use tracing::{debug, info, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        ledger::Ledger,
        registry::{Registration, Registry},
        transaction::TransactionRecord,
    },
};

pub const DEFAULT_CAPACITY: usize = 10;

/// A named balance and the ledger of records that produced it.
///
/// Every successful [`Account::add_transaction`] appends one record and moves
/// the balance by exactly its amount, so `balance == initial + Σ amounts`
/// holds until [`Account::set_balance`] or interest overwrites it.
#[derive(Debug)]
pub struct Account<'r> {
    name: String,
    balance: Money,
    // dropped before `registration`: records are released first
    ledger: Ledger<'r>,
    registration: Registration<'r>,
}

/// The line shown after a posting, e.g. `Added expense of $100 to Checking`.
pub fn posting_summary(account_name: &str, amount: Money) -> String {
    if amount.is_positive() {
        format!("Added income of ${amount} to {account_name}")
    } else {
        format!("Added expense of ${} to {account_name}", amount.abs())
    }
}

impl<'r> Account<'r> {
    pub fn open(registry: &'r Registry, name: impl Into<String>, initial_balance: Money) -> Self {
        Self::with_capacity(registry, name, initial_balance, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(
        registry: &'r Registry,
        name: impl Into<String>,
        initial_balance: Money,
        capacity: usize,
    ) -> Self {
        let name = name.into();
        debug!(account = %name, balance = %initial_balance, capacity, "account opened");
        Self {
            name,
            balance: initial_balance,
            ledger: Ledger::new(capacity),
            registration: registry.register_account(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &'r Registry {
        self.registration.registry()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn capacity(&self) -> usize {
        self.ledger.capacity()
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ledger.is_full()
    }

    pub fn records(&self) -> &[TransactionRecord<'r>] {
        self.ledger.records()
    }

    /// Records a simple transaction and returns the new balance.
    pub fn add_transaction(
        &mut self,
        kind: impl Into<String>,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        if self.ledger.is_full() {
            warn!(account = %self.name, capacity = self.ledger.capacity(), "transaction limit reached");
            return Err(LedgerError::CapacityExceeded {
                capacity: self.ledger.capacity(),
            });
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            warn!(account = %self.name, balance = %self.balance, %amount, "posting would overflow balance");
            return Err(LedgerError::BalanceOverflow {
                balance: self.balance,
                amount,
            });
        };

        let record = TransactionRecord::simple(self.registry(), kind, amount);
        self.ledger.push(record)?;
        self.balance = balance;

        info!("{}", posting_summary(&self.name, amount));
        Ok(self.balance)
    }

    /// Posts each entry in order. A rejected entry neither rolls back the
    /// earlier ones nor stops the later ones.
    pub fn add_bulk<I, S>(&mut self, entries: I) -> Vec<Result<Money, LedgerError>>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .map(|(kind, amount)| self.add_transaction(kind, amount))
            .collect()
    }

    /// Descriptions of every record, oldest first. Each call starts over.
    pub fn transactions(&self) -> impl Iterator<Item = String> + '_ {
        self.ledger.descriptions()
    }

    /// Overwrites the balance without touching the ledger. Negative values
    /// are rejected.
    pub fn set_balance(&mut self, balance: Money) -> Result<(), LedgerError> {
        if balance.is_negative() {
            warn!(account = %self.name, %balance, "rejected negative balance");
            return Err(LedgerError::InvalidBalance(balance));
        }
        self.balance = balance;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn overwrite_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Releases every record, then the account itself.
    pub fn close(self) {
        debug!(account = %self.name, records = self.ledger.len(), "account closed");
    }
}
