use std::{fmt, str::FromStr};

use bigdecimal::{BigDecimal, Signed};
use tracing::info;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{account::Account, registry::Registry},
};

/// A non-negative percentage, e.g. `5` for 5%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRate(BigDecimal);

impl InterestRate {
    pub fn new(percent: BigDecimal) -> Result<Self, LedgerError> {
        if percent.is_negative() {
            return Err(LedgerError::InvalidInterestRate(percent.to_string()));
        }
        Ok(Self(percent))
    }

    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    pub fn as_percent(&self) -> &BigDecimal {
        &self.0
    }
}

impl FromStr for InterestRate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: BigDecimal = s
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidInterestRate(s.trim().to_string()))?;
        Self::new(percent)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.to_string();
        let trimmed = if raw.contains('.') {
            raw.trim_end_matches('0').trim_end_matches('.')
        } else {
            raw.as_str()
        };
        write!(f, "{trimmed}%")
    }
}

/// An [`Account`] that also earns interest on demand.
#[derive(Debug)]
pub struct SavingsAccount<'r> {
    account: Account<'r>,
    rate: InterestRate,
}

impl<'r> SavingsAccount<'r> {
    pub fn open(
        registry: &'r Registry,
        name: impl Into<String>,
        initial_balance: Money,
        rate: InterestRate,
    ) -> Self {
        Self {
            account: Account::open(registry, name, initial_balance),
            rate,
        }
    }

    pub fn with_capacity(
        registry: &'r Registry,
        name: impl Into<String>,
        initial_balance: Money,
        rate: InterestRate,
        capacity: usize,
    ) -> Self {
        Self {
            account: Account::with_capacity(registry, name, initial_balance, capacity),
            rate,
        }
    }

    pub fn account(&self) -> &Account<'r> {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account<'r> {
        &mut self.account
    }

    pub fn rate(&self) -> &InterestRate {
        &self.rate
    }

    /// Adds `balance * rate / 100` to the balance and returns the result.
    /// Every call compounds on the current balance.
    pub fn apply_interest(&mut self) -> Money {
        let grown = self.account.balance().grown_by_percent(self.rate.as_percent());
        self.account.overwrite_balance(grown);
        info!("Interest applied! New balance: ${grown}");
        grown
    }

    pub fn close(self) {
        self.account.close();
    }
}
