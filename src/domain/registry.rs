use std::sync::atomic::{AtomicUsize, Ordering};

/// Live-instance counters shared by every account and transaction created
/// against it.
///
/// The registry is handed to constructors by reference. Each constructor takes
/// a [`Registration`] guard, and the count goes back down when that guard is
/// dropped, so an entity is released exactly once on every exit path.
///
/// ```
/// use expense_tracker::domain::registry::Registry;
///
/// let registry = Registry::new();
/// let guard = registry.register_account();
/// assert_eq!(registry.total_accounts(), 1);
/// drop(guard);
/// assert_eq!(registry.total_accounts(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    transactions: AtomicUsize,
    accounts: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tally {
    Transaction,
    Account,
}

/// Proof that one instance is counted in a [`Registry`]. Not `Clone`.
#[derive(Debug)]
pub struct Registration<'r> {
    registry: &'r Registry,
    tally: Tally,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            transactions: AtomicUsize::new(0),
            accounts: AtomicUsize::new(0),
        }
    }

    pub fn total_transactions(&self) -> usize {
        self.transactions.load(Ordering::SeqCst)
    }

    pub fn total_accounts(&self) -> usize {
        self.accounts.load(Ordering::SeqCst)
    }

    pub fn register_transaction(&self) -> Registration<'_> {
        self.counter(Tally::Transaction).fetch_add(1, Ordering::SeqCst);
        Registration {
            registry: self,
            tally: Tally::Transaction,
        }
    }

    pub fn register_account(&self) -> Registration<'_> {
        self.counter(Tally::Account).fetch_add(1, Ordering::SeqCst);
        Registration {
            registry: self,
            tally: Tally::Account,
        }
    }

    fn counter(&self, tally: Tally) -> &AtomicUsize {
        match tally {
            Tally::Transaction => &self.transactions,
            Tally::Account => &self.accounts,
        }
    }
}

impl<'r> Registration<'r> {
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.registry
            .counter(self.tally)
            .fetch_sub(1, Ordering::SeqCst);
    }
}
