use crate::{
    common::error::LedgerError,
    domain::transaction::{Describe, TransactionRecord},
};

/// The ordered, capacity-bounded record list owned by an account.
#[derive(Debug)]
pub struct Ledger<'r> {
    records: Vec<TransactionRecord<'r>>,
    capacity: usize,
}

impl<'r> Ledger<'r> {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Appends at the end. On a full ledger the record is dropped and
    /// `CapacityExceeded` returned.
    pub fn push(&mut self, record: TransactionRecord<'r>) -> Result<(), LedgerError> {
        if self.is_full() {
            return Err(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[TransactionRecord<'r>] {
        &self.records
    }

    pub fn descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(|r| r.describe())
    }
}
