use crate::common::money::Money;

/// A menu request parsed by the front end and sent to the worker for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    AddTransaction { kind: String, amount: Money },
    AddBulk { entries: Vec<(String, Money)> },
    ShowBalance,
    ShowTransactions,
    ApplyInterest,
    /// Builds a throwaway recurring record just to print its description.
    ShowRecurring { kind: String, amount: Money, times: u32 },
    Rename { name: String },
    SetBalance { balance: Money },
    ExportStatement,
    ShowCounts,
}
