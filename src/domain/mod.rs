pub mod account;
pub mod ledger;
pub mod registry;
pub mod savings;
pub mod transaction;
