pub mod balance;
pub mod interest;
pub mod post;
pub mod statement;
