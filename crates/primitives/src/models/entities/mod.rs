pub mod bank_transaction;
pub mod beneficiary;
pub mod enum_types;

pub use bank_transaction::*;
pub use beneficiary::*;
pub use enum_types::*;
