pub mod beneficiary_repository;
pub mod transaction_repository;
