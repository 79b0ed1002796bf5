pub mod beneficiary_service;
pub mod transfer_service;
