pub mod beneficiary_dto;
pub mod transfer_dto;

pub use beneficiary_dto::*;
pub use transfer_dto::*;
