use chrono::{Duration, Utc};
use ezpay_primitives::models::beneficiary::Beneficiary;
use ezpay_primitives::models::beneficiary_dto::AddBeneficiaryRequest;
use ezpay_primitives::models::transfer_dto::BankTransferRequest;
use fake::faker::name::en::Name;
use fake::Fake;

pub fn random_account_number() -> String {
    let n: u64 = (1_000_000_000..9_999_999_999).fake();
    n.to_string()
}

/// A form submission that passes every validation rule.
pub fn create_add_beneficiary_request() -> AddBeneficiaryRequest {
    let account = random_account_number();
    AddBeneficiaryRequest {
        name: Name().fake(),
        bank_name: "HDFC Bank".to_string(),
        ifsc: "hdfc0001234".to_string(),
        account_number: account.clone(),
        confirm_account_number: account,
        email: Some("payee@example.com".to_string()),
        phone: Some("9876543210".to_string()),
    }
}

pub fn create_add_beneficiary_request_for(account: &str, ifsc: &str) -> AddBeneficiaryRequest {
    AddBeneficiaryRequest {
        account_number: account.to_string(),
        confirm_account_number: account.to_string(),
        ifsc: ifsc.to_string(),
        ..create_add_beneficiary_request()
    }
}

pub fn create_transfer_request() -> BankTransferRequest {
    let account = random_account_number();
    BankTransferRequest {
        recipient_account: account.clone(),
        confirm_account: account,
        ifsc_code: "sbin0000123".to_string(),
        recipient_name: Name().fake(),
        amount: 2500.0,
        remarks: Some("rent".to_string()),
    }
}

pub fn beneficiary(id: u64, account: &str, ifsc: &str, age_days: i64) -> Beneficiary {
    Beneficiary {
        id,
        name: Name().fake(),
        account_number: account.to_string(),
        bank_name: "Seed Bank".to_string(),
        ifsc: ifsc.to_string(),
        email: None,
        phone: None,
        created_at: Utc::now() - Duration::days(age_days),
    }
}
