use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::entities::beneficiary::Beneficiary;
use crate::utility::{
    normalize_ifsc, validate_accounts_match, validate_transfer_ifsc, TRANSFER_ACCOUNT_RE,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_transfer_accounts_match"))]
pub struct BankTransferRequest {
    #[validate(regex(
        path = *TRANSFER_ACCOUNT_RE,
        message = "Account number must be 10 to 18 digits"
    ))]
    pub recipient_account: String,

    #[validate(length(min = 1, message = "Please confirm the account number"))]
    pub confirm_account: String,

    #[validate(custom(function = "validate_transfer_ifsc"))]
    pub ifsc_code: String,

    #[validate(length(min = 1, message = "Recipient name is required"))]
    pub recipient_name: String,

    #[validate(range(min = 1.0, message = "Amount must be at least 1"))]
    pub amount: f64,

    pub remarks: Option<String>,
}

fn validate_transfer_accounts_match(req: &BankTransferRequest) -> Result<(), ValidationError> {
    validate_accounts_match(&req.recipient_account, &req.confirm_account)
}

impl BankTransferRequest {
    pub fn normalize(mut self) -> Self {
        self.recipient_account = self.recipient_account.trim().to_string();
        self.confirm_account = self.confirm_account.trim().to_string();
        self.ifsc_code = normalize_ifsc(&self.ifsc_code);
        self.recipient_name = self.recipient_name.trim().to_string();
        self.remarks = self
            .remarks
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self
    }
}

/// Transfer form fields filled in from a saved beneficiary; the amount is
/// left to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPrefill {
    pub recipient_account: String,
    pub confirm_account: String,
    pub recipient_name: String,
    pub ifsc_code: String,
}

impl From<&Beneficiary> for TransferPrefill {
    fn from(b: &Beneficiary) -> Self {
        Self {
            recipient_account: b.account_number.clone(),
            confirm_account: b.account_number.clone(),
            recipient_name: b.name.clone(),
            ifsc_code: b.ifsc.to_uppercase(),
        }
    }
}

impl TransferPrefill {
    pub fn into_request(self, amount: f64, remarks: Option<String>) -> BankTransferRequest {
        BankTransferRequest {
            recipient_account: self.recipient_account,
            confirm_account: self.confirm_account,
            ifsc_code: self.ifsc_code,
            recipient_name: self.recipient_name,
            amount,
            remarks,
        }
    }
}
