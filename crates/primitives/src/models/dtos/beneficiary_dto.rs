use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::entities::beneficiary::{BeneficiaryChanges, NewBeneficiary};
use crate::utility::{
    normalize_ifsc, validate_accounts_match, validate_ifsc, CONTACT_PHONE_RE, LOOSE_EMAIL_RE,
    PHONE_RE,
};

/// Body of the "add beneficiary" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_add_accounts_match"))]
pub struct AddBeneficiaryRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Bank name is required"))]
    pub bank_name: String,

    #[validate(custom(function = "validate_ifsc"))]
    pub ifsc: String,

    #[validate(length(min = 6, message = "Account number must be at least 6 characters"))]
    pub account_number: String,

    #[validate(length(min = 1, message = "Please confirm the account number"))]
    pub confirm_account_number: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *PHONE_RE, message = "Phone must be exactly 10 digits"))]
    pub phone: Option<String>,
}

fn validate_add_accounts_match(req: &AddBeneficiaryRequest) -> Result<(), ValidationError> {
    validate_accounts_match(&req.account_number, &req.confirm_account_number)
}

impl AddBeneficiaryRequest {
    pub fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.bank_name = self.bank_name.trim().to_string();
        self.ifsc = normalize_ifsc(&self.ifsc);
        self.account_number = self.account_number.trim().to_string();
        self.confirm_account_number = self.confirm_account_number.trim().to_string();
        self.email = non_blank(self.email);
        self.phone = non_blank(self.phone);
        self
    }

    pub fn into_new_beneficiary(self) -> NewBeneficiary {
        NewBeneficiary {
            name: self.name,
            account_number: self.account_number,
            bank_name: self.bank_name,
            ifsc: self.ifsc,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Body of the inline email/phone edit on the beneficiary list. A blank email
/// clears the stored one; the phone is always required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdateRequest {
    #[validate(regex(path = *LOOSE_EMAIL_RE, message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(regex(path = *CONTACT_PHONE_RE, message = "Phone must have 7 to 10 digits"))]
    pub phone: String,
}

impl ContactUpdateRequest {
    pub fn normalize(mut self) -> Self {
        self.email = non_blank(self.email);
        self.phone = self.phone.trim().to_string();
        self
    }

    pub fn into_changes(self) -> BeneficiaryChanges {
        BeneficiaryChanges {
            email: Some(self.email),
            phone: Some(Some(self.phone)),
            ..Default::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
