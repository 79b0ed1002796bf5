use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utility::normalize_ifsc;

/// A saved transfer recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: u64,
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Beneficiary {
    /// Same account number and same IFSC once both are normalized.
    pub fn matches_account(&self, account_number: &str, ifsc: &str) -> bool {
        self.account_number == account_number && normalize_ifsc(&self.ifsc) == normalize_ifsc(ifsc)
    }
}

/// Create payload: everything but the store-assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBeneficiary {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Partial update. `None` leaves a field untouched, as does a blank IFSC;
/// for the contact fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub ifsc: Option<String>,
    #[serde(default)]
    pub email: Option<Option<String>>,
    #[serde(default)]
    pub phone: Option<Option<String>>,
}

impl BeneficiaryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.account_number.is_none()
            && self.bank_name.is_none()
            && self.ifsc.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Returns a copy of `current` with the supplied fields applied.
    pub fn apply_to(&self, current: &Beneficiary) -> Beneficiary {
        let mut merged = current.clone();

        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(account_number) = &self.account_number {
            merged.account_number = account_number.clone();
        }
        if let Some(bank_name) = &self.bank_name {
            merged.bank_name = bank_name.clone();
        }
        // A blank IFSC keeps the stored one.
        if let Some(ifsc) = self.ifsc.as_deref().map(normalize_ifsc) {
            if !ifsc.is_empty() {
                merged.ifsc = ifsc;
            }
        }
        if let Some(email) = &self.email {
            merged.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            merged.phone = phone.clone();
        }

        merged
    }
}
