use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Beneficiary IFSC: four letters, a literal zero, six digits.
pub static IFSC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[0-9]{6}$").expect("Invalid IFSC regex"));

/// Transfer IFSC: the branch part may be alphanumeric.
pub static TRANSFER_IFSC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("Invalid transfer IFSC regex"));

pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone regex"));

pub static TRANSFER_ACCOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10,18}$").expect("Invalid account number regex"));

pub static LOOSE_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Invalid email regex"));

/// Seven to ten digits once separators are ignored.
pub static CONTACT_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\D*\d){7,10}\D*$").expect("Invalid contact phone regex"));

static PIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("Invalid PIN regex"));

pub const INVALID_PIN_MESSAGE: &str = "Please enter a valid 4-digit PIN.";

pub fn normalize_ifsc(ifsc: &str) -> String {
    ifsc.trim().to_uppercase()
}

pub fn is_valid_ifsc(ifsc: &str) -> bool {
    IFSC_RE.is_match(&normalize_ifsc(ifsc))
}

pub fn is_valid_pin(pin: &str) -> bool {
    PIN_RE.is_match(pin)
}

/// Confirmation fields are only compared once both hold a value, so a
/// half-filled form never shows a mismatch.
pub fn validate_accounts_match(account: &str, confirmation: &str) -> Result<(), ValidationError> {
    if account.is_empty() || confirmation.is_empty() {
        return Ok(());
    }

    if account != confirmation {
        let mut err = ValidationError::new("accounts_mismatch");
        err.message = Some("Account numbers do not match".into());
        return Err(err);
    }

    Ok(())
}

pub fn validate_ifsc(ifsc: &str) -> Result<(), ValidationError> {
    if is_valid_ifsc(ifsc) {
        Ok(())
    } else {
        let mut err = ValidationError::new("ifsc_format");
        err.message = Some("IFSC must be 4 letters, 0, then 6 digits".into());
        Err(err)
    }
}

pub fn validate_transfer_ifsc(ifsc: &str) -> Result<(), ValidationError> {
    if TRANSFER_IFSC_RE.is_match(&normalize_ifsc(ifsc)) {
        Ok(())
    } else {
        Err(ValidationError::new("ifsc_format"))
    }
}
