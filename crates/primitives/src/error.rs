use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Duplicate(String),
    NotFound(String),
    Validation(validator::ValidationErrors),
    Pin(String),
    InvalidState(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Duplicate(e) => write!(f, "Duplicate error: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Pin(e) => write!(f, "PIN error: {}", e),
            ApiError::InvalidState(e) => write!(f, "Invalid state: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl ApiError {
    /// Text the presentation layer shows next to the form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Duplicate(_) => "Beneficiary already exists for this account & IFSC.".into(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Validation(_) => "Please correct the highlighted fields.".into(),
            ApiError::Pin(msg) => msg.clone(),
            ApiError::InvalidState(msg) => msg.clone(),
            ApiError::Internal(_) => "Something went wrong. Please try again.".into(),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, ApiError::Duplicate(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
