use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::entities::enum_types::{TransactionStatus, TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransaction {
    pub id: Uuid,
    pub sender_account_number: String,
    pub recipient_account_number: String,
    pub recipient_name: String,
    pub ifsc_code: String,
    pub amount: f64,
    pub remarks: Option<String>,
    pub status: TransactionStatus,
    pub transaction_type: TransactionType,
    pub transaction_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBankTransaction {
    pub sender_account_number: String,
    pub recipient_account_number: String,
    pub recipient_name: String,
    pub ifsc_code: String,
    pub amount: f64,
    pub remarks: Option<String>,
    pub transaction_type: TransactionType,
}
