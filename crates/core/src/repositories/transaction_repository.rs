use chrono::Utc;
use ezpay_primitives::error::ApiError;
use ezpay_primitives::models::bank_transaction::{BankTransaction, NewBankTransaction};
use ezpay_primitives::models::enum_types::TransactionStatus;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct TransactionRepository {
    transactions: RwLock<Vec<BankTransaction>>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<BankTransaction>>, ApiError> {
        self.transactions
            .read()
            .map_err(|_| ApiError::Internal("Transaction store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<BankTransaction>>, ApiError> {
        self.transactions
            .write()
            .map_err(|_| ApiError::Internal("Transaction store lock poisoned".into()))
    }

    /// Records a new transaction as `PENDING`.
    pub fn create(&self, new_tx: NewBankTransaction) -> Result<BankTransaction, ApiError> {
        let tx = BankTransaction {
            id: Uuid::new_v4(),
            sender_account_number: new_tx.sender_account_number,
            recipient_account_number: new_tx.recipient_account_number,
            recipient_name: new_tx.recipient_name,
            ifsc_code: new_tx.ifsc_code,
            amount: new_tx.amount,
            remarks: new_tx.remarks,
            status: TransactionStatus::Pending,
            transaction_type: new_tx.transaction_type,
            transaction_date: Utc::now(),
        };

        self.write()?.insert(0, tx.clone());
        Ok(tx)
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<BankTransaction>, ApiError> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    /// All transactions, newest first.
    pub fn find_all(&self) -> Result<Vec<BankTransaction>, ApiError> {
        let mut out = self.read()?.clone();
        out.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        Ok(out)
    }

    pub fn find_recent(&self, limit: usize) -> Result<Vec<BankTransaction>, ApiError> {
        let mut out = self.find_all()?;
        out.truncate(limit);
        Ok(out)
    }

    /// Moves a `PENDING` transaction to `status`.
    pub fn settle(&self, id: Uuid, status: TransactionStatus) -> Result<BankTransaction, ApiError> {
        let mut txs = self.write()?;

        let tx = txs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound("Transaction not found".into()))?;

        if tx.status != TransactionStatus::Pending {
            return Err(ApiError::InvalidState(format!(
                "Transaction is already {}",
                tx.status
            )));
        }

        tx.status = status;
        Ok(tx.clone())
    }
}
