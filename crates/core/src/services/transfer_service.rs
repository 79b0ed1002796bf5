use ezpay_primitives::error::ApiError;
use ezpay_primitives::models::bank_transaction::{BankTransaction, NewBankTransaction};
use ezpay_primitives::models::enum_types::{TransactionStatus, TransactionType};
use ezpay_primitives::models::transfer_dto::{BankTransferRequest, TransferPrefill};
use ezpay_primitives::utility::{is_valid_pin, INVALID_PIN_MESSAGE};
use secrecy::ExposeSecret;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;

pub struct TransferService;

impl TransferService {
    /// Validates the transfer form and records a pending debit. The caller
    /// follows up with [`TransferService::confirm_with_pin`].
    pub async fn initiate_transfer(
        state: &AppState,
        req: BankTransferRequest,
    ) -> Result<BankTransaction, ApiError> {
        let req = req.normalize();

        req.validate().map_err(|e| {
            warn!(errors = ?e, "transfer.initiate: validation failed");
            ApiError::Validation(e)
        })?;

        state.simulate_latency().await;

        let tx = state.transactions.create(NewBankTransaction {
            sender_account_number: state.config.sender_account.clone(),
            recipient_account_number: req.recipient_account,
            recipient_name: req.recipient_name,
            ifsc_code: req.ifsc_code,
            amount: req.amount,
            remarks: req.remarks,
            transaction_type: TransactionType::Debit,
        })?;

        info!(
            transaction_id = %tx.id,
            amount = tx.amount,
            "transfer.initiate: pending"
        );

        Ok(tx)
    }

    /// Transfer form fields for a saved beneficiary.
    pub async fn transfer_request_for(
        state: &AppState,
        beneficiary_id: u64,
    ) -> Result<TransferPrefill, ApiError> {
        state.simulate_latency().await;

        state
            .beneficiaries
            .get_by_id(beneficiary_id)?
            .map(|b| TransferPrefill::from(&b))
            .ok_or_else(|| ApiError::NotFound("Beneficiary not found".into()))
    }

    pub async fn confirm_with_pin(
        state: &AppState,
        transaction_id: Uuid,
        pin: &str,
    ) -> Result<BankTransaction, ApiError> {
        if !is_valid_pin(pin) {
            return Err(ApiError::Pin(INVALID_PIN_MESSAGE.into()));
        }

        state.simulate_latency().await;

        let status = if pin == state.config.transaction_pin.expose_secret() {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        };

        let tx = state.transactions.settle(transaction_id, status)?;

        match tx.status {
            TransactionStatus::Success => {
                info!(transaction_id = %tx.id, "transfer.confirm: success")
            }
            _ => warn!(transaction_id = %tx.id, "transfer.confirm: wrong PIN, transaction failed"),
        }

        Ok(tx)
    }

    pub async fn get_transaction(
        state: &AppState,
        transaction_id: Uuid,
    ) -> Result<BankTransaction, ApiError> {
        state.simulate_latency().await;
        state
            .transactions
            .find_by_id(transaction_id)?
            .ok_or_else(|| ApiError::NotFound("Transaction not found".into()))
    }

    pub async fn recent_transactions(
        state: &AppState,
        limit: Option<usize>,
    ) -> Result<Vec<BankTransaction>, ApiError> {
        state.simulate_latency().await;
        state
            .transactions
            .find_recent(limit.unwrap_or(state.config.recent_limit))
    }

    pub async fn transaction_history(state: &AppState) -> Result<Vec<BankTransaction>, ApiError> {
        state.simulate_latency().await;
        state.transactions.find_all()
    }
}
