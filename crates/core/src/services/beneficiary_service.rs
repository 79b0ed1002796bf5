use ezpay_primitives::error::ApiError;
use ezpay_primitives::models::beneficiary::{Beneficiary, BeneficiaryChanges};
use ezpay_primitives::models::beneficiary_dto::{AddBeneficiaryRequest, ContactUpdateRequest};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::app_state::AppState;

pub struct BeneficiaryService;

impl BeneficiaryService {
    pub async fn add_beneficiary(
        state: &AppState,
        req: AddBeneficiaryRequest,
    ) -> Result<Beneficiary, ApiError> {
        let req = req.normalize();

        req.validate().map_err(|e| {
            warn!(errors = ?e, "beneficiary.add: validation failed");
            ApiError::Validation(e)
        })?;

        state.simulate_latency().await;

        let beneficiary = state
            .beneficiaries
            .add(req.into_new_beneficiary())
            .map_err(|e| {
                warn!("beneficiary.add: {}", e);
                e
            })?;

        info!(
            beneficiary_id = beneficiary.id,
            ifsc = %beneficiary.ifsc,
            "beneficiary.add: created"
        );

        Ok(beneficiary)
    }

    pub async fn list_beneficiaries(state: &AppState) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        let all = state.beneficiaries.list()?;
        debug!(count = all.len(), "beneficiary.list");
        Ok(all)
    }

    pub async fn get_beneficiary(
        state: &AppState,
        id: u64,
    ) -> Result<Option<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        state.beneficiaries.get_by_id(id)
    }

    pub async fn find_by_account_number(
        state: &AppState,
        account_number: &str,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        state.beneficiaries.find_by_account_number(account_number)
    }

    pub async fn find_by_name_or_account(
        state: &AppState,
        term: &str,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        state.beneficiaries.find_by_name_or_account(term)
    }

    pub async fn find_by_bank_or_ifsc(
        state: &AppState,
        term: &str,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        state.beneficiaries.find_by_bank_or_ifsc(term)
    }

    pub async fn search(state: &AppState, term: &str) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        let hits = state.beneficiaries.search(term)?;
        debug!(term, hits = hits.len(), "beneficiary.search");
        Ok(hits)
    }

    pub async fn recent_beneficiaries(
        state: &AppState,
        limit: Option<usize>,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        state.simulate_latency().await;
        state
            .beneficiaries
            .recent(Some(limit.unwrap_or(state.config.recent_limit)))
    }

    pub async fn update_beneficiary(
        state: &AppState,
        id: u64,
        changes: BeneficiaryChanges,
    ) -> Result<Beneficiary, ApiError> {
        if changes.is_empty() {
            debug!(beneficiary_id = id, "beneficiary.update: no fields supplied");
        }

        state.simulate_latency().await;

        let updated = state.beneficiaries.update(id, &changes).map_err(|e| {
            warn!(beneficiary_id = id, "beneficiary.update: {}", e);
            e
        })?;

        info!(beneficiary_id = id, "beneficiary.update: saved");
        Ok(updated)
    }

    /// Inline email/phone edit from the beneficiary list.
    pub async fn update_contact(
        state: &AppState,
        id: u64,
        req: ContactUpdateRequest,
    ) -> Result<Beneficiary, ApiError> {
        let req = req.normalize();

        req.validate().map_err(|e| {
            warn!(
                beneficiary_id = id,
                errors = ?e,
                "beneficiary.update_contact: validation failed"
            );
            ApiError::Validation(e)
        })?;

        Self::update_beneficiary(state, id, req.into_changes()).await
    }

    pub async fn delete_beneficiary(state: &AppState, id: u64) -> Result<bool, ApiError> {
        state.simulate_latency().await;

        let removed = state.beneficiaries.delete(id)?;
        if removed {
            info!(beneficiary_id = id, "beneficiary.delete: removed");
        } else {
            debug!(beneficiary_id = id, "beneficiary.delete: nothing to remove");
        }

        Ok(removed)
    }
}
