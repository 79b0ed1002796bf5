use std::sync::Arc;

use crate::repositories::beneficiary_repository::BeneficiaryRepository;
use crate::repositories::transaction_repository::TransactionRepository;
pub use ezpay_primitives::models::app_config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub beneficiaries: BeneficiaryRepository,
    pub transactions: TransactionRepository,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Self::with_beneficiaries(config, BeneficiaryRepository::new())
    }

    pub fn with_beneficiaries(
        config: AppConfig,
        beneficiaries: BeneficiaryRepository,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            beneficiaries,
            transactions: TransactionRepository::new(),
        })
    }

    /// Sleeps for the configured artificial latency, if any.
    pub async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }
}
