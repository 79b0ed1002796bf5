#![allow(dead_code)]

use ezpay::utility::tasks::seed_demo_beneficiaries;
use ezpay_core::app_state::AppState;
use ezpay_core::repositories::beneficiary_repository::BeneficiaryRepository;
use ezpay_primitives::models::app_config::AppConfig;
use ezpay_primitives::models::beneficiary::Beneficiary;
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

pub mod fixtures;

pub const TEST_PIN: &str = "4321";

pub fn test_config() -> AppConfig {
    AppConfig {
        simulated_latency: Duration::ZERO,
        sender_account: "1234567890".to_string(),
        transaction_pin: SecretString::from(TEST_PIN),
        recent_limit: 5,
        seed_demo_data: false,
    }
}

/// Empty store.
pub fn create_test_app_state() -> Arc<AppState> {
    AppState::new(test_config())
}

/// Store seeded with the demo payees.
pub fn create_seeded_app_state() -> Arc<AppState> {
    create_app_state_with(seed_demo_beneficiaries())
}

pub fn create_app_state_with(records: Vec<Beneficiary>) -> Arc<AppState> {
    let repo = BeneficiaryRepository::with_seed(records).expect("seed records must be unique");
    AppState::with_beneficiaries(test_config(), repo)
}
