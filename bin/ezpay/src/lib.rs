pub mod utility;

pub use ezpay_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::tasks::{load_env, log_summary, report_env_source, seed_demo_beneficiaries};
use eyre::Report;
use ezpay_core::app_state::AppState;
use ezpay_core::repositories::beneficiary_repository::BeneficiaryRepository;
use ezpay_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // .env first so RUST_LOG from it is honoured
    let env_file = load_env();

    setup_logging();
    report_env_source(env_file.as_deref());

    info!("Starting EzPay beneficiary service...");

    let config = AppConfig::from_env()?;

    let beneficiaries = if config.seed_demo_data {
        BeneficiaryRepository::with_seed(seed_demo_beneficiaries())?
    } else {
        BeneficiaryRepository::new()
    };

    let state = AppState::with_beneficiaries(config, beneficiaries);

    log_summary(&state).await?;

    info!("EzPay finished");
    Ok(())
}
