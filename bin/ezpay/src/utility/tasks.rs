use chrono::{Duration, Utc};
use eyre::Report;
use ezpay_core::app_state::AppState;
use ezpay_core::services::beneficiary_service::BeneficiaryService;
use ezpay_primitives::models::beneficiary::Beneficiary;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads `.env` if one is found; returns its path. Call before logging is
/// set up and report the outcome with [`report_env_source`] afterwards.
pub fn load_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

pub fn report_env_source(env_file: Option<&Path>) {
    match env_file {
        Some(path) => info!(path = %path.display(), "Loaded .env file"),
        None => info!("No .env file found, using system environment"),
    }
}

// name, account number, bank, IFSC, phone, age in days
const DEMO_PAYEES: &[(&str, &str, &str, &str, &str, i64)] = &[
    ("John Doe", "1234567890", "HDFC Bank", "HDFC0001234", "9876543210", 6),
    ("Priya Sharma", "9988776655", "ICICI Bank", "ICIC0000123", "9123456789", 2),
    ("Simran Choudhary", "9123456789", "HDFC Bank", "HDFC0000321", "5738290183", 2),
    ("Jay Patel", "5678901234", "SBI Bank", "SBIN0000123", "9876543210", 2),
    ("Shizuka Tanaka", "9926351534", "HDFC Bank", "HDFC0000123", "9123456789", 2),
];

/// The demo payees shown on first launch, ids 1 to 5.
pub fn seed_demo_beneficiaries() -> Vec<Beneficiary> {
    let now = Utc::now();

    DEMO_PAYEES
        .iter()
        .zip(1u64..)
        .map(|(&(name, account, bank, ifsc, phone, age_days), id)| {
            let first_name = name.split_whitespace().next().unwrap_or(name);
            Beneficiary {
                id,
                name: name.into(),
                account_number: account.into(),
                bank_name: bank.into(),
                ifsc: ifsc.into(),
                email: Some(format!("{}@example.com", first_name.to_lowercase())),
                phone: Some(phone.into()),
                created_at: now - Duration::days(age_days),
            }
        })
        .collect()
}

pub async fn log_summary(state: &AppState) -> Result<(), Report> {
    let all = BeneficiaryService::list_beneficiaries(state).await?;
    info!(count = all.len(), "Beneficiaries loaded");

    for b in BeneficiaryService::recent_beneficiaries(state, None).await? {
        info!(
            id = b.id,
            name = %b.name,
            bank = %b.bank_name,
            ifsc = %b.ifsc,
            created_at = %b.created_at,
            "recent beneficiary"
        );
    }

    Ok(())
}
