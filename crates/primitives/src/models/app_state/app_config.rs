use crate::utility::is_valid_pin;
use eyre::{eyre, Report};
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Artificial delay applied to every service call, for UI feedback only.
    pub simulated_latency: Duration,

    /// Account debited by transfers until real sessions exist.
    pub sender_account: String,

    pub transaction_pin: SecretString,

    pub recent_limit: usize,

    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            sender_account: "1234567890".into(),
            transaction_pin: SecretString::from("1234"),
            recent_limit: DEFAULT_RECENT_LIMIT,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        let defaults = Self::default();

        let latency_ms: u64 = env::var("EZPAY_SIMULATED_LATENCY_MS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .map_err(|e| eyre!("Invalid EZPAY_SIMULATED_LATENCY_MS: {}", e))?;

        let transaction_pin = match env::var("EZPAY_TRANSACTION_PIN") {
            Ok(pin) => SecretString::from(pin),
            Err(_) => defaults.transaction_pin,
        };

        if !is_valid_pin(transaction_pin.expose_secret()) {
            return Err(eyre!("EZPAY_TRANSACTION_PIN must be exactly 4 digits"));
        }

        Ok(Self {
            simulated_latency: Duration::from_millis(latency_ms),

            sender_account: env::var("EZPAY_SENDER_ACCOUNT").unwrap_or(defaults.sender_account),

            transaction_pin,

            recent_limit: env::var("EZPAY_RECENT_LIMIT")
                .unwrap_or_else(|_| DEFAULT_RECENT_LIMIT.to_string())
                .parse()
                .map_err(|e| eyre!("Invalid EZPAY_RECENT_LIMIT: {}", e))?,

            seed_demo_data: env::var("EZPAY_SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .map_err(|e| eyre!("Invalid EZPAY_SEED_DEMO_DATA: {}", e))?,
        })
    }
}
