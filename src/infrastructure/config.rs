use crate::error::{DonationError, Result};
use std::env;
use std::time::Duration;

pub const PUBLIC_KEY_VAR: &str = "GATEWAY_PUBLIC_KEY";
pub const SECRET_KEY_VAR: &str = "GATEWAY_SECRET_KEY";
pub const VAULT_URL_VAR: &str = "GATEWAY_VAULT_URL";
pub const API_URL_VAR: &str = "GATEWAY_API_URL";

const DEFAULT_VAULT_URL: &str = "https://vault.omise.co";
const DEFAULT_API_URL: &str = "https://api.omise.co";

/// Credentials and endpoints for the payment gateway.
///
/// The engine only ever sees the two opaque key strings; where they come
/// from is this module's concern.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub public_key: String,
    pub secret_key: String,
    pub vault_url: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Resolves credentials and endpoints from the process environment.
    ///
    /// A `.env` file is honored when present, so local runs can keep keys
    /// out of shell history. Endpoint variables are optional and fall back
    /// to the production hosts.
    pub fn from_env(timeout: Duration) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::resolve(|name| env::var(name).ok(), timeout)
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>, timeout: Duration) -> Result<Self> {
        let public_key = lookup(PUBLIC_KEY_VAR).ok_or_else(|| missing(PUBLIC_KEY_VAR))?;
        let secret_key = lookup(SECRET_KEY_VAR).ok_or_else(|| missing(SECRET_KEY_VAR))?;
        let vault_url = lookup(VAULT_URL_VAR).unwrap_or_else(|| DEFAULT_VAULT_URL.to_owned());
        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        Ok(Self {
            public_key,
            secret_key,
            vault_url: vault_url.trim_end_matches('/').to_owned(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            timeout,
        })
    }
}

fn missing(name: &str) -> DonationError {
    DonationError::Config(format!("{name} is not set"))
}
