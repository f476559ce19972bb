use crate::domain::donation::Card;
use crate::domain::ports::{Charge, PaymentGateway};
use crate::error::{DonationError, Result};
use crate::infrastructure::config::GatewayConfig;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ChargeResponse {
    id: String,
    #[serde(default)]
    paid: bool,
}

/// HTTP adapter for the payment gateway.
///
/// Token exchange goes to the vault host under the public key; charges go
/// to the API host under the secret key. Both calls share one client and
/// its per-request timeout.
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn create_token(&self, holder: &str, card: &Card) -> Result<String> {
        let form = [
            ("card[name]", holder.to_owned()),
            ("card[number]", card.number.clone()),
            ("card[expiration_month]", card.expiry_month.to_string()),
            ("card[expiration_year]", card.expiry_year.to_string()),
            ("card[security_code]", card.cvv.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/tokens", self.config.vault_url))
            .basic_auth(&self.config.public_key, None::<&str>)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DonationError::Declined(format!(
                "token request returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.id)
    }

    async fn create_charge(&self, amount: i64, currency: &str, token: &str) -> Result<Charge> {
        let form = [
            ("amount", amount.to_string()),
            ("currency", currency.to_owned()),
            ("card", token.to_owned()),
        ];

        let response = self
            .client
            .post(format!("{}/charges", self.config.api_url))
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DonationError::Declined(format!(
                "charge request returned {}",
                response.status()
            )));
        }

        let charge: ChargeResponse = response.json().await?;
        Ok(Charge {
            id: charge.id,
            paid: charge.paid,
        })
    }
}
