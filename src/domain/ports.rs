use super::donation::Card;
use crate::error::Result;
use async_trait::async_trait;

/// A charge as reported back by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    pub id: String,
    pub paid: bool,
}

/// Remote payment gateway consumed by the dispatcher.
///
/// Tokenization and charging are the only suspension points in a run;
/// everything else is local computation.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Exchanges card details for an opaque single-use token.
    async fn create_token(&self, holder: &str, card: &Card) -> Result<String>;

    /// Charges `amount` minor units against a previously created token.
    async fn create_charge(&self, amount: i64, currency: &str, token: &str) -> Result<Charge>;
}

pub type GatewayArc = std::sync::Arc<dyn PaymentGateway>;
