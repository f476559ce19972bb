use crate::domain::donation::Card;
use crate::domain::ports::{Charge, PaymentGateway};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Gateway stand-in that approves everything without leaving the process.
///
/// Backs `--dry-run`, so a ledger can be exercised end to end with no
/// credentials and no network traffic.
#[derive(Debug, Default)]
pub struct SandboxGateway {
    issued: AtomicU64,
}

impl SandboxGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn create_token(&self, _holder: &str, _card: &Card) -> Result<String> {
        let serial = self.issued.fetch_add(1, Ordering::Relaxed);
        Ok(format!("tokn_sandbox_{serial:08}"))
    }

    async fn create_charge(&self, _amount: i64, _currency: &str, token: &str) -> Result<Charge> {
        Ok(Charge {
            id: format!("chrg_{token}"),
            paid: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            number: "4242424242424242".to_owned(),
            cvv: "123".to_owned(),
            expiry_month: 12,
            expiry_year: 2025,
        }
    }

    #[tokio::test]
    async fn test_tokens_are_unique_and_non_empty() {
        let gateway = SandboxGateway::new();
        let first = gateway.create_token("Alice", &card()).await.unwrap();
        let second = gateway.create_token("Alice", &card()).await.unwrap();

        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_every_charge_is_paid() {
        let gateway = SandboxGateway::new();
        let token = gateway.create_token("Alice", &card()).await.unwrap();
        let charge = gateway.create_charge(1000, "thb", &token).await.unwrap();

        assert!(charge.paid);
    }
}
