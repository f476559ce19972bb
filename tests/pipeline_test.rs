use async_trait::async_trait;
use donation_engine::application::engine::DonationEngine;
use donation_engine::application::tally::Outcome;
use donation_engine::domain::donation::Card;
use donation_engine::domain::ports::{Charge, PaymentGateway};
use donation_engine::error::{DonationError, Result};
use donation_engine::interfaces::cipher::{Rot128Reader, Rot128Writer};
use donation_engine::interfaces::csv::ledger_reader::LedgerReader;
use std::io::{Cursor, Write};
use std::sync::Arc;

/// Approves everyone except Bob, whose card never tokenizes.
struct ScriptedGateway;

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn create_token(&self, holder: &str, _card: &Card) -> Result<String> {
        if holder == "Bob" {
            return Err(DonationError::Declined("card rejected".to_owned()));
        }
        Ok(format!("tokn_{holder}"))
    }

    async fn create_charge(&self, _amount: i64, _currency: &str, token: &str) -> Result<Charge> {
        Ok(Charge {
            id: format!("chrg_{token}"),
            paid: true,
        })
    }
}

fn encrypt(plaintext: &str) -> Vec<u8> {
    let mut encrypted = Vec::new();
    {
        let mut writer = Rot128Writer::new(&mut encrypted);
        writer.write_all(plaintext.as_bytes()).unwrap();
    }
    encrypted
}

#[tokio::test]
async fn test_encrypted_ledger_through_dispatch() {
    let plaintext = "Name,AmountSubunits,CCNumber,CVV,ExpMonth,ExpYear\n\
                     Alice,1000,4242424242424242,123,12,2025\n\
                     Bob,500,4111111111111111,456,11,2024\n";

    let reader = LedgerReader::new(Rot128Reader::new(Cursor::new(encrypt(plaintext))));
    let (ledger, top_donors) = reader.into_ledger().unwrap();
    assert_eq!(ledger.len(), 2);

    let engine = DonationEngine::new(Arc::new(ScriptedGateway));
    engine.dispatch_all(&ledger).await;

    let summary = engine.summarize().await;
    assert_eq!(summary.success, 1000);
    assert_eq!(summary.failed, 500);
    assert_eq!(summary.total, 1500);
    assert_eq!(summary.average, 750);

    let slots: Vec<_> = top_donors.slots().collect();
    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].amount, slots[0].name.as_str()), (1000, "Alice"));
    assert_eq!((slots[1].amount, slots[1].name.as_str()), (500, "Bob"));
}

#[tokio::test]
async fn test_every_donation_lands_in_exactly_one_bucket() {
    let plaintext = "Name,AmountSubunits,CCNumber,CVV,ExpMonth,ExpYear\n\
                     Alice,1000,4242424242424242,123,12,2025\n\
                     Bob,500,4111111111111111,456,11,2024\n\
                     Carol,2000,5555555555554444,789,10,2026\n";

    let reader = LedgerReader::new(Rot128Reader::new(Cursor::new(encrypt(plaintext))));
    let (ledger, _) = reader.into_ledger().unwrap();

    let engine = DonationEngine::new(Arc::new(ScriptedGateway));
    engine.dispatch_all(&ledger).await;

    let success = engine.tally().snapshot(Outcome::Success).await;
    let failed = engine.tally().snapshot(Outcome::Failed).await;
    assert_eq!(success.count + failed.count, ledger.len() as u64);
    assert_eq!(success.amount + failed.amount, 3500);
}

#[tokio::test]
async fn test_header_only_ledger_is_a_clean_zero_run() {
    let plaintext = "Name,AmountSubunits,CCNumber,CVV,ExpMonth,ExpYear\n";

    let reader = LedgerReader::new(Rot128Reader::new(Cursor::new(encrypt(plaintext))));
    let (ledger, top_donors) = reader.into_ledger().unwrap();
    assert!(ledger.is_empty());

    let engine = DonationEngine::new(Arc::new(ScriptedGateway));
    engine.dispatch_all(&ledger).await;

    let summary = engine.summarize().await;
    assert_eq!(summary.total, 0);
    assert_eq!(summary.average, 0);
    assert_eq!(top_donors.slots().count(), 0);
}
