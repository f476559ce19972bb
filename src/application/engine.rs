use crate::application::tally::{Outcome, OutcomeTally};
use crate::domain::donation::{Donation, DonationSummary, DonorLedger};
use crate::domain::ports::GatewayArc;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Currency every charge is created in.
pub const CHARGE_CURRENCY: &str = "thb";

/// Drives every pledged donation through the tokenize-then-charge flow.
///
/// `DonationEngine` owns the gateway handle and the run's outcome tally.
/// Donations are dispatched concurrently with no ordering across
/// instruments; within one instrument the charge strictly follows the
/// token exchange.
pub struct DonationEngine {
    gateway: GatewayArc,
    tally: Arc<OutcomeTally>,
}

impl DonationEngine {
    pub fn new(gateway: GatewayArc) -> Self {
        Self {
            gateway,
            tally: Arc::new(OutcomeTally::new()),
        }
    }

    /// Spawns one task per donation and waits for every outcome to land.
    ///
    /// Each task records exactly one outcome, so after this returns the
    /// tally accounts for the whole ledger.
    pub async fn dispatch_all(&self, ledger: &DonorLedger) {
        let mut tasks = JoinSet::new();
        for (donor, donation) in ledger.donations() {
            let gateway = Arc::clone(&self.gateway);
            let tally = Arc::clone(&self.tally);
            let donor = donor.to_owned();
            let donation = donation.clone();
            tasks.spawn(async move {
                process_donation(gateway, tally, donor, donation).await;
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                log::error!("donation task did not complete: {e}");
            }
        }
    }

    /// Reads the final tallies and derives the run summary.
    ///
    /// Only meaningful once `dispatch_all` has returned. An empty run
    /// reports an average of zero rather than dividing by zero.
    pub async fn summarize(&self) -> DonationSummary {
        let success = self.tally.snapshot(Outcome::Success).await;
        let failed = self.tally.snapshot(Outcome::Failed).await;

        let attempted = success.count + failed.count;
        let total = success.amount + failed.amount;
        let average = if attempted == 0 {
            0
        } else {
            total / attempted as i64
        };

        DonationSummary {
            total,
            success: success.amount,
            failed: failed.amount,
            average,
        }
    }

    pub fn tally(&self) -> &OutcomeTally {
        &self.tally
    }
}

async fn process_donation(
    gateway: GatewayArc,
    tally: Arc<OutcomeTally>,
    donor: String,
    donation: Donation,
) {
    let token = match gateway.create_token(&donor, &donation.card).await {
        Ok(token) if !token.is_empty() => token,
        Ok(_) => {
            log::warn!("empty token for {donor}, recording donation as failed");
            tally.record(Outcome::Failed, donation.amount).await;
            return;
        }
        Err(e) => {
            log::warn!("tokenize failed for {donor}: {e}");
            tally.record(Outcome::Failed, donation.amount).await;
            return;
        }
    };

    match gateway.create_charge(donation.amount, CHARGE_CURRENCY, &token).await {
        Ok(charge) if charge.paid => {
            log::debug!("charged {} for {donor} ({})", donation.amount, charge.id);
            tally.record(Outcome::Success, donation.amount).await;
        }
        Ok(charge) => {
            log::warn!("charge {} for {donor} was not paid", charge.id);
            tally.record(Outcome::Failed, donation.amount).await;
        }
        Err(e) => {
            log::warn!("charge failed for {donor}: {e}");
            tally.record(Outcome::Failed, donation.amount).await;
        }
    }
}
