use std::collections::HashMap;
use tokio::sync::Mutex;

/// The two buckets a donation can end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failed,
}

/// Running figures for one outcome bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub amount: i64,
    pub count: u64,
}

/// Thread-safe per-outcome totals.
///
/// Amount and count move together under one lock, so a reader can never
/// observe a sum without its matching increment count. One instance is
/// created per run and shared by every dispatch task.
#[derive(Debug, Default)]
pub struct OutcomeTally {
    counters: Mutex<HashMap<Outcome, Tally>>,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, outcome: Outcome, amount: i64) {
        let mut counters = self.counters.lock().await;
        let tally = counters.entry(outcome).or_default();
        tally.amount += amount;
        tally.count += 1;
    }

    pub async fn snapshot(&self, outcome: Outcome) -> Tally {
        let counters = self.counters.lock().await;
        counters.get(&outcome).copied().unwrap_or_default()
    }
}
