use std::collections::HashMap;

/// Card details of a single payment instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub number: String,
    pub cvv: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
}

/// A single pledged donation, immutable once parsed.
///
/// Amounts are in minor currency units (e.g. satang), so plain integer
/// arithmetic is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub amount: i64,
    pub card: Card,
}

/// All pledged donations keyed by donor name.
///
/// A donor may appear on several ledger rows; their donations keep source
/// order. The ledger is built in one pass by the parser and is read-only
/// once dispatch starts.
#[derive(Debug, Default)]
pub struct DonorLedger {
    donors: HashMap<String, Vec<Donation>>,
}

impl DonorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, donation: Donation) {
        self.donors.entry(name.to_owned()).or_default().push(donation);
    }

    /// Iterates every `(donor, donation)` pair across all donors.
    pub fn donations(&self) -> impl Iterator<Item = (&str, &Donation)> {
        self.donors
            .iter()
            .flat_map(|(name, entries)| entries.iter().map(move |d| (name.as_str(), d)))
    }

    pub fn get(&self, name: &str) -> Option<&[Donation]> {
        self.donors.get(name).map(Vec::as_slice)
    }

    /// Total number of donations across all donors.
    pub fn len(&self) -> usize {
        self.donors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    pub fn donor_count(&self) -> usize {
        self.donors.len()
    }
}

/// Final figures for a completed run, computed once after every donation
/// has an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationSummary {
    pub total: i64,
    pub success: i64,
    pub failed: i64,
    pub average: i64,
}
