//! Application layer orchestrating a donation run.
//!
//! The `DonationEngine` fans the parsed ledger out into one task per
//! donation and funnels every outcome into a shared `OutcomeTally`.

pub mod engine;
pub mod tally;
