use crate::domain::donation::{Card, Donation, DonorLedger};
use crate::domain::top_donors::TopDonors;
use crate::error::Result;
use std::io::Read;
use std::str::FromStr;

/// Reads donor records from a decrypted ledger stream.
///
/// Wraps `csv::Reader` over any `Read` source (typically a `Rot128Reader`)
/// with whitespace trimming and flexible record lengths, so short rows
/// surface as diagnostics instead of hard errors.
pub struct LedgerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LedgerReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Consumes the stream into a ledger plus the top-3 donations seen.
    ///
    /// The first line is always treated as a header and dropped. Records
    /// with fewer than 6 fields are skipped with a diagnostic; unparsable
    /// numeric fields default to zero but keep the record. Stream-level
    /// I/O or encoding errors abort the run.
    pub fn into_ledger(self) -> Result<(DonorLedger, TopDonors)> {
        let mut ledger = DonorLedger::new();
        let mut top_donors = TopDonors::new();

        for record in self.reader.into_records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if record.len() < 6 {
                log::warn!(
                    "line {line}: expected 6 fields, got {}; skipping record",
                    record.len()
                );
                continue;
            }

            let name = &record[0];
            let donation = Donation {
                amount: parse_or_zero(&record[1], line, "amount"),
                card: Card {
                    number: record[2].to_owned(),
                    cvv: record[3].to_owned(),
                    expiry_month: parse_or_zero(&record[4], line, "expiry month"),
                    expiry_year: parse_or_zero(&record[5], line, "expiry year"),
                },
            };

            top_donors.offer(donation.amount, name);
            ledger.add(name, donation);
        }

        Ok((ledger, top_donors))
    }
}

fn parse_or_zero<T: FromStr + Default>(field: &str, line: u64, what: &str) -> T {
    match field.parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("line {line}: unparsable {what} {field:?}, defaulting to zero");
            T::default()
        }
    }
}
