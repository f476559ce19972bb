use donation_engine::interfaces::cipher::Rot128Writer;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub const LEDGER_HEADER: &str = "Name,AmountSubunits,CCNumber,CVV,ExpMonth,ExpYear";

/// Writes a rot128-obfuscated ledger with the standard header plus `rows`.
pub fn write_encrypted_ledger(path: &Path, rows: &[&str]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = Rot128Writer::new(file);

    writeln!(writer, "{LEDGER_HEADER}")?;
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.flush()
}
