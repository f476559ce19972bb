use crate::domain::donation::DonationSummary;
use crate::domain::top_donors::TopDonors;
use crate::error::Result;
use std::io::Write;

/// Renders the end-of-run donation report.
pub struct SummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &DonationSummary, top_donors: &TopDonors) -> Result<()> {
        writeln!(self.writer, "       total received: {:>15}", summary.total)?;
        writeln!(self.writer, " successfully donated: {:>15}", summary.success)?;
        writeln!(self.writer, "      faulty donation: {:>15}", summary.failed)?;
        writeln!(self.writer, "   average per person: {:>15}", summary.average)?;
        writeln!(self.writer, "           top donors:")?;
        for slot in top_donors.slots() {
            writeln!(self.writer, "                   {:>15}", slot.name)?;
        }
        Ok(())
    }
}
