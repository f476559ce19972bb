use clap::Parser;
use donation_engine::application::engine::DonationEngine;
use donation_engine::domain::ports::GatewayArc;
use donation_engine::infrastructure::config::GatewayConfig;
use donation_engine::infrastructure::http::HttpGateway;
use donation_engine::infrastructure::sandbox::SandboxGateway;
use donation_engine::interfaces::cipher::Rot128Reader;
use donation_engine::interfaces::csv::ledger_reader::LedgerReader;
use donation_engine::interfaces::report::SummaryWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// rot128-obfuscated donation ledger
    input: PathBuf,

    /// Process the ledger against a local sandbox instead of the real gateway
    #[arg(long)]
    dry_run: bool,

    /// Per-request gateway timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = LedgerReader::new(Rot128Reader::new(file));
    let (ledger, top_donors) = reader.into_ledger().into_diagnostic()?;
    log::info!(
        "parsed {} donations from {} donors",
        ledger.len(),
        ledger.donor_count()
    );

    let gateway: GatewayArc = if cli.dry_run {
        Arc::new(SandboxGateway::new())
    } else {
        let config =
            GatewayConfig::from_env(Duration::from_secs(cli.timeout)).into_diagnostic()?;
        Arc::new(HttpGateway::new(config).into_diagnostic()?)
    };

    let engine = DonationEngine::new(gateway);
    println!("performing donations...");
    engine.dispatch_all(&ledger).await;
    println!("performing donations...done");

    let summary = engine.summarize().await;
    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    writer.write_summary(&summary, &top_donors).into_diagnostic()?;

    Ok(())
}
