use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fleetpay::config::Config;
use fleetpay::pay_statements::documents::{
    DocumentRenderer, PdfRenderer, PlainTextRenderer, StatementDocument,
};
use fleetpay::snapshot::ActivitySnapshot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a driver pay statement from a JSON activity snapshot
#[derive(Parser)]
#[command(name = "fleetpay")]
#[command(about = "Driver pay statement generator")]
struct Cli {
    /// Snapshot holding the driver, the period and its activity records
    snapshot: PathBuf,
    /// Also write the statement as a PDF to this path
    #[arg(long)]
    pdf: Option<PathBuf>,
    /// Print the plain-text layout instead of JSON
    #[arg(long, default_value_t = false)]
    text: bool,
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("fleetpay={}", config.app.log_level).into());

    // Logs go to stderr; stdout carries the statement
    if config.app.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Environment: {}", config.app.env);

    let snapshot = ActivitySnapshot::load(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    let request = snapshot.request();
    let service = snapshot.into_service(config.payroll.default_tax_withholding_percent);

    let generated = service
        .generate_statement(request)
        .await
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))?;

    let document = StatementDocument::from_statement(&generated.statement);

    if args.text {
        let bytes = PlainTextRenderer::new().render(&document)?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    }

    if let Some(path) = args.pdf {
        let renderer = PdfRenderer::new(&config.documents.font_dir, &config.documents.font_family);
        let bytes = renderer.render(&document)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Statement PDF written to {}", path.display());
    }

    Ok(())
}
