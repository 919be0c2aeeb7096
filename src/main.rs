use anyhow::Context;
use clap::Parser;
use edge_utils::utils::logger;
use edge_utils::{parse_year_month, safe_divide, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting edge-utils demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run_samples() {
        tracing::error!("❌ Sample call failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_samples() -> anyhow::Result<()> {
    let quotient = safe_divide("10", 2).context("safe_divide(\"10\", 2)")?;
    println!("{}", describe_quotient(quotient));

    let quotient = safe_divide(1, 0).context("safe_divide(1, 0)")?;
    println!("{}", describe_quotient(quotient));

    let year_month = parse_year_month("2023.06").context("parse_year_month(\"2023.06\")")?;
    println!("({}, {})", year_month.year(), year_month.month());

    Ok(())
}

fn describe_quotient(quotient: Option<f64>) -> String {
    match quotient {
        Some(value) => format!("{:?}", value),
        None => "None".to_string(),
    }
}
