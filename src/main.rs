//! `footprint-sentinel` — score social-media exports and report the risk.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`load_config`]) and build the lexicon once.
//! 3. Collect payloads: `<platform>.json` files ([`detect_payloads`])
//!    or built-in samples with `--demo`.
//! 4. Analyze each platform, aggregate, derive alerts.
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0`, or `1` when any alert is [`Severity::High`].

mod cli;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, ReportFormat};
use footprint_sentinel::config::load_config;
use footprint_sentinel::detector::detect_payloads;
use footprint_sentinel::lexicon::Lexicon;
use footprint_sentinel::models::{Platform, ScanReport, Severity};
use footprint_sentinel::payload::{self, sample::sample};
use footprint_sentinel::{alerts, report, Engine};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;
    let engine = Engine::new(Lexicon::with_extensions(&config.lexicon));

    let excluded: Vec<Platform> = cli.exclude_platform.iter().map(Into::into).collect();

    let inputs: Vec<(Platform, Value)> = if cli.demo {
        Platform::ALL
            .into_iter()
            .filter(|p| !excluded.contains(p))
            .map(|p| (p, sample(p, &cli.username)))
            .collect()
    } else {
        detect_payloads(&path)
            .into_iter()
            .filter(|(p, _)| !excluded.contains(p))
            .map(|(p, file)| (p, payload::load_or_empty(&file)))
            .collect()
    };

    if inputs.is_empty() {
        eprintln!("No platform payloads found in {}", path.display());
        std::process::exit(1);
    }

    let mut analyses = Vec::with_capacity(inputs.len());
    for (platform, payload) in &inputs {
        let analysis = engine.analyze_platform(platform.id(), payload);
        info!(platform = platform.id(), risk_score = analysis.risk_score, "platform analyzed");

        if !cli.quiet && matches!(cli.report, ReportFormat::Terminal) {
            eprintln!(
                "  {} {} risk {:.1}",
                "→".cyan(),
                platform,
                analysis.risk_score
            );
        }
        analyses.push(analysis);
    }

    let assessment = engine.aggregate(&analyses);
    let alerts = alerts::derive_all(&analyses, &config.alerts);
    let scan = ScanReport {
        platforms: analyses,
        assessment,
        alerts,
    };

    let source = if cli.demo {
        format!("built-in samples for {}", cli.username)
    } else {
        path.display().to_string()
    };

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&scan, &source, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scan)?);
        }
    }

    let has_high = scan.alerts.iter().any(|a| a.severity == Severity::High);
    if has_high {
        std::process::exit(1);
    }

    Ok(())
}
