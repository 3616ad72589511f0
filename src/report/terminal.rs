use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{PlatformAnalysis, PlatformDetails, RiskAlert, ScanReport, Severity};
use crate::recommend::Recommend;

/// Render a colored terminal report.
pub fn render(report: &ScanReport, source: &str, verbose: bool, quiet: bool) -> Result<()> {
    let assessment = &report.assessment;
    let high_count = count_severity(&report.alerts, Severity::High);
    let medium_count = count_severity(&report.alerts, Severity::Medium);
    let low_count = count_severity(&report.alerts, Severity::Low);

    if quiet {
        println!(
            "Overall risk: {:.1}  Platforms: {}  High: {}  Medium: {}  Low: {}",
            assessment.overall_risk,
            report.platforms.len(),
            high_count.to_string().red(),
            medium_count.to_string().yellow(),
            low_count.to_string().green(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "footprint-sentinel".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Source: {}\n", source);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Overall risk       : {:>5.1} / 100", assessment.overall_risk)
    );
    println!(
        " │  {:<48} │",
        format!("Platforms analyzed : {:>5}", report.platforms.len())
    );
    println!(
        " │  {:<48} │",
        format!("{}  High alerts     : {:>4}", "✗".red(), high_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Medium alerts   : {:>4}", "⚠".yellow(), medium_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Low alerts      : {:>4}", "✓".green(), low_count)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    render_table(report);
    println!();

    if verbose {
        for analysis in report.platforms.iter().filter(|a| !a.factors.is_empty()) {
            println!(" {} {}", "[FACTORS]".cyan().bold(), analysis.platform);
            for factor in &analysis.factors {
                println!("   • {}", factor);
            }
            println!();
        }
    }

    println!(" {} Overall guidance:\n", "[ADVICE]".bold());
    for line in assessment.recommendations() {
        println!("   {}", line);
    }
    println!();

    for analysis in &report.platforms {
        if !analysis.is_supported() {
            continue;
        }
        println!(" {} {}:", "[ADVICE]".bold(), analysis.platform);
        for line in analysis.recommendations() {
            println!("   {}", line);
        }
        println!();
    }

    if !report.alerts.is_empty() {
        println!(" {} Alerts raised:\n", "[ALERT]".red().bold());
        for alert in &report.alerts {
            let tag = match alert.severity {
                Severity::High => "high".red().bold(),
                Severity::Medium => "medium".yellow().bold(),
                Severity::Low => "low".green(),
            };
            println!("   [{}] {}", tag, alert.title);
            println!("          {}", alert.recommendation);
        }
        println!();
    }

    Ok(())
}

fn render_table(report: &ScanReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Platform").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Weight").add_attribute(Attribute::Bold),
            Cell::new("Weighted").add_attribute(Attribute::Bold),
            Cell::new("Alert").add_attribute(Attribute::Bold),
            Cell::new("Details").add_attribute(Attribute::Bold),
        ]);

    for analysis in &report.platforms {
        let label = analysis.platform.to_string();
        let entry = report.assessment.platform_breakdown.get(&label);
        let severity = report
            .alerts
            .iter()
            .find(|a| a.platform == analysis.platform)
            .map(|a| a.severity);

        let (alert_str, alert_color) = match severity {
            Some(Severity::High) => ("✗ high", Color::Red),
            Some(Severity::Medium) => ("⚠ medium", Color::Yellow),
            Some(Severity::Low) => ("• low", Color::Cyan),
            None => ("✓ none", Color::Green),
        };

        table.add_row(vec![
            Cell::new(label.clone()),
            Cell::new(format!("{:.1}", analysis.risk_score))
                .set_alignment(CellAlignment::Right),
            Cell::new(entry.map_or(String::from("-"), |e| format!("{:.1}", e.weight)))
                .set_alignment(CellAlignment::Right),
            Cell::new(entry.map_or(String::from("-"), |e| format!("{:.1}", e.weighted_risk)))
                .set_alignment(CellAlignment::Right),
            Cell::new(alert_str)
                .fg(alert_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(describe(analysis)).fg(Color::DarkGrey),
        ]);
    }

    println!("{}", table);
}

fn describe(analysis: &PlatformAnalysis) -> String {
    match &analysis.details {
        PlatformDetails::Twitter {
            engagement,
            tweets_analyzed,
        } => match engagement.and_then(|e| e.ratio) {
            Some(ratio) => format!("{} tweets, follower ratio {:.2}", tweets_analyzed, ratio),
            None => format!("{} tweets", tweets_analyzed),
        },
        PlatformDetails::LinkedIn { professional_score } => {
            format!("professional score {:.0}", professional_score)
        }
        PlatformDetails::YouTube { titles_analyzed } => format!("{} video titles", titles_analyzed),
        PlatformDetails::TikTok => String::from("profile only"),
        PlatformDetails::Reddit { posts_analyzed } => format!("{} posts/comments", posts_analyzed),
        PlatformDetails::Unsupported => String::from("not supported"),
    }
}

fn count_severity(alerts: &[RiskAlert], severity: Severity) -> usize {
    alerts.iter().filter(|a| a.severity == severity).count()
}
