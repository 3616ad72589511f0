use std::path::PathBuf;

use clap::Parser;

use footprint_sentinel::models::Platform;

#[derive(Parser, Debug)]
#[command(
    name = "footprint-sentinel",
    about = "Score social-media exports for reputational and privacy risk",
    version
)]
pub struct Cli {
    /// Directory containing <platform>.json payload exports
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Analyze built-in sample payloads instead of files
    #[arg(long)]
    pub demo: bool,

    /// Username used to personalize sample payloads
    #[arg(long, default_value = "demo_user")]
    pub username: String,

    /// Config file [default: ./.footprint-sentinel/config.toml, fallback ~/.config/footprint-sentinel/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exclude a platform from analysis (repeatable)
    #[arg(long = "exclude-platform", value_name = "PLATFORM")]
    pub exclude_platform: Vec<PlatformArg>,

    /// Show every contributing factor
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PlatformArg {
    Twitter,
    Linkedin,
    Youtube,
    Tiktok,
    Reddit,
}

impl From<&PlatformArg> for Platform {
    fn from(arg: &PlatformArg) -> Self {
        match arg {
            PlatformArg::Twitter => Platform::Twitter,
            PlatformArg::Linkedin => Platform::LinkedIn,
            PlatformArg::Youtube => Platform::YouTube,
            PlatformArg::Tiktok => Platform::TikTok,
            PlatformArg::Reddit => Platform::Reddit,
        }
    }
}
