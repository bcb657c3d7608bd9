//! CLI definitions.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use m2calendar_core::calendar::{dates::parse_date_key, ViewMode};

/// Calendar mini app: month, week and day views of your agenda.
#[derive(Debug, Parser)]
#[command(name = "m2calendar")]
#[command(about = "Calendar mini app: month, week and day views of your agenda", long_about = None)]
pub struct Cli {
    /// View to render.
    #[arg(long, default_value = "month")]
    pub view: ViewArg,

    /// Anchor date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Run the interactive calendar instead of printing once.
    #[arg(long, short)]
    pub interactive: bool,

    /// User whose events are loaded.
    #[arg(long, env = "M2_USER_ID")]
    pub user_id: Option<String>,

    /// Events API base URL; the built-in sample data is used when unset.
    #[arg(long, env = "M2_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Address of the embedding host's dialog bridge (host:port).
    #[arg(long, env = "M2_BRIDGE_ADDR")]
    pub bridge_addr: Option<String>,
}

/// View options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    #[default]
    Month,
    Week,
    Day,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Month => ViewMode::Month,
            ViewArg::Week => ViewMode::Week,
            ViewArg::Day => ViewMode::Day,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable text.
    #[default]
    Pretty,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date_key(value).ok_or_else(|| format!("invalid date '{value}', expected YYYY-MM-DD"))
}
