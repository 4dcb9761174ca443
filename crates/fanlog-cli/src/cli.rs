use clap::Parser;
use fanlog_core::Severity;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fanlog",
    about = "Fan one input event out to every configured sink",
    version,
    after_help = "Sink output goes to stdout; diagnostics go to stderr (RUST_LOG overrides log_level)."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to fanlog.yaml config file")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    pub length: u64,

    #[arg(long, default_value_t = 0)]
    pub width: u64,

    #[arg(long, default_value_t = 0)]
    pub height: u64,

    /// Severity for this event (overrides config)
    #[arg(short, long, value_parser = parse_severity)]
    pub severity: Option<Severity>,

    /// Structured channel id (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub channel: Option<i32>,
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    Severity::ALL
        .into_iter()
        .find(|level| level.name().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            let names: Vec<&str> = Severity::ALL.iter().map(|level| level.name()).collect();
            format!("unknown severity '{value}', expected one of: {}", names.join(", "))
        })
}
