use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Settings file (TOML).
    #[arg(long, env = "HOMEMATIC_DISPLAY_CONFIG", default_value = "config.toml")]
    pub config: PathBuf,

    /// File that receives the rendered markup. Printed to stdout when omitted.
    #[arg(long, env = "HOMEMATIC_DISPLAY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Poll once and exit instead of polling on the configured interval.
    #[arg(long)]
    pub once: bool,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,
}
