use std::path::PathBuf;

use clap::Parser;

/// Doomsday day-of-week calculator.
#[derive(Parser)]
#[command(
    name = "doomsday",
    version,
    about = "Find the day of the week for a date, step by step"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub args: WeekdayArgs,
}

/// Arguments for a single calculation.
#[derive(clap::Args, Debug)]
pub struct WeekdayArgs {
    /// Date in YYYY-MM-DD form. Put negative years after `--`.
    pub date: String,

    /// Path to TOML configuration file (default: ./doomsday.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: "text" or "json". Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print only the weekday, without the explanation.
    #[arg(long)]
    pub no_steps: bool,

    /// Leap-year rule: "simplified" or "gregorian". Overrides the config file.
    #[arg(long = "leap-rule")]
    pub leap_rule: Option<String>,
}
