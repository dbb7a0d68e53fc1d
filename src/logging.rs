use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown; dependencies stay quiet.
const CRATE_TARGETS: &[&str] = &["doomsday", "doomsday_calculator", "doomsday_calendar"];

/// Level name for a `-v` count: none warns, `-v` info, `-vv` debug, more trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives applying `level` to every workspace crate.
fn directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so stdout carries only
/// the answer. `RUST_LOG` wins over `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
