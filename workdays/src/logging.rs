use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Crates whose events the default filter lets through.
const CRATE_TARGETS: &[&str] = &["workdays", "wd_core", "wd_time", "wd_calc"];

/// Level for a `-v` count: warnings only by default, then info, debug, trace.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `EnvFilter` directives enabling `level` for the workdays crates only.
fn default_directives(level: LevelFilter) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `-v` when set.  Events go to stderr, since stdout
/// carries the result sentences.  Timestamps are left out of a one-shot
/// command's output; the emitting module is shown from `-vv` up.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .init();
}
