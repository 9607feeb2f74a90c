use tracing_subscriber::EnvFilter;

/// Environment variable consulted for internal diagnostic filters.
pub const LOG_ENV: &str = "PEARCE_LOG";

/// Initialise internal diagnostics for pearce.
///
/// Diagnostics are written to stderr so that stdout carries only the demo's
/// own log lines. Only warnings are shown unless `PEARCE_LOG` holds another
/// filter such as `debug` or `pearce=trace`.
///
/// `use_color` controls whether ANSI colour codes are emitted.
pub fn init(use_color: bool) {
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  // A second call (e.g. from tests) leaves the first subscriber in place.
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_level(true)
    .with_ansi(use_color)
    .compact()
    .try_init();
}
