use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
  build_info::BuildInfo,
  cli::Cli,
  logging,
  severity::Severity,
  sink::{Sink, configure},
  util::iterations,
};

/// Delay between iterations of the main loop.
pub const PACE: Duration = Duration::from_secs(1);

/// Supplies the values that drive each iteration's severity.
pub trait ValueSource {
  /// Next value in `0..=100`.
  fn next_value(&mut self) -> u8;
}

/// [`ValueSource`] backed by an OS-seeded PRNG.
#[derive(Debug)]
pub struct RandomSource {
  rng: StdRng,
}

impl RandomSource {
  /// Seed once from OS entropy.
  pub fn seeded() -> Self {
    Self {
      rng: StdRng::from_entropy(),
    }
  }

  /// Deterministic source, mostly useful for reproducing a run.
  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: StdRng::seed_from_u64(seed),
    }
  }
}

impl ValueSource for RandomSource {
  fn next_value(&mut self) -> u8 {
    self.rng.gen_range(0..=100)
  }
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
  pub color_enabled: bool,
  pub min_level: Severity,
  /// Raw iteration count; validated by [`drive`] once the sink is live so the
  /// fallback warning can be logged.
  pub iterations: String,
  pub pace: Duration,
}

impl Settings {
  pub fn from_cli(cli: &Cli) -> Self {
    Self {
      color_enabled: cli.colored,
      min_level: Severity::from_name_or_default(&cli.verbosity),
      iterations: cli.iterations.clone(),
      pace: PACE,
    }
  }
}

/// Orchestrate a full pearce invocation against stdout.
pub async fn run(cli: Cli) -> Result<i32> {
  logging::init(cli.colored && io::stderr().is_terminal());

  let mut source = RandomSource::seeded();
  run_with(cli, io::stdout(), &mut source).await
}

/// Run an invocation writing to `out` and drawing values from `source`.
///
/// Output failures are reported by the sink and never change the exit code.
pub async fn run_with<W, S>(
  cli: Cli,
  mut out: W,
  source: &mut S,
) -> Result<i32>
where
  W: Write,
  S: ValueSource + ?Sized,
{
  if cli.version {
    let line = BuildInfo::detect().version_line();
    if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
      tracing::warn!(error = %err, "failed to print version");
    }
    return Ok(0);
  }

  let settings = Settings::from_cli(&cli);
  let mut sink = configure(out, settings.min_level, settings.color_enabled);

  let completed = drive(&settings, &mut sink, source).await;
  tracing::debug!(
    completed,
    write_errors = sink.write_errors(),
    "main loop finished"
  );

  Ok(0)
}

/// Run the main loop against `sink`, returning the number of iterations.
pub async fn drive<W, S>(
  settings: &Settings,
  sink: &mut Sink<W>,
  source: &mut S,
) -> u64
where
  W: Write,
  S: ValueSource + ?Sized,
{
  sink.debug("Starting main loop.");

  let count = match iterations::resolve(&settings.iterations) {
    Ok(count) => count,
    Err(default) => {
      sink.warning(iterations::fallback_message(default));
      default
    }
  };

  for i in 0..count {
    let value = source.next_value();
    let severity = Severity::from_sample(value);
    sink.emit(severity, format!("Iteration {i} with value {value}"));
    tokio::time::sleep(settings.pace).await;
  }

  sink.debug("Exiting main loop.");
  count
}
