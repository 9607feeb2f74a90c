use clap::{ArgAction, Parser};

use crate::util::iterations::DEFAULT_ITERATIONS;

/// Command-line arguments for the pearce demo.
#[derive(Parser, Debug, Clone)]
#[command(
  author,
  about = "Emit randomly leveled log lines once per second",
  disable_version_flag = true
)]
pub struct Cli {
  /// Show version.
  #[arg(long, action = ArgAction::SetTrue)]
  pub version: bool,

  /// Colored output if provided.
  #[arg(short, long, env = "PEARCE_COLORED")]
  pub colored: bool,

  /// Iterations for the main loop.
  #[arg(
    short,
    long,
    env = "PEARCE_ITERATIONS",
    value_name = "N",
    default_value_t = DEFAULT_ITERATIONS.to_string()
  )]
  pub iterations: String,

  /// Logging verbosity. Choices are debug, info, warning, error, and critical.
  #[arg(
    short,
    long,
    env = "PEARCE_VERBOSITY",
    value_name = "LEVEL",
    default_value = "debug"
  )]
  pub verbosity: String,
}
