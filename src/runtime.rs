use std::io::{self, IsTerminal};

use crate::{Cli, run};
use owo_colors::OwoColorize;

/// High-level wrapper that executes a pearce run and reports errors uniformly.
pub struct Runtime {
  cli: Cli,
}

impl Runtime {
  /// Construct a new [`Runtime`] from parsed CLI arguments.
  #[must_use]
  pub fn new(cli: Cli) -> Self {
    Self { cli }
  }

  /// Execute the run and return the desired process exit code.
  ///
  /// Any error is printed to stderr with its cause chain and mapped to exit
  /// code `1`.
  pub async fn execute(self) -> i32 {
    let use_color = self.cli.colored && io::stderr().is_terminal();
    match run(self.cli).await {
      Ok(code) => code,
      Err(err) => {
        eprint!("{}", render_error_chain(&err, use_color));
        1
      }
    }
  }
}

fn render_error_chain(err: &anyhow::Error, use_color: bool) -> String {
  let mut rendered = if use_color {
    format!("{} {}\n", "error:".red().bold(), err.to_string().red().bold())
  } else {
    format!("error: {err}\n")
  };

  for cause in err.chain().skip(1) {
    if use_color {
      rendered.push_str(&format!("  {} {cause}\n", "↳".red()));
    } else {
      rendered.push_str(&format!("  ↳ {cause}\n"));
    }
  }

  rendered
}
