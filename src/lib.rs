pub mod build_info;
pub mod cli;
pub mod core;
pub mod formatter;
pub mod logging;
pub mod runtime;
pub mod severity;
pub mod sink;
pub mod util;

pub use build_info::BuildInfo;
pub use cli::Cli;
pub use crate::core::{
  RandomSource, Settings, ValueSource, drive, run, run_with,
};
pub use formatter::{LogRecord, SeverityFormatter, Template};
pub use runtime::Runtime;
pub use severity::{Level, ParseSeverityError, Severity};
pub use sink::{Sink, configure};
