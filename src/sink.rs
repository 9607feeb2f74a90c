use std::io::{self, Stdout, Write};

use crate::formatter::{LogRecord, SeverityFormatter};
use crate::severity::{Level, Severity};

/// Destination and filtering policy for emitted records.
///
/// A sink owns exactly one writer and one formatter. Reconfiguring it swaps
/// the policy in place, so there is never more than one active handler.
///
/// Write failures never stop the caller: the first one is reported through
/// `tracing` and every failure is counted.
#[derive(Debug)]
pub struct Sink<W> {
  writer: W,
  formatter: SeverityFormatter,
  min_level: Severity,
  write_errors: u64,
}

/// Build a sink writing to `writer`, dropping anything below `min_level`.
pub fn configure<W: Write>(
  writer: W,
  min_level: Severity,
  color_enabled: bool,
) -> Sink<W> {
  tracing::debug!(%min_level, color_enabled, "configured log sink");
  Sink {
    writer,
    formatter: SeverityFormatter::new(color_enabled),
    min_level,
    write_errors: 0,
  }
}

impl Sink<Stdout> {
  /// Sink bound to the process's standard output.
  pub fn stdout(min_level: Severity, color_enabled: bool) -> Self {
    configure(io::stdout(), min_level, color_enabled)
  }
}

impl<W: Write> Sink<W> {
  pub fn min_level(&self) -> Severity {
    self.min_level
  }

  pub fn formatter(&self) -> &SeverityFormatter {
    &self.formatter
  }

  /// Number of records that passed the filter but could not be written.
  pub fn write_errors(&self) -> u64 {
    self.write_errors
  }

  /// Replace the filter threshold and color setting of this sink.
  pub fn reconfigure(&mut self, min_level: Severity, color_enabled: bool) {
    tracing::debug!(%min_level, color_enabled, "reconfigured log sink");
    self.min_level = min_level;
    self.formatter = SeverityFormatter::new(color_enabled);
  }

  /// Whether a record at `level` would pass the threshold.
  pub fn enabled(&self, level: Level) -> bool {
    level.value() >= self.min_level.value()
  }

  /// Render and write `record` unless it is below the threshold.
  ///
  /// Returns `true` only when the line reached the writer.
  pub fn write_record(&mut self, record: &LogRecord) -> bool {
    if !self.enabled(record.level) {
      return false;
    }

    let line = self.formatter.render(record);
    match self.write_line(&line) {
      Ok(()) => true,
      Err(err) => {
        if self.write_errors == 0 {
          tracing::warn!(error = %err, "failed to write log line");
        }
        self.write_errors += 1;
        false
      }
    }
  }

  fn write_line(&mut self, line: &str) -> io::Result<()> {
    writeln!(self.writer, "{line}")?;
    self.writer.flush()
  }

  /// Stamp `message` with the current time and write it at `level`.
  pub fn emit(
    &mut self,
    level: impl Into<Level>,
    message: impl Into<String>,
  ) -> bool {
    let level = level.into();
    // Filtered records skip the clock read and the message allocation.
    if !self.enabled(level) {
      return false;
    }
    self.write_record(&LogRecord::now(level, message))
  }

  pub fn debug(&mut self, message: impl Into<String>) -> bool {
    self.emit(Severity::Debug, message)
  }

  pub fn info(&mut self, message: impl Into<String>) -> bool {
    self.emit(Severity::Info, message)
  }

  pub fn warning(&mut self, message: impl Into<String>) -> bool {
    self.emit(Severity::Warning, message)
  }

  pub fn error(&mut self, message: impl Into<String>) -> bool {
    self.emit(Severity::Error, message)
  }

  pub fn critical(&mut self, message: impl Into<String>) -> bool {
    self.emit(Severity::Critical, message)
  }

  pub fn get_ref(&self) -> &W {
    &self.writer
  }

  pub fn into_inner(self) -> W {
    self.writer
  }
}
