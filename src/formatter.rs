use chrono::{DateTime, FixedOffset, Local};
use owo_colors::{AnsiColors, OwoColorize};

use crate::severity::Level;

/// strftime pattern for the bracketed timestamp, e.g. `12/Jan/2024:01:02:03 +0000`.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// A single, already-interpolated log line waiting to be rendered.
#[derive(Debug, Clone)]
pub struct LogRecord {
  pub timestamp: DateTime<FixedOffset>,
  pub level: Level,
  pub message: String,
}

impl LogRecord {
  /// Capture a record stamped with the current local time.
  pub fn now(level: impl Into<Level>, message: impl Into<String>) -> Self {
    Self {
      timestamp: Local::now().fixed_offset(),
      level: level.into(),
      message: message.into(),
    }
  }
}

/// Line template selected per record.
///
/// Both variants share the `[timestamp] [LEVEL] message` shape; the colored
/// one wraps only the level token.
#[derive(Debug, Clone, Copy)]
pub enum Template {
  Plain,
  Colored(AnsiColors),
}

impl Template {
  fn render(self, record: &LogRecord) -> String {
    let timestamp = record.timestamp.format(TIMESTAMP_FORMAT);
    match self {
      Self::Plain => {
        format!("[{timestamp}] [{}] {}", record.level, record.message)
      }
      Self::Colored(color) => format!(
        "[{timestamp}] [{}] {}",
        record.level.color(color),
        record.message
      ),
    }
  }
}

/// Renders records with a template chosen from the record's level.
///
/// The formatter holds nothing but its color flag, so every call to
/// [`SeverityFormatter::render`] is independent of the ones before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityFormatter {
  color_enabled: bool,
}

impl SeverityFormatter {
  #[must_use]
  pub const fn new(color_enabled: bool) -> Self {
    Self { color_enabled }
  }

  pub const fn color_enabled(&self) -> bool {
    self.color_enabled
  }

  /// Pick the template for `level`. Levels outside the known set always get
  /// the plain template.
  pub fn template_for(&self, level: Level) -> Template {
    match (self.color_enabled, level.severity()) {
      (true, Some(severity)) => Template::Colored(severity.color()),
      _ => Template::Plain,
    }
  }

  pub fn render(&self, record: &LogRecord) -> String {
    self.template_for(record.level).render(record)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;
  use crate::severity::Severity;

  fn record(level: impl Into<Level>, message: &str) -> LogRecord {
    let offset = FixedOffset::east_opt(0).expect("utc offset");
    LogRecord {
      timestamp: offset
        .with_ymd_and_hms(2024, 1, 12, 1, 2, 3)
        .single()
        .expect("valid timestamp"),
      level: level.into(),
      message: message.to_string(),
    }
  }

  fn colored_token(severity: Severity) -> String {
    format!("{}", severity.as_str().color(severity.color()))
  }

  #[test]
  fn plain_output_matches_default_shape() {
    let formatter = SeverityFormatter::new(false);
    let line = formatter.render(&record(Severity::Info, "hello"));
    assert_eq!(line, "[12/Jan/2024:01:02:03 +0000] [INFO] hello");
  }

  #[test]
  fn timestamp_keeps_numeric_offset() {
    let offset = FixedOffset::east_opt(2 * 3600).expect("offset");
    let record = LogRecord {
      timestamp: offset
        .with_ymd_and_hms(2023, 11, 5, 23, 59, 1)
        .single()
        .expect("valid timestamp"),
      level: Severity::Error.into(),
      message: "late".into(),
    };
    let line = SeverityFormatter::new(false).render(&record);
    assert_eq!(line, "[05/Nov/2023:23:59:01 +0200] [ERROR] late");
  }

  #[test]
  fn colored_output_wraps_only_the_level_token() {
    let formatter = SeverityFormatter::new(true);
    for severity in Severity::ALL {
      let line = formatter.render(&record(severity, "body"));
      let expected = format!(
        "[12/Jan/2024:01:02:03 +0000] [{}] body",
        colored_token(severity)
      );
      assert_eq!(line, expected);
      assert!(line.starts_with("[12/Jan/2024:01:02:03 +0000] ["));
      assert!(line.ends_with("] body"));
    }
  }

  #[test]
  fn each_severity_uses_its_own_color() {
    let formatter = SeverityFormatter::new(true);
    let expected = [
      (Severity::Debug, "\u{1b}[34m"),
      (Severity::Info, "\u{1b}[32m"),
      (Severity::Warning, "\u{1b}[33m"),
      (Severity::Error, "\u{1b}[31m"),
      (Severity::Critical, "\u{1b}[35m"),
    ];
    for (severity, escape) in expected {
      let line = formatter.render(&record(severity, "x"));
      assert!(
        line.contains(&format!("{escape}{}", severity.as_str())),
        "{severity}: {line:?}"
      );
    }
  }

  #[test]
  fn plain_output_has_no_escape_sequences() {
    let formatter = SeverityFormatter::new(false);
    for severity in Severity::ALL {
      let line = formatter.render(&record(severity, "body"));
      assert!(!line.contains('\u{1b}'), "{line:?}");
      assert!(line.contains(&format!("[{}]", severity.as_str())));
    }
  }

  #[test]
  fn unknown_level_falls_back_to_plain_template() {
    let formatter = SeverityFormatter::new(true);
    assert!(matches!(
      formatter.template_for(Level::Other(25)),
      Template::Plain
    ));
    let line = formatter.render(&record(Level::Other(25), "odd"));
    assert_eq!(line, "[12/Jan/2024:01:02:03 +0000] [Level 25] odd");
  }

  #[test]
  fn template_choice_does_not_leak_between_calls() {
    let formatter = SeverityFormatter::new(true);
    let first = formatter.render(&record(Severity::Critical, "one"));
    let second = formatter.render(&record(Severity::Debug, "two"));
    let third = formatter.render(&record(Level::Other(7), "three"));
    let fourth = formatter.render(&record(Severity::Critical, "one"));

    assert!(first.contains(&colored_token(Severity::Critical)));
    assert!(second.contains(&colored_token(Severity::Debug)));
    assert!(!second.contains(&colored_token(Severity::Critical)));
    assert!(!third.contains('\u{1b}'));
    assert_eq!(first, fourth);
  }
}
