use std::fmt;
use std::str::FromStr;

use owo_colors::AnsiColors;

/// Ordered severity classification used both as a filter threshold and as a
/// template selector.
///
/// The numeric values are the familiar 10/20/30/40/50 logging levels, rising
/// with severity, so that arbitrary numeric levels (see [`Level::Other`]) can
/// be compared against a threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
  #[default]
  Debug,
  Info,
  Warning,
  Error,
  Critical,
}

impl Severity {
  /// All severities, lowest first.
  pub const ALL: [Self; 5] = [
    Self::Debug,
    Self::Info,
    Self::Warning,
    Self::Error,
    Self::Critical,
  ];

  /// Returns the canonical upper-case name printed in log lines.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Debug => "DEBUG",
      Self::Info => "INFO",
      Self::Warning => "WARNING",
      Self::Error => "ERROR",
      Self::Critical => "CRITICAL",
    }
  }

  /// Returns the numeric value of the severity.
  pub const fn value(self) -> u8 {
    match self {
      Self::Debug => 10,
      Self::Info => 20,
      Self::Warning => 30,
      Self::Error => 40,
      Self::Critical => 50,
    }
  }

  /// Foreground color applied to the level token when color is enabled.
  pub const fn color(self) -> AnsiColors {
    match self {
      Self::Debug => AnsiColors::Blue,
      Self::Info => AnsiColors::Green,
      Self::Warning => AnsiColors::Yellow,
      Self::Error => AnsiColors::Red,
      Self::Critical => AnsiColors::Magenta,
    }
  }

  /// Resolve a user-supplied level name, falling back to [`Severity::Debug`]
  /// for anything unrecognised.
  pub fn from_name_or_default(name: &str) -> Self {
    name.parse().unwrap_or(Self::Debug)
  }

  /// Map a sampled value in `0..=100` onto a severity.
  ///
  ///   * `> 90` → CRITICAL
  ///   * `> 80` → ERROR
  ///   * `> 70` → WARNING
  ///   * otherwise INFO
  pub const fn from_sample(value: u8) -> Self {
    if value > 90 {
      Self::Critical
    } else if value > 80 {
      Self::Error
    } else if value > 70 {
      Self::Warning
    } else {
      Self::Info
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`Severity`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
  input: String,
}

impl ParseSeverityError {
  pub fn new(input: impl Into<String>) -> Self {
    Self {
      input: input.into(),
    }
  }

  /// Returns the original input that failed to parse.
  pub fn input(&self) -> &str {
    &self.input
  }
}

impl fmt::Display for ParseSeverityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported severity `{}`", self.input)
  }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
  type Err = ParseSeverityError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase();
    match normalized.as_str() {
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warning" | "warn" => Ok(Self::Warning),
      "error" => Ok(Self::Error),
      "critical" | "fatal" => Ok(Self::Critical),
      _ => Err(ParseSeverityError::new(s)),
    }
  }
}

/// Level attached to a log record.
///
/// Records normally carry one of the five [`Severity`] values, but a numeric
/// level outside that set is representable too; such records are filtered by
/// number and always rendered with the plain default template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
  Severity(Severity),
  Other(u8),
}

impl Level {
  pub const fn value(self) -> u8 {
    match self {
      Self::Severity(severity) => severity.value(),
      Self::Other(value) => value,
    }
  }

  pub const fn severity(self) -> Option<Severity> {
    match self {
      Self::Severity(severity) => Some(severity),
      Self::Other(_) => None,
    }
  }
}

impl From<Severity> for Level {
  fn from(severity: Severity) -> Self {
    Self::Severity(severity)
  }
}

impl From<u8> for Level {
  fn from(value: u8) -> Self {
    Severity::ALL
      .into_iter()
      .find(|severity| severity.value() == value)
      .map_or(Self::Other(value), Self::Severity)
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Severity(severity) => f.write_str(severity.as_str()),
      Self::Other(value) => write!(f, "Level {value}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_debug() {
    assert_eq!(Severity::default(), Severity::Debug);
  }

  #[test]
  fn severities_are_ordered() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);
  }

  #[test]
  fn parse_is_case_insensitive_and_accepts_aliases() {
    assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));
    assert_eq!("INFO".parse::<Severity>(), Ok(Severity::Info));
    assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!(" error ".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
    assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Critical));
  }

  #[test]
  fn parse_rejects_unknown_values() {
    let err = "verbose".parse::<Severity>().unwrap_err();
    assert_eq!(err.input(), "verbose");
    assert_eq!(err.to_string(), "unsupported severity `verbose`");
  }

  #[test]
  fn unknown_names_fall_back_to_debug() {
    assert_eq!(Severity::from_name_or_default("loud"), Severity::Debug);
    assert_eq!(Severity::from_name_or_default(""), Severity::Debug);
    assert_eq!(Severity::from_name_or_default("ErRoR"), Severity::Error);
  }

  #[test]
  fn samples_map_onto_thresholds() {
    assert_eq!(Severity::from_sample(95), Severity::Critical);
    assert_eq!(Severity::from_sample(91), Severity::Critical);
    assert_eq!(Severity::from_sample(90), Severity::Error);
    assert_eq!(Severity::from_sample(85), Severity::Error);
    assert_eq!(Severity::from_sample(80), Severity::Warning);
    assert_eq!(Severity::from_sample(75), Severity::Warning);
    assert_eq!(Severity::from_sample(70), Severity::Info);
    assert_eq!(Severity::from_sample(50), Severity::Info);
    assert_eq!(Severity::from_sample(0), Severity::Info);
  }

  #[test]
  fn numeric_levels_map_to_known_severities() {
    assert_eq!(Level::from(10), Level::Severity(Severity::Debug));
    assert_eq!(Level::from(30), Level::Severity(Severity::Warning));
    assert_eq!(Level::from(50), Level::Severity(Severity::Critical));
    assert_eq!(Level::from(25), Level::Other(25));
    assert_eq!(Level::from(25).to_string(), "Level 25");
    assert_eq!(Level::from(25).severity(), None);
  }
}
