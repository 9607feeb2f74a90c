use std::env;
use std::fs;
use std::path::Path;

/// Name of the plain-text file holding the build identifier.
pub const BUILD_FILE: &str = "build_number";

const FALLBACK_NAME: &str = "PEARCE";
const FALLBACK_BUILD: &str = "0";

/// Program name and build identifier reported by `--version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
  pub name: String,
  pub build: String,
}

impl BuildInfo {
  /// Resolve name and build from the running executable.
  ///
  /// The name is the executable's file stem upper-cased; the build comes from
  /// a `build_number` file next to the executable. Lookup failures never
  /// propagate.
  pub fn detect() -> Self {
    let exe = match env::current_exe() {
      Ok(path) => path,
      Err(err) => {
        tracing::debug!(error = %err, "could not locate current executable");
        return Self::fallback();
      }
    };

    let name = exe
      .file_stem()
      .and_then(|stem| stem.to_str())
      .map(str::to_uppercase)
      .unwrap_or_else(|| FALLBACK_NAME.to_string());

    match exe.parent() {
      Some(dir) => Self::load_from(dir, name),
      None => Self {
        name,
        build: FALLBACK_BUILD.to_string(),
      },
    }
  }

  /// Read the build identifier from `dir`, defaulting to `0`.
  pub fn load_from(dir: &Path, name: impl Into<String>) -> Self {
    let path = dir.join(BUILD_FILE);
    let build = match fs::read_to_string(&path) {
      Ok(contents) => contents.trim().to_string(),
      Err(err) => {
        tracing::debug!(
          path = %path.display(),
          error = %err,
          "build identifier unavailable"
        );
        FALLBACK_BUILD.to_string()
      }
    };

    Self {
      name: name.into(),
      build,
    }
  }

  fn fallback() -> Self {
    Self {
      name: FALLBACK_NAME.to_string(),
      build: FALLBACK_BUILD.to_string(),
    }
  }

  /// Text printed for `--version`, e.g. `PEARCE v42`.
  pub fn version_line(&self) -> String {
    format!("{} v{}", self.name, self.build)
  }
}
