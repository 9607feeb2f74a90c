/// Helpers for interpreting raw CLI input.
pub mod iterations {
  /// Loop length used when the supplied count is unusable.
  pub const DEFAULT_ITERATIONS: u64 = 10;

  /// Interpret a raw iteration count.
  ///
  /// Only plain runs of ASCII digits are accepted. Signs, whitespace, values
  /// that overflow `u64`, and non-ASCII digits such as `"٣"` are rejected,
  /// even where a Unicode-aware numeric check would accept them. On rejection
  /// the default count is returned in the `Err` variant so the caller can
  /// warn and continue.
  ///
  /// # Examples
  ///
  /// ```
  /// use pearce::util::iterations::resolve;
  ///
  /// assert_eq!(resolve("7"), Ok(7));
  /// assert_eq!(resolve("abc"), Err(10));
  /// ```
  pub fn resolve(raw: &str) -> Result<u64, u64> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
      return Err(DEFAULT_ITERATIONS);
    }
    raw.parse().map_err(|_| DEFAULT_ITERATIONS)
  }

  /// Warning text logged when [`resolve`] falls back to the default.
  pub fn fallback_message(default: u64) -> String {
    format!(
      "Supplied value for iterations was not a number. Using default of {default}."
    )
  }
}
