//! Structured error codes shared by every error enum.

/// Trait for attaching a stable, machine-readable code to an error.
/// Every error enum implements this so callers can branch on the code
/// instead of matching display strings.
pub trait AttackErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_NODE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const NO_CRITICAL_ASSET: &str = "NO_CRITICAL_ASSET";
pub const AMBIGUOUS_CRITICAL_ASSET: &str = "AMBIGUOUS_CRITICAL_ASSET";
pub const SCENARIO_ERROR: &str = "SCENARIO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
