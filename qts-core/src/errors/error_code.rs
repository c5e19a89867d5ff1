//! QtsErrorCode trait for the rendering-layer boundary.

/// Every error enum maps to a stable code string the rendering layer can
/// switch on without parsing messages.
pub trait QtsErrorCode {
    /// Returns the code string (e.g., "INVALID_ARGUMENT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
