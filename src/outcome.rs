//! Checked results of simulated subsystem calls.

use std::fmt;

use serde::Serialize;

/// The result of one subsystem call: a success flag and a readable message.
///
/// Failures are ordinary values. Callers inspect [`is_success`](Outcome::is_success)
/// before moving on; nothing in this crate panics or returns `Err` because a
/// simulated subsystem said no.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::outcome::Outcome;
///
/// let outcome = Outcome::failed("Payment failed (invalid card).");
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.to_string(), "Payment failed (invalid card).");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Outcome {
    /// Whether the call succeeded.
    pub success: bool,
    /// Human-readable description of what happened.
    pub message: String,
}

impl Outcome {
    /// A successful outcome.
    #[must_use]
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Returns `true` if the call succeeded.
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Converts into a `Result` carrying the message on both sides.
    ///
    /// # Errors
    ///
    /// Returns `Err(message)` when the outcome is a failure.
    pub fn into_result(self) -> Result<String, String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self.message)
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl From<Outcome> for (bool, String) {
    fn from(outcome: Outcome) -> Self {
        (outcome.success, outcome.message)
    }
}

impl From<(bool, String)> for Outcome {
    fn from((success, message): (bool, String)) -> Self {
        Self { success, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_succeeded_into_result() {
        let outcome = Outcome::succeeded("Stock is available.");
        assert_eq!(outcome.into_result(), Ok("Stock is available.".to_string()));
    }

    #[rstest]
    fn test_failed_into_result() {
        let outcome = Outcome::failed("Stock is NOT available.");
        assert_eq!(
            outcome.into_result(),
            Err("Stock is NOT available.".to_string())
        );
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_tuple_conversion(#[case] success: bool) {
        let outcome = Outcome::from((success, "message".to_string()));
        let (flag, message): (bool, String) = outcome.into();
        assert_eq!(flag, success);
        assert_eq!(message, "message");
    }
}
