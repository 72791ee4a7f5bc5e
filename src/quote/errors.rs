//! Quote error types
//!
//! Error codes:
//! - LQ_INVALID_INPUT (REJECT)
//! - LQ_UNSUPPORTED_LOAN_TYPE (FATAL)

use std::fmt;

/// Severity levels for quote errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected, no computation attempted
    Reject,
    /// Programming-invariant failure, fatal to the request
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Quote-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorCode {
    /// Input record violates the schema or a bound
    InvalidInput,
    /// Loan type matched none of the supported programs (unreachable once
    /// validation has passed)
    UnsupportedLoanType,
}

impl QuoteErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QuoteErrorCode::InvalidInput => "LQ_INVALID_INPUT",
            QuoteErrorCode::UnsupportedLoanType => "LQ_UNSUPPORTED_LOAN_TYPE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            QuoteErrorCode::InvalidInput => Severity::Reject,
            QuoteErrorCode::UnsupportedLoanType => Severity::Fatal,
        }
    }
}

impl fmt::Display for QuoteErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    /// Offending field
    pub field: String,
    /// Expected type, bound, or shape
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "no undeclared fields".into(),
            actual: "unknown field present".into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, expected: impl Into<String>, actual: f64) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Quote error with full context
#[derive(Debug, Clone)]
pub struct QuoteError {
    code: QuoteErrorCode,
    message: String,
    details: Option<ValidationDetails>,
}

impl QuoteError {
    /// Create an invalid input error from validation details
    pub fn invalid_input(details: ValidationDetails) -> Self {
        Self {
            code: QuoteErrorCode::InvalidInput,
            message: format!("Invalid input: {}", details),
            details: Some(details),
        }
    }

    /// Create an unsupported loan type error
    pub fn unsupported_loan_type(loan_type: impl Into<String>) -> Self {
        Self {
            code: QuoteErrorCode::UnsupportedLoanType,
            message: format!("Unsupported loan type '{}'", loan_type.into()),
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QuoteErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns validation details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for QuoteError {}

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QuoteErrorCode::InvalidInput.code(), "LQ_INVALID_INPUT");
        assert_eq!(
            QuoteErrorCode::UnsupportedLoanType.code(),
            "LQ_UNSUPPORTED_LOAN_TYPE"
        );
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(QuoteErrorCode::InvalidInput.severity(), Severity::Reject);
        assert_eq!(QuoteErrorCode::UnsupportedLoanType.severity(), Severity::Fatal);
        assert!(QuoteError::unsupported_loan_type("Jumbo").is_fatal());
        assert!(!QuoteError::invalid_input(ValidationDetails::missing_field("ltv")).is_fatal());
    }

    #[test]
    fn test_validation_details_display() {
        let details = ValidationDetails::type_mismatch("ltv", "number", "string");
        let display = format!("{}", details);
        assert!(display.contains("ltv"));
        assert!(display.contains("number"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_display_carries_code_and_severity() {
        let err = QuoteError::invalid_input(ValidationDetails::missing_field("interest_rate"));
        let display = format!("{}", err);
        assert!(display.contains("REJECT"));
        assert!(display.contains("LQ_INVALID_INPUT"));
        assert!(display.contains("interest_rate"));
    }
}
