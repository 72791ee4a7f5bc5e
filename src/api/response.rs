//! # Response Formatting
//!
//! Wire records for the quote API.

use serde::Serialize;

/// Fixed confirmation string returned with every successful quote.
pub const QUOTE_OK_MESSAGE: &str = "Quote generated successfully";

/// Successful quote response body
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    /// Rounded to cents
    pub monthly_payment: f64,
    /// Rounded to cents
    pub total_interest: f64,
    pub message: String,
    /// Present only when the principal was derived from value and LTV
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
}

impl QuoteResponse {
    pub fn new(monthly_payment: f64, total_interest: f64) -> Self {
        Self {
            monthly_payment,
            total_interest,
            message: QUOTE_OK_MESSAGE.to_string(),
            loan_amount: None,
        }
    }

    pub fn with_loan_amount(mut self, loan_amount: f64) -> Self {
        self.loan_amount = Some(loan_amount);
        self
    }
}

/// Failure response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
