//! Quote request handler
//!
//! Strict request handling flow: validation is all-or-nothing, and no
//! arithmetic runs on a rejected record.

use serde_json::Value;
use uuid::Uuid;

use crate::observability::Logger;
use crate::quote::{self, round_cents};

use super::errors::ApiResult;
use super::response::QuoteResponse;

/// Runs one quote request end to end.
pub fn handle_quote(raw: &Value) -> ApiResult<QuoteResponse> {
    let request_id = Uuid::new_v4().to_string();

    let input = quote::validate(raw).map_err(|err| {
        Logger::warn(
            "QUOTE_REJECTED",
            &[("reason", err.message()), ("request_id", &request_id)],
        );
        err
    })?;

    let computed = quote::generate_quote(&input).map_err(|err| {
        Logger::error(
            "QUOTE_INVARIANT_FAILURE",
            &[("reason", err.message()), ("request_id", &request_id)],
        );
        err
    })?;

    Logger::info(
        "QUOTE_GENERATED",
        &[
            ("loan_type", input.loan_type.as_str()),
            ("request_id", &request_id),
            ("term_years", &input.loan_term.to_string()),
        ],
    );

    let mut response = QuoteResponse::new(computed.monthly_payment, computed.total_interest);
    if input.basis.is_derived() {
        response = response.with_loan_amount(round_cents(computed.principal));
    }
    Ok(response)
}
