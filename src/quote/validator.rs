//! Input validator for quote requests
//!
//! Validation semantics:
//! - The record must be a JSON object with no undeclared fields
//! - Identification fields are all-or-none, non-empty strings
//! - Exactly one principal-determination path per request: a direct
//!   `loan_amount` (optionally reduced by `down_payment`), or a value
//!   field plus `ltv`
//! - All numeric bounds are checked before any arithmetic runs
//!
//! Failure reports the first violated constraint, in a fixed field order
//! (identification, basis shape, basis bounds, rate, term, type,
//! va_exempt), so rejection is deterministic for a given record.

use serde_json::{Map, Value};

use super::errors::{QuoteError, QuoteResult, ValidationDetails};
use super::types::{Applicant, LoanType, PrincipalBasis, QuoteInput};

/// Principal and value bounds, dollars.
pub const MIN_AMOUNT: f64 = 10_000.0;
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Annual rate bounds, percent.
pub const MIN_RATE: f64 = 0.1;
pub const MAX_RATE: f64 = 20.0;

/// Accepted terms, years.
pub const LOAN_TERMS: [i64; 3] = [15, 20, 30];

/// Every field the superset schema declares.
const DECLARED_FIELDS: [&str; 12] = [
    "first_name",
    "last_name",
    "property_address",
    "loan_amount",
    "down_payment",
    "property_value",
    "purchase_price",
    "ltv",
    "interest_rate",
    "loan_term",
    "loan_type",
    "va_exempt",
];

const IDENTIFICATION_FIELDS: [&str; 3] = ["first_name", "last_name", "property_address"];

/// Validates a raw record into a typed `QuoteInput`.
///
/// Pure check: no side effects, no partial result. The first violated
/// constraint is returned as `LQ_INVALID_INPUT` with field detail.
pub fn validate(raw: &Value) -> QuoteResult<QuoteInput> {
    let record = raw.as_object().ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::type_mismatch(
            "$root",
            "object",
            json_type_name(raw),
        ))
    })?;

    for key in record.keys() {
        if !DECLARED_FIELDS.contains(&key.as_str()) {
            return Err(QuoteError::invalid_input(ValidationDetails::unknown_field(
                key,
            )));
        }
    }

    let applicant = validate_applicant(record)?;
    let basis = validate_basis(record)?;

    let interest_rate = require_number(record, "interest_rate")?;
    check_range(
        "interest_rate",
        interest_rate,
        MIN_RATE,
        MAX_RATE,
        "0.1 to 20",
    )?;

    let loan_term = validate_term(record)?;
    let loan_type = validate_loan_type(record)?;
    let va_exempt = validate_va_exempt(record, loan_type, applicant.is_some())?;

    Ok(QuoteInput {
        applicant,
        basis,
        interest_rate,
        loan_term,
        loan_type,
        va_exempt,
    })
}

/// Identification fields are all-or-none; each must be a non-empty string.
fn validate_applicant(record: &Map<String, Value>) -> QuoteResult<Option<Applicant>> {
    if IDENTIFICATION_FIELDS.iter().all(|f| !record.contains_key(*f)) {
        return Ok(None);
    }

    Ok(Some(Applicant {
        first_name: required_string(record, "first_name")?,
        last_name: required_string(record, "last_name")?,
        property_address: required_string(record, "property_address")?,
    }))
}

fn required_string(record: &Map<String, Value>, field: &str) -> QuoteResult<String> {
    let value = record
        .get(field)
        .ok_or_else(|| QuoteError::invalid_input(ValidationDetails::missing_field(field)))?;
    nonempty_string(field, value)
}

/// Selects the principal path from which fields are present, then bounds-
/// checks that path. The two paths never mix.
fn validate_basis(record: &Map<String, Value>) -> QuoteResult<PrincipalBasis> {
    let has_direct = record.contains_key("loan_amount");
    let has_value = record.contains_key("property_value");
    let has_price = record.contains_key("purchase_price");
    let has_ltv = record.contains_key("ltv");

    if has_direct && (has_value || has_price || has_ltv) {
        return Err(QuoteError::invalid_input(ValidationDetails::new(
            "loan_amount",
            "exactly one principal path",
            "both a direct amount and value/ltv fields",
        )));
    }

    if has_direct {
        let loan_amount = require_number(record, "loan_amount")?;
        check_range(
            "loan_amount",
            loan_amount,
            MIN_AMOUNT,
            MAX_AMOUNT,
            "10000 to 10000000",
        )?;

        let down_payment = match record.get("down_payment") {
            Some(value) => {
                let down = number("down_payment", value)?;
                if down < 0.0 || down > loan_amount {
                    return Err(QuoteError::invalid_input(ValidationDetails::out_of_range(
                        "down_payment",
                        "0 to loan_amount",
                        down,
                    )));
                }
                down
            }
            None => 0.0,
        };

        return Ok(PrincipalBasis::DirectAmount {
            loan_amount,
            down_payment,
        });
    }

    if record.contains_key("down_payment") {
        return Err(QuoteError::invalid_input(ValidationDetails::new(
            "down_payment",
            "loan_amount alongside down_payment",
            "value/ltv path",
        )));
    }

    if has_value && has_price {
        return Err(QuoteError::invalid_input(ValidationDetails::new(
            "purchase_price",
            "exactly one of property_value or purchase_price",
            "both present",
        )));
    }

    let value_field = if has_price { "purchase_price" } else { "property_value" };
    if !has_value && !has_price {
        return Err(QuoteError::invalid_input(ValidationDetails::missing_field(
            "property_value",
        )));
    }

    let value = require_number(record, value_field)?;
    check_range(value_field, value, MIN_AMOUNT, MAX_AMOUNT, "10000 to 10000000")?;

    let ltv = require_number(record, "ltv")?;
    check_range("ltv", ltv, 1.0, 100.0, "1 to 100")?;

    Ok(PrincipalBasis::ValueAndLtv { value, ltv })
}

/// Term must be a JSON integer from the accepted set.
fn validate_term(record: &Map<String, Value>) -> QuoteResult<u32> {
    let value = record.get("loan_term").ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::missing_field("loan_term"))
    })?;

    let term = value.as_i64().ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::type_mismatch(
            "loan_term",
            "integer",
            json_type_name(value),
        ))
    })?;

    if !LOAN_TERMS.contains(&term) {
        return Err(QuoteError::invalid_input(ValidationDetails::new(
            "loan_term",
            "one of 15, 20, 30",
            term.to_string(),
        )));
    }

    Ok(term as u32)
}

fn validate_loan_type(record: &Map<String, Value>) -> QuoteResult<LoanType> {
    let value = record.get("loan_type").ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::missing_field("loan_type"))
    })?;

    let name = value.as_str().ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::type_mismatch(
            "loan_type",
            "string",
            json_type_name(value),
        ))
    })?;

    LoanType::parse(name).ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::new(
            "loan_type",
            "one of Conventional, FHA, VA",
            name,
        ))
    })
}

/// The waiver flag only makes sense for VA loans. The identification-bearing
/// variant requires it explicitly for VA; elsewhere it defaults to false.
fn validate_va_exempt(
    record: &Map<String, Value>,
    loan_type: LoanType,
    has_applicant: bool,
) -> QuoteResult<bool> {
    match record.get("va_exempt") {
        Some(value) => {
            let exempt = value.as_bool().ok_or_else(|| {
                QuoteError::invalid_input(ValidationDetails::type_mismatch(
                    "va_exempt",
                    "boolean",
                    json_type_name(value),
                ))
            })?;
            if loan_type != LoanType::Va {
                return Err(QuoteError::invalid_input(ValidationDetails::new(
                    "va_exempt",
                    "VA loan type",
                    loan_type.as_str(),
                )));
            }
            Ok(exempt)
        }
        None => {
            if loan_type == LoanType::Va && has_applicant {
                return Err(QuoteError::invalid_input(ValidationDetails::missing_field(
                    "va_exempt",
                )));
            }
            Ok(false)
        }
    }
}

fn require_number(record: &Map<String, Value>, field: &str) -> QuoteResult<f64> {
    let value = record
        .get(field)
        .ok_or_else(|| QuoteError::invalid_input(ValidationDetails::missing_field(field)))?;
    number(field, value)
}

fn number(field: &str, value: &Value) -> QuoteResult<f64> {
    value.as_f64().ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::type_mismatch(
            field,
            "number",
            json_type_name(value),
        ))
    })
}

fn check_range(field: &str, value: f64, min: f64, max: f64, bounds: &str) -> QuoteResult<()> {
    if value < min || value > max {
        return Err(QuoteError::invalid_input(ValidationDetails::out_of_range(
            field, bounds, value,
        )));
    }
    Ok(())
}

fn nonempty_string(field: &str, value: &Value) -> QuoteResult<String> {
    let s = value.as_str().ok_or_else(|| {
        QuoteError::invalid_input(ValidationDetails::type_mismatch(
            field,
            "string",
            json_type_name(value),
        ))
    })?;

    if s.trim().is_empty() {
        return Err(QuoteError::invalid_input(ValidationDetails::new(
            field,
            "non-empty string",
            "empty string",
        )));
    }

    Ok(s.to_string())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ltv_request() -> Value {
        json!({
            "property_value": 375000,
            "ltv": 80,
            "interest_rate": 6.5,
            "loan_term": 30,
            "loan_type": "Conventional"
        })
    }

    fn direct_request() -> Value {
        json!({
            "loan_amount": 300000,
            "down_payment": 60000,
            "interest_rate": 6.5,
            "loan_term": 30,
            "loan_type": "Conventional"
        })
    }

    #[test]
    fn test_value_ltv_path_accepted() {
        let input = validate(&ltv_request()).unwrap();
        assert_eq!(
            input.basis,
            PrincipalBasis::ValueAndLtv {
                value: 375_000.0,
                ltv: 80.0
            }
        );
        assert_eq!(input.loan_type, LoanType::Conventional);
        assert!(input.applicant.is_none());
        assert!(!input.va_exempt);
    }

    #[test]
    fn test_purchase_price_is_an_alias_for_value() {
        let mut raw = ltv_request();
        let obj = raw.as_object_mut().unwrap();
        let value = obj.remove("property_value").unwrap();
        obj.insert("purchase_price".to_string(), value);

        let input = validate(&raw).unwrap();
        assert!(input.basis.is_derived());
    }

    #[test]
    fn test_direct_path_accepted() {
        let input = validate(&direct_request()).unwrap();
        assert_eq!(
            input.basis,
            PrincipalBasis::DirectAmount {
                loan_amount: 300_000.0,
                down_payment: 60_000.0
            }
        );
    }

    #[test]
    fn test_down_payment_defaults_to_zero() {
        let mut raw = direct_request();
        raw.as_object_mut().unwrap().remove("down_payment");

        let input = validate(&raw).unwrap();
        assert_eq!(
            input.basis,
            PrincipalBasis::DirectAmount {
                loan_amount: 300_000.0,
                down_payment: 0.0
            }
        );
    }

    #[test]
    fn test_identification_variant_accepted() {
        let raw = json!({
            "first_name": "Alice",
            "last_name": "Moreno",
            "property_address": "12 Bay St",
            "property_value": 375000,
            "ltv": 80,
            "interest_rate": 6.5,
            "loan_term": 30,
            "loan_type": "VA",
            "va_exempt": true
        });

        let input = validate(&raw).unwrap();
        let applicant = input.applicant.unwrap();
        assert_eq!(applicant.first_name, "Alice");
        assert_eq!(applicant.property_address, "12 Bay St");
        assert!(input.va_exempt);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.details().unwrap().field, "$root");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("currency".to_string(), json!("USD"));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "currency");
    }

    #[test]
    fn test_mixed_principal_paths_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("loan_amount".to_string(), json!(300000));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "loan_amount");
    }

    #[test]
    fn test_both_value_fields_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("purchase_price".to_string(), json!(380000));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "purchase_price");
    }

    #[test]
    fn test_down_payment_requires_direct_path() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("down_payment".to_string(), json!(10000));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "down_payment");
    }

    #[test]
    fn test_down_payment_cannot_exceed_loan_amount() {
        let mut raw = direct_request();
        raw.as_object_mut()
            .unwrap()
            .insert("down_payment".to_string(), json!(300001));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "down_payment");
    }

    #[test]
    fn test_missing_ltv_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut().unwrap().remove("ltv");

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "ltv");
    }

    #[test]
    fn test_ltv_bounds() {
        for bad in [0, 101] {
            let mut raw = ltv_request();
            raw.as_object_mut()
                .unwrap()
                .insert("ltv".to_string(), json!(bad));
            let err = validate(&raw).unwrap_err();
            assert_eq!(err.details().unwrap().field, "ltv");
        }

        for ok in [1, 100] {
            let mut raw = ltv_request();
            raw.as_object_mut()
                .unwrap()
                .insert("ltv".to_string(), json!(ok));
            assert!(validate(&raw).is_ok());
        }
    }

    #[test]
    fn test_value_bounds() {
        for bad in [9_999, 10_000_001] {
            let mut raw = ltv_request();
            raw.as_object_mut()
                .unwrap()
                .insert("property_value".to_string(), json!(bad));
            let err = validate(&raw).unwrap_err();
            assert_eq!(err.details().unwrap().field, "property_value");
        }
    }

    #[test]
    fn test_interest_rate_bounds() {
        for bad in [0.0, 0.05, 20.5] {
            let mut raw = ltv_request();
            raw.as_object_mut()
                .unwrap()
                .insert("interest_rate".to_string(), json!(bad));
            let err = validate(&raw).unwrap_err();
            assert_eq!(err.details().unwrap().field, "interest_rate");
        }
    }

    #[test]
    fn test_loan_term_must_be_from_accepted_set() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("loan_term".to_string(), json!(25));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "loan_term");
    }

    #[test]
    fn test_loan_term_float_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("loan_term".to_string(), json!(30.0));

        let err = validate(&raw).unwrap_err();
        let details = err.details().unwrap();
        assert_eq!(details.field, "loan_term");
        assert_eq!(details.expected, "integer");
    }

    #[test]
    fn test_unsupported_loan_type_string_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("loan_type".to_string(), json!("Jumbo"));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "loan_type");
    }

    #[test]
    fn test_va_exempt_rejected_for_non_va() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("va_exempt".to_string(), json!(true));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "va_exempt");
    }

    #[test]
    fn test_va_exempt_required_with_identification() {
        let raw = json!({
            "first_name": "Alice",
            "last_name": "Moreno",
            "property_address": "12 Bay St",
            "property_value": 375000,
            "ltv": 80,
            "interest_rate": 6.5,
            "loan_term": 30,
            "loan_type": "VA"
        });

        let err = validate(&raw).unwrap_err();
        let details = err.details().unwrap();
        assert_eq!(details.field, "va_exempt");
        assert_eq!(details.actual, "missing");
    }

    #[test]
    fn test_va_exempt_optional_without_identification() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("loan_type".to_string(), json!("VA"));

        let input = validate(&raw).unwrap();
        assert!(!input.va_exempt);
    }

    #[test]
    fn test_partial_identification_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("first_name".to_string(), json!("Alice"));

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "last_name");
    }

    #[test]
    fn test_empty_identification_string_rejected() {
        let raw = json!({
            "first_name": "Alice",
            "last_name": "  ",
            "property_address": "12 Bay St",
            "property_value": 375000,
            "ltv": 80,
            "interest_rate": 6.5,
            "loan_term": 30,
            "loan_type": "Conventional"
        });

        let err = validate(&raw).unwrap_err();
        assert_eq!(err.details().unwrap().field, "last_name");
    }

    #[test]
    fn test_wrong_number_type_rejected() {
        let mut raw = ltv_request();
        raw.as_object_mut()
            .unwrap()
            .insert("interest_rate".to_string(), json!("6.5"));

        let err = validate(&raw).unwrap_err();
        let details = err.details().unwrap();
        assert_eq!(details.field, "interest_rate");
        assert_eq!(details.actual, "string");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut raw = ltv_request();
        let obj = raw.as_object_mut().unwrap();
        obj.insert("ltv".to_string(), json!(0));
        obj.insert("interest_rate".to_string(), json!(50));

        // Two violations present; the basis check runs first every time.
        for _ in 0..20 {
            let err = validate(&raw).unwrap_err();
            assert_eq!(err.details().unwrap().field, "ltv");
        }
    }
}
