//! Quote calculator: principal derivation and amortization
//!
//! Principal comes either directly (loan amount minus down payment) or from
//! value x LTV with a loan-type surcharge financed into the principal.
//! Amortization is the standard fixed-rate level-payment annuity formula.
//!
//! Internal math runs at full f64 precision; rounding to cents happens once,
//! at the result boundary.

use super::errors::{QuoteError, QuoteResult};
use super::types::{LoanType, PrincipalBasis, Quote, QuoteInput};

/// Upfront FHA mortgage-insurance premium financed into the principal.
const FHA_PREMIUM_FACTOR: f64 = 1.0175;

/// VA funding fee financed into the principal unless the borrower is exempt.
const VA_FUNDING_FACTOR: f64 = 1.033;

/// Surcharge factors applied to a derived principal, by loan program.
/// A new program is a new row here, not a change to the formula.
const SURCHARGES: [(LoanType, fn(va_exempt: bool) -> f64); 3] = [
    (LoanType::Conventional, |_| 1.0),
    (LoanType::Fha, |_| FHA_PREMIUM_FACTOR),
    (LoanType::Va, |exempt| if exempt { 1.0 } else { VA_FUNDING_FACTOR }),
];

fn surcharge_factor(loan_type: LoanType, va_exempt: bool) -> QuoteResult<f64> {
    SURCHARGES
        .iter()
        .find(|(program, _)| *program == loan_type)
        .map(|(_, factor)| factor(va_exempt))
        .ok_or_else(|| QuoteError::unsupported_loan_type(loan_type.as_str()))
}

/// Derives the loan principal from the request's principal basis.
///
/// The surcharge applies only to the derived path; a directly supplied
/// amount is taken as-is, minus the down payment.
pub fn derive_principal(input: &QuoteInput) -> QuoteResult<f64> {
    match input.basis {
        PrincipalBasis::DirectAmount {
            loan_amount,
            down_payment,
        } => Ok(loan_amount - down_payment),
        PrincipalBasis::ValueAndLtv { value, ltv } => {
            let base = value * (ltv / 100.0);
            Ok(base * surcharge_factor(input.loan_type, input.va_exempt)?)
        }
    }
}

/// Monthly payment and total interest for a fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amortization {
    pub monthly_payment: f64,
    pub total_interest: f64,
}

/// Applies the level-payment annuity formula:
/// payment = P*r*(1+r)^n / ((1+r)^n - 1), r the monthly rate, n the
/// number of payments.
///
/// A zero monthly rate degenerates the formula (the denominator collapses
/// to zero); that case pays the principal down linearly with no interest.
pub fn amortize(principal: f64, annual_rate_pct: f64, term_years: u32) -> Amortization {
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let payments = f64::from(term_years * 12);

    if monthly_rate.abs() < f64::EPSILON {
        return Amortization {
            monthly_payment: principal / payments,
            total_interest: 0.0,
        };
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);
    let total_interest = monthly_payment * payments - principal;

    Amortization {
        monthly_payment,
        total_interest,
    }
}

/// Rounds a currency amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Full pipeline from a validated input to a quote record.
pub fn generate_quote(input: &QuoteInput) -> QuoteResult<Quote> {
    let principal = derive_principal(input)?;
    let amortization = amortize(principal, input.interest_rate, input.loan_term);

    Ok(Quote {
        principal,
        monthly_payment: round_cents(amortization.monthly_payment),
        total_interest: round_cents(amortization.total_interest),
    })
}
