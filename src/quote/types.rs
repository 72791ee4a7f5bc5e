//! Domain types for the quote core.

use std::fmt;

/// Supported loan programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanType {
    Conventional,
    Fha,
    Va,
}

impl LoanType {
    /// All supported programs, in wire-name order.
    pub const ALL: [LoanType; 3] = [LoanType::Conventional, LoanType::Fha, LoanType::Va];

    /// Returns the wire name for this program.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Conventional => "Conventional",
            LoanType::Fha => "FHA",
            LoanType::Va => "VA",
        }
    }

    /// Parses a wire name. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the loan principal is determined. Exactly one path per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrincipalBasis {
    /// Principal supplied directly, reduced by any down payment.
    DirectAmount { loan_amount: f64, down_payment: f64 },
    /// Principal derived from a property value and a loan-to-value ratio,
    /// with a loan-type surcharge financed into it.
    ValueAndLtv { value: f64, ltv: f64 },
}

impl PrincipalBasis {
    /// True when the principal is derived rather than supplied.
    pub fn is_derived(&self) -> bool {
        matches!(self, PrincipalBasis::ValueAndLtv { .. })
    }
}

/// Borrower identification carried by the fullest request variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub property_address: String,
}

/// A validated quote request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub applicant: Option<Applicant>,
    pub basis: PrincipalBasis,
    /// Annual nominal rate, percent.
    pub interest_rate: f64,
    /// Term in years.
    pub loan_term: u32,
    pub loan_type: LoanType,
    /// VA funding-fee waiver. Always false for non-VA programs.
    pub va_exempt: bool,
}

/// A computed quote. Transient: built per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Derived principal, full precision.
    pub principal: f64,
    /// Rounded to cents.
    pub monthly_payment: f64,
    /// Rounded to cents.
    pub total_interest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_type_round_trip() {
        for loan_type in LoanType::ALL {
            assert_eq!(LoanType::parse(loan_type.as_str()), Some(loan_type));
        }
    }

    #[test]
    fn test_loan_type_parse_is_exact() {
        assert_eq!(LoanType::parse("Jumbo"), None);
        assert_eq!(LoanType::parse("fha"), None);
        assert_eq!(LoanType::parse(""), None);
    }

    #[test]
    fn test_loan_type_display() {
        assert_eq!(LoanType::Va.to_string(), "VA");
        assert_eq!(LoanType::Conventional.to_string(), "Conventional");
    }

    #[test]
    fn test_basis_is_derived() {
        let direct = PrincipalBasis::DirectAmount {
            loan_amount: 300_000.0,
            down_payment: 0.0,
        };
        let derived = PrincipalBasis::ValueAndLtv {
            value: 375_000.0,
            ltv: 80.0,
        };

        assert!(!direct.is_derived());
        assert!(derived.is_derived());
    }
}
