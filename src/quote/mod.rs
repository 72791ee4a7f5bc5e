//! Quote computation core
//!
//! Two components composed one-way:
//! - validator: raw JSON record -> typed `QuoteInput`
//! - calculator: `QuoteInput` -> principal -> monthly payment and total interest
//!
//! The core is pure: no I/O, no shared state. Validation is all-or-nothing
//! and runs before any arithmetic.

mod calculator;
mod errors;
mod types;
mod validator;

pub use calculator::{amortize, derive_principal, generate_quote, round_cents, Amortization};
pub use errors::{QuoteError, QuoteErrorCode, QuoteResult, Severity, ValidationDetails};
pub use types::{Applicant, LoanType, PrincipalBasis, Quote, QuoteInput};
pub use validator::validate;
