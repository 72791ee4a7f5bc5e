//! API layer for lendquote
//!
//! Orchestrates the quote core behind a single request-shaped seam used by
//! both the HTTP route and the CLI one-shot:
//!
//! raw JSON record -> validate -> derive -> amortize -> response record
//!
//! No retries anywhere: the computation is deterministic and
//! side-effect-free, so retrying belongs to the caller's transport.

mod errors;
mod handler;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::handle_quote;
pub use response::{ErrorResponse, QuoteResponse, QUOTE_OK_MESSAGE};
