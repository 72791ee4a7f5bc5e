//! Observability for lendquote
//!
//! Structured logging only; quote computation is O(1) and stateless, so
//! there is no metrics registry or audit trail here.

mod logger;

pub use logger::{Logger, Severity};
