//! lendquote - A mortgage quote engine with a validated HTTP API
//!
//! The core is a pure validate -> derive -> amortize pipeline; the HTTP
//! and CLI layers are thin shells over it.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quote;
