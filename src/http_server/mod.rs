//! HTTP serving layer
//!
//! axum router exposing the quote API:
//! - `GET /health` — liveness and version
//! - `POST /api/quote` — bearer key required, JSON in/out

mod config;
mod quote_routes;
mod server;

pub use config::HttpServerConfig;
pub use quote_routes::{health_routes, quote_routes, HealthResponse, QuoteState};
pub use server::HttpServer;
