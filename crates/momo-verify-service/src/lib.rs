//! Momo-Verify HTTP API Service.
//!
//! This crate provides the HTTP API for momo-verify:
//!
//! - SMS notification ingestion (webhook)
//! - Payment verification queries
//! - Health check
//!
//! Incoming SMS webhooks can optionally be authenticated with an
//! HMAC-SHA256 signature shared with the forwarding gateway.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for routing

pub mod config;
pub mod crypto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
