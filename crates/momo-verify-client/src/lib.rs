//! Momo-Verify Client SDK.
//!
//! This crate provides a client library for frontends and gateway bridges
//! to interact with the momo-verify API.
//!
//! # Example
//!
//! ```no_run
//! use momo_verify_client::{MomoVerifyClient, VerificationOutcome};
//!
//! # async fn example() -> Result<(), momo_verify_client::ClientError> {
//! let client = MomoVerifyClient::new("http://momo-verify.payments.svc:8080");
//!
//! let outcome = client
//!     .verify_payment("Jane Smith", "0788888321", "998877")
//!     .await?;
//!
//! match outcome {
//!     VerificationOutcome::Approved { amount_rwf, .. } => {
//!         println!("Payment verified: {amount_rwf} RWF");
//!     }
//!     VerificationOutcome::NotApproved { message } => {
//!         println!("Not approved: {message}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, MomoVerifyClient};
pub use error::ClientError;
pub use types::*;
