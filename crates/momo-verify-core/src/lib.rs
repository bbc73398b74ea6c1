//! Core extraction and verification logic for momo-verify.
//!
//! This crate provides the domain logic shared by the service and client:
//!
//! - **Records**: [`PaymentRecord`], the structured form of a mobile-money
//!   SMS notification
//! - **Extraction**: [`extract()`] and the per-field functions in the
//!   [`extract`](mod@extract) module that pull fields out of raw SMS text
//! - **Verification**: [`evaluate`] and the matching rules used to decide
//!   whether a payment claim is approved
//!
//! Everything here is pure and synchronous; storage and HTTP live in the
//! `momo-verify-store` and `momo-verify-service` crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extract;
pub mod record;
pub mod verify;

pub use extract::{
    extract, extract_amount_rwf, extract_payer_name, extract_phone_suffix, extract_txid,
};
pub use record::PaymentRecord;
pub use verify::{evaluate, name_matches, phone_suffix_matches, RejectionReason, Verification};
