//! `RocksDB` storage layer for momo-verify.
//!
//! This crate persists extracted payment records and answers transaction-id
//! lookups using `RocksDB` with column families.
//!
//! # Architecture
//!
//! - `payments`: primary records, keyed by a time-ordered ULID assigned at
//!   insertion, CBOR-encoded values
//! - `payments_by_txid`: index keyed by `lowercase(txid) || 0x00 || ulid`,
//!   empty values
//!
//! Lookups are case-insensitive and accept the claimed id as an exact match
//! or a prefix of a stored id. When several records share a txid, the most
//! recently inserted one wins (see [`Store::find_by_txid`]).
//!
//! # Example
//!
//! ```no_run
//! use momo_verify_store::{RocksStore, Store};
//! use momo_verify_core::extract;
//!
//! let store = RocksStore::open("/tmp/momo-verify-db").unwrap();
//!
//! if let Some(record) = extract("*161*TxId:998877*R*You have received 5,000 RWF ...") {
//!     store.insert_payment(&record).unwrap();
//! }
//!
//! let found = store.find_by_txid("998877").unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use momo_verify_core::PaymentRecord;

/// The storage trait defining the operations the engine needs.
///
/// This trait abstracts the storage layer, allowing the `RocksDB` backend to
/// be substituted with another implementation in tests.
pub trait Store: Send + Sync {
    /// Append a payment record.
    ///
    /// Writes are append-only; no upsert semantics. Records with an empty
    /// `txid` are rejected — such a record must never be persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTxid` for a record without a transaction
    /// id, or a database error if the write fails.
    fn insert_payment(&self, record: &PaymentRecord) -> Result<()>;

    /// Look up a payment record by claimed transaction id.
    ///
    /// Matching is case-insensitive; the claimed id matches a stored record
    /// whose `txid` equals it or starts with it. When several records
    /// qualify, exact matches outrank prefix matches and the most recently
    /// inserted record wins within a rank, ranked by the time-ordered
    /// insertion key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_by_txid(&self, txid: &str) -> Result<Option<PaymentRecord>>;
}
