//! The payment record produced by extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured payment notification extracted from a raw SMS message.
///
/// A record is created exactly once per accepted ingestion call and is
/// immutable afterwards. The original message text is always retained for
/// auditability. Field names are part of the wire contract and must not be
/// renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The original SMS text, unmodified.
    pub raw_text: String,

    /// Vendor-assigned transaction identifier; the primary lookup key.
    ///
    /// A record with an empty `txid` is never persisted.
    pub txid: String,

    /// Amount received in Rwandan Francs. Zero when no amount could be
    /// parsed from the message.
    pub amount_rwf: u64,

    /// Name of the sender of funds as rendered in the SMS, possibly empty.
    pub payer_name: String,

    /// Trailing 2-3 visible digits of the masked sender phone number,
    /// possibly empty.
    pub phone_last_digits: String,

    /// When the message was ingested, not when the transaction occurred.
    pub received_at: DateTime<Utc>,
}
