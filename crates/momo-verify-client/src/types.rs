//! Request and response types for the momo-verify API.

use serde::{Deserialize, Serialize};

use momo_verify_core::PaymentRecord;

/// SMS submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct SmsSubmission {
    /// The raw SMS text.
    pub message: String,
}

/// Outcome of submitting an SMS to the ingestion webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    /// A transaction id was found and the record was persisted.
    Saved {
        /// The extracted record as stored.
        data: PaymentRecord,
    },
    /// No transaction id was found; the message was skipped.
    Ignored {
        /// Why the message was skipped.
        reason: String,
    },
}

/// Verification claim payload.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationClaim {
    /// Claimed payer name.
    pub name: String,
    /// Claimed phone number.
    pub phone_number: String,
    /// Claimed transaction id.
    pub txid: String,
}

/// Outcome of a payment-verification claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The claim matched a stored payment.
    Approved {
        /// Human-readable confirmation.
        message: String,
        /// Recorded amount in Rwandan Francs.
        amount_rwf: u64,
        /// Transaction id as stored.
        txid: String,
    },
    /// The claim did not match.
    NotApproved {
        /// Human-readable reason.
        message: String,
    },
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// Structured API error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
