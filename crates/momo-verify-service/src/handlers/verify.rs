//! Payment verification handler.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use momo_verify_core::{evaluate, RejectionReason, Verification};
use momo_verify_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// Verification claim submitted by a payer.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Claimed payer name.
    pub name: String,
    /// Claimed phone number.
    pub phone_number: String,
    /// Claimed transaction id.
    pub txid: String,
}

/// Verification outcome on the wire.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerifyResponse {
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

fn not_approved(reason: RejectionReason) -> VerifyResponse {
    VerifyResponse::NotApproved {
        message: reason.to_string(),
    }
}

/// Decide a payment-verification claim.
///
/// Missing fields are a client error (400); an unmatched claim is a normal
/// outcome (200 with `status: not_approved`). Only store failures surface
/// as server errors.
pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Result<(StatusCode, Json<VerifyResponse>), ApiError> {
    let name = body.name.trim();
    let phone = body.phone_number.trim();
    let txid = body.txid.trim();

    if name.is_empty() || phone.is_empty() || txid.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(not_approved(RejectionReason::MissingFields)),
        ));
    }

    let Some(record) = state.store.find_by_txid(txid)? else {
        tracing::debug!(txid = %txid, "Verification claim for unknown txid");
        return Ok((
            StatusCode::OK,
            Json(not_approved(RejectionReason::TxidNotFound)),
        ));
    };

    let response = match evaluate(&record, name, phone) {
        Verification::Approved { txid, amount_rwf } => {
            tracing::info!(txid = %txid, amount_rwf = %amount_rwf, "Payment verified");
            VerifyResponse::Approved {
                message: "Payment verified.".into(),
                amount_rwf,
                txid,
            }
        }
        Verification::NotApproved { reason } => {
            tracing::debug!(txid = %record.txid, reason = %reason, "Claim not approved");
            not_approved(reason)
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
