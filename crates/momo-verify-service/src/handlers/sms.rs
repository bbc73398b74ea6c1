//! SMS ingestion webhook handler.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use momo_verify_core::{extract, PaymentRecord};
use momo_verify_store::Store;

use crate::crypto::{constant_time_eq, hmac_sha256_hex};
use crate::error::ApiError;
use crate::state::AppState;

/// Inbound SMS payload forwarded by the gateway.
#[derive(Debug, Deserialize)]
pub struct SmsPayload {
    /// The raw SMS text.
    pub message: String,
}

/// Ingestion outcome.
///
/// A message without a transaction id is a valid no-op, not an error: the
/// gateway forwards every SMS it sees and most are not payment
/// notifications.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestResponse {
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

/// Handle an inbound SMS webhook.
pub async fn receive_sms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<IngestResponse>, ApiError> {
    // Verify the gateway signature when a secret is configured.
    if let Some(secret) = &state.config.webhook_secret {
        let signature = headers
            .get("x-sms-signature")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::BadRequest("Missing SMS signature".into()))?;

        verify_sms_signature(&body, signature, secret).map_err(|e| {
            tracing::warn!(error = %e, "Invalid SMS webhook signature");
            ApiError::BadRequest("Invalid webhook signature".into())
        })?;
    }

    let payload: SmsPayload =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Missing 'message'".into()));
    }

    let Some(record) = extract(message) else {
        tracing::debug!("No transaction id in message, ignoring");
        return Ok(Json(IngestResponse::Ignored {
            reason: "TxId not found in message.".into(),
        }));
    };

    state.store.insert_payment(&record)?;

    tracing::info!(
        txid = %record.txid,
        amount_rwf = %record.amount_rwf,
        "Payment notification saved"
    );

    Ok(Json(IngestResponse::Saved { data: record }))
}

/// Verify the gateway's HMAC-SHA256 signature over the raw request body.
fn verify_sms_signature(body: &str, signature: &str, secret: &str) -> Result<(), String> {
    let expected = hmac_sha256_hex(secret, body);

    // Use constant-time comparison to prevent timing attacks
    if constant_time_eq(&expected, signature) {
        Ok(())
    } else {
        Err("Signature mismatch".into())
    }
}
