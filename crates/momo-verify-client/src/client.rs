//! Momo-Verify HTTP client implementation.

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, HealthStatus, IngestOutcome, SmsSubmission, VerificationClaim,
    VerificationOutcome,
};

type HmacSha256 = Hmac<Sha256>;

/// Momo-Verify API client.
///
/// Provides methods for forwarding SMS messages and verifying payments.
#[derive(Debug, Clone)]
pub struct MomoVerifyClient {
    client: Client,
    base_url: String,
    webhook_secret: Option<String>,
}

/// Options for constructing a [`MomoVerifyClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,

    /// Shared secret for signing SMS submissions (optional).
    ///
    /// When set, each `submit_sms` request carries an `x-sms-signature`
    /// header containing the hex HMAC-SHA256 of the request body.
    pub webhook_secret: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            webhook_secret: None,
        }
    }
}

impl MomoVerifyClient {
    /// Create a new momo-verify client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the momo-verify service
    ///   (e.g., `"http://momo-verify:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new momo-verify client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            webhook_secret: options.webhook_secret,
        }
    }

    /// Submit a raw SMS message to the ingestion webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn submit_sms(
        &self,
        message: impl Into<String>,
    ) -> Result<IngestOutcome, ClientError> {
        let url = format!("{}/webhooks/sms", self.base_url);
        let body = serde_json::to_string(&SmsSubmission {
            message: message.into(),
        })?;

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        // The signature covers the exact serialized body.
        if let Some(secret) = &self.webhook_secret {
            request = request.header("x-sms-signature", hmac_sha256_hex(secret, &body));
        }

        let response = request.body(body).send().await?;
        tracing::debug!(status = %response.status(), "SMS submitted");

        Self::handle_response(response).await
    }

    /// Submit a payment-verification claim.
    ///
    /// An unmatched claim is a normal outcome
    /// ([`VerificationOutcome::NotApproved`]), not an error. The server uses
    /// the same outcome shape for missing-field rejections, so those are
    /// surfaced the same way.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// unrecognized error response.
    pub async fn verify_payment(
        &self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        txid: impl Into<String>,
    ) -> Result<VerificationOutcome, ClientError> {
        let url = format!("{}/v1/verify-payment", self.base_url);
        let claim = VerificationClaim {
            name: name.into(),
            phone_number: phone_number.into(),
            txid: txid.into(),
        };

        let response = self.client.post(&url).json(&claim).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if let Ok(outcome) = serde_json::from_slice::<VerificationOutcome>(&bytes) {
            return Ok(outcome);
        }

        Err(Self::api_error(status.as_u16(), &bytes))
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server is unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Parse a response, mapping non-success statuses to [`ClientError::Api`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(Self::api_error(status.as_u16(), &bytes))
        }
    }

    fn api_error(status: u16, bytes: &[u8]) -> ClientError {
        match serde_json::from_slice::<ApiErrorResponse>(bytes) {
            Ok(body) => ClientError::Api {
                code: body.error.code,
                message: body.error.message,
                status,
            },
            Err(_) => ClientError::Api {
                code: "unknown".to_string(),
                message: String::from_utf8_lossy(bytes).into_owned(),
                status,
            },
        }
    }
}

/// Compute HMAC-SHA256 and return the hex-encoded result.
fn hmac_sha256_hex(secret: &str, message: &str) -> String {
    // HMAC-SHA256 accepts keys of any size per RFC 2104, so this cannot
    // fail at runtime.
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC-SHA256 accepts any key size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
