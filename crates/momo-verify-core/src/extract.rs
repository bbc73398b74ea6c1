//! Field extraction from raw mobile-money SMS text.
//!
//! Each field is extracted by an independent pure function that scans the
//! full message. The message is treated as an opaque string loosely
//! following a known vendor template: extra spaces, masked digits, and
//! alternate field order must all be tolerated. A field that fails to match
//! reports its default value; only a missing transaction id rejects the
//! whole message.

use chrono::Utc;

use crate::PaymentRecord;

/// Lazily compile a regex literal, caching it for the life of the process.
macro_rules! cached_regex {
    ($pattern:literal) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        // Pattern literals are fixed at compile time, so compilation cannot
        // fail at runtime.
        RE.get_or_init(|| regex::Regex::new($pattern).expect("valid regex literal"))
    }};
}

/// Extract a structured [`PaymentRecord`] from raw SMS text.
///
/// Returns `None` when no transaction id can be located; this is the only
/// hard failure. Every other field degrades to empty or zero instead.
/// `received_at` is stamped with the current UTC time — it reflects
/// ingestion, not the transaction time embedded in the message.
#[must_use]
pub fn extract(raw_text: &str) -> Option<PaymentRecord> {
    let txid = extract_txid(raw_text)?;

    Some(PaymentRecord {
        raw_text: raw_text.to_string(),
        txid,
        amount_rwf: extract_amount_rwf(raw_text),
        payer_name: extract_payer_name(raw_text),
        phone_last_digits: extract_phone_suffix(raw_text),
        received_at: Utc::now(),
    })
}

/// Extract the transaction identifier.
///
/// Tries `TxId` followed by optional separators and an alphanumeric token
/// (letters, digits, dots, dashes) first, then the structured
/// `*<code>*TxId:<token>*` form. First match wins.
#[must_use]
pub fn extract_txid(text: &str) -> Option<String> {
    let plain = cached_regex!(r"(?i)TxId[:\s]*([A-Za-z0-9.\-]+)");
    let structured = cached_regex!(r"(?i)\*\d+\*TxId:([A-Za-z0-9.\-]+)\*");

    plain
        .captures(text)
        .or_else(|| structured.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|txid| !txid.is_empty())
}

/// Extract the amount in Rwandan Francs as an integer.
///
/// Accepts an optionally comma-grouped number before or after the `RWF`
/// currency code, case-insensitively. Grouping commas are stripped before
/// parsing. Absence or any parse failure yields 0, never an error.
#[must_use]
pub fn extract_amount_rwf(text: &str) -> u64 {
    let amount_then_code = cached_regex!(r"(?i)(\d{1,3}(?:,\d{3})*|\d+)\s*RWF");
    let code_then_amount = cached_regex!(r"(?i)RWF\s*(\d{1,3}(?:,\d{3})*|\d+)");

    amount_then_code
        .captures(text)
        .or_else(|| code_then_amount.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Extract the payer name: the words between `from` and the opening
/// parenthesis of the masked phone number. Defaults to empty.
#[must_use]
pub fn extract_payer_name(text: &str) -> String {
    cached_regex!(r"(?i)from\s+([A-Za-z][A-Za-z ]+?)\s*\(")
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Extract the visible 2-3 digit suffix of a masked phone number rendered
/// as a parenthesized group like `(07****321)`. Defaults to empty.
#[must_use]
pub fn extract_phone_suffix(text: &str) -> String {
    cached_regex!(r"\((?:[*\d]*?)(\d{2,3})\)")
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
