//! Verification matching rules.
//!
//! Upstream SMS text truncates and partially masks names and phone numbers,
//! so exact equality would reject legitimate payments. The rules here trade
//! strictness for usability: case-insensitive substring matching on the
//! name and last-2/last-3 suffix matching on the phone number.

use std::fmt;

use crate::PaymentRecord;

/// Why a verification claim was not approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// One or more of name, phone number, and txid were empty after trimming.
    MissingFields,
    /// No stored record matched the claimed transaction id.
    TxidNotFound,
    /// The claimed name does not appear within the recorded payer name.
    NameMismatch,
    /// The recorded phone suffix matches neither the last 2 nor the last 3
    /// characters of the claimed phone number.
    PhoneMismatch,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingFields => "name, phone_number, and txid are required.",
            Self::TxidNotFound => "TxId not found.",
            Self::NameMismatch => "Name does not match.",
            Self::PhoneMismatch => "Phone digits do not match.",
        };
        f.write_str(message)
    }
}

/// Outcome of matching a payment claim against a stored record.
///
/// Both variants are terminal; verification is a pure function over store
/// state with no intermediate states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The claim matched; carries the recorded amount and transaction id.
    Approved {
        /// Transaction id as stored.
        txid: String,
        /// Recorded amount in Rwandan Francs.
        amount_rwf: u64,
    },
    /// The claim did not match.
    NotApproved {
        /// Why the claim was rejected.
        reason: RejectionReason,
    },
}

/// Match a claim against a stored record.
///
/// The caller is responsible for trimming inputs and for rejecting empty
/// ones (`RejectionReason::MissingFields`) before the store lookup; this
/// function implements the name and phone checks against a record that was
/// found.
#[must_use]
pub fn evaluate(record: &PaymentRecord, claimed_name: &str, claimed_phone: &str) -> Verification {
    if !name_matches(&record.payer_name, claimed_name) {
        return Verification::NotApproved {
            reason: RejectionReason::NameMismatch,
        };
    }

    if !phone_suffix_matches(&record.phone_last_digits, claimed_phone) {
        return Verification::NotApproved {
            reason: RejectionReason::PhoneMismatch,
        };
    }

    Verification::Approved {
        txid: record.txid.clone(),
        amount_rwf: record.amount_rwf,
    }
}

/// Case-insensitive substring match of the claimed name within the recorded
/// payer name.
///
/// An empty recorded name fails closed: extraction could not establish who
/// paid, so no claimed name can match it.
#[must_use]
pub fn name_matches(recorded: &str, claimed: &str) -> bool {
    let recorded = recorded.trim();
    if recorded.is_empty() {
        return false;
    }

    recorded
        .to_lowercase()
        .contains(&claimed.trim().to_lowercase())
}

/// Match the recorded masked-phone suffix against the claimed phone number.
///
/// An empty recorded suffix is vacuously satisfied: a missing suffix in the
/// stored record does not block approval. Otherwise the suffix must equal
/// either the last 2 or the last 3 characters of the claimed number.
#[must_use]
pub fn phone_suffix_matches(recorded: &str, claimed: &str) -> bool {
    let recorded = recorded.trim();
    if recorded.is_empty() {
        return true;
    }

    let claimed = claimed.trim();
    recorded == last_chars(claimed, 2) || recorded == last_chars(claimed, 3)
}

/// The final `n` characters of `s`, or all of `s` when shorter.
fn last_chars(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    let mut indices = s.char_indices().skip(len.saturating_sub(n));
    indices.next().map_or(s, |(i, _)| &s[i..])
}
