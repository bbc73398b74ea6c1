//! Key encoding utilities for `RocksDB`.
//!
//! Payment records are keyed by a ULID assigned at insertion. ULIDs are
//! time-ordered, so iteration order over the primary column family is
//! insertion order, and the largest key under a txid prefix is the most
//! recent insert.

use ulid::Ulid;

/// Byte separating the lowercased txid from the ULID in index keys.
///
/// Extracted transaction ids only contain letters, digits, dots, and
/// dashes, so a NUL byte can never appear inside the txid portion.
const TXID_SEPARATOR: u8 = 0;

/// Create a primary payment key from an insertion ULID.
#[must_use]
pub fn payment_key(id: &Ulid) -> [u8; 16] {
    id.to_bytes()
}

/// Create a txid index key.
///
/// Format: `lowercase(txid) || 0x00 || ulid (16 bytes)`.
#[must_use]
pub fn txid_index_key(txid: &str, id: &Ulid) -> Vec<u8> {
    let txid = txid.to_lowercase();
    let mut key = Vec::with_capacity(txid.len() + 1 + 16);
    key.extend_from_slice(txid.as_bytes());
    key.push(TXID_SEPARATOR);
    key.extend_from_slice(&id.to_bytes());
    key
}

/// Create a prefix for iterating all index entries whose txid starts with
/// the claimed id (case-insensitively).
#[must_use]
pub fn txid_index_prefix(txid: &str) -> Vec<u8> {
    txid.to_lowercase().into_bytes()
}

/// Split a txid index key into its lowercased txid bytes and insertion ULID.
///
/// Returns `None` for keys that do not follow the index format.
#[must_use]
pub fn split_txid_index_key(key: &[u8]) -> Option<(&[u8], Ulid)> {
    // The ULID is a fixed 16-byte suffix, preceded by the separator.
    if key.len() < 17 {
        return None;
    }

    let sep = key.len() - 17;
    if key[sep] != TXID_SEPARATOR {
        return None;
    }

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&key[sep + 1..]);
    Some((&key[..sep], Ulid::from_bytes(bytes)))
}
