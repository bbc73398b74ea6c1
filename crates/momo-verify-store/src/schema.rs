//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary payment records, keyed by insertion ULID.
    pub const PAYMENTS: &str = "payments";

    /// Index: payments by transaction id, keyed by
    /// `lowercase(txid) || 0x00 || ulid`. Value is empty (index only).
    pub const PAYMENTS_BY_TXID: &str = "payments_by_txid";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::PAYMENTS, cf::PAYMENTS_BY_TXID]
}
