//! `RocksDB` storage implementation.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};
use ulid::Ulid;

use momo_verify_core::PaymentRecord;

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl Store for RocksStore {
    fn insert_payment(&self, record: &PaymentRecord) -> Result<()> {
        if record.txid.trim().is_empty() {
            return Err(StoreError::EmptyTxid);
        }

        let cf_payments = self.cf(cf::PAYMENTS)?;
        let cf_index = self.cf(cf::PAYMENTS_BY_TXID)?;

        let id = Ulid::new();
        let value = Self::serialize(record)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_payments, keys::payment_key(&id), &value);
        batch.put_cf(&cf_index, keys::txid_index_key(&record.txid, &id), []);

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(txid = %record.txid, amount_rwf = %record.amount_rwf, "payment stored");

        Ok(())
    }

    fn find_by_txid(&self, txid: &str) -> Result<Option<PaymentRecord>> {
        let claimed = txid.trim();
        if claimed.is_empty() {
            return Ok(None);
        }

        let cf_index = self.cf(cf::PAYMENTS_BY_TXID)?;
        let prefix = keys::txid_index_prefix(claimed);

        let iter = self.db.iterator_cf(
            &cf_index,
            IteratorMode::From(&prefix, Direction::Forward),
        );

        // Rank candidates: an exact txid match outranks a prefix match, and
        // within a rank the largest (most recent) insertion ULID wins.
        let mut best: Option<(bool, Ulid)> = None;
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            if !key.starts_with(&prefix) {
                break;
            }

            let Some((stored_txid, id)) = keys::split_txid_index_key(&key) else {
                continue;
            };

            let exact = stored_txid == prefix.as_slice();
            let better = match best {
                None => true,
                Some((best_exact, best_id)) => {
                    (exact && !best_exact) || (exact == best_exact && id > best_id)
                }
            };
            if better {
                best = Some((exact, id));
            }
        }

        let Some((_, id)) = best else {
            return Ok(None);
        };

        let cf_payments = self.cf(cf::PAYMENTS)?;
        self.db
            .get_cf(&cf_payments, keys::payment_key(&id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn record(txid: &str, payer_name: &str, amount_rwf: u64) -> PaymentRecord {
        PaymentRecord {
            raw_text: format!("TxId:{txid} received {amount_rwf} RWF from {payer_name} (**21)"),
            txid: txid.to_string(),
            amount_rwf,
            payer_name: payer_name.to_string(),
            phone_last_digits: "21".to_string(),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_find_roundtrip() {
        let (store, _dir) = create_test_store();
        let rec = record("998877", "Jane Smith", 5000);

        store.insert_payment(&rec).unwrap();

        let found = store.find_by_txid("998877").unwrap().unwrap();
        assert_eq!(found, rec);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (store, _dir) = create_test_store();
        store.insert_payment(&record("AbC123", "Alice", 100)).unwrap();

        let found = store.find_by_txid("abc123").unwrap().unwrap();
        assert_eq!(found.txid, "AbC123");

        let found = store.find_by_txid("ABC123").unwrap().unwrap();
        assert_eq!(found.txid, "AbC123");
    }

    #[test]
    fn lookup_trims_claimed_id() {
        let (store, _dir) = create_test_store();
        store.insert_payment(&record("T1", "Alice", 100)).unwrap();

        assert!(store.find_by_txid("  T1  ").unwrap().is_some());
    }

    #[test]
    fn duplicate_txid_returns_most_recent_insert() {
        let (store, _dir) = create_test_store();

        store.insert_payment(&record("DUP", "First", 100)).unwrap();
        // ULIDs are generated at insert time; sleep to guarantee distinct
        // timestamps and therefore deterministic ordering.
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.insert_payment(&record("DUP", "Second", 200)).unwrap();

        let found = store.find_by_txid("DUP").unwrap().unwrap();
        assert_eq!(found.payer_name, "Second");
        assert_eq!(found.amount_rwf, 200);
    }

    #[test]
    fn claimed_prefix_matches_longer_stored_txid() {
        let (store, _dir) = create_test_store();
        store.insert_payment(&record("998877", "Jane", 5000)).unwrap();

        let found = store.find_by_txid("9988").unwrap().unwrap();
        assert_eq!(found.txid, "998877");
    }

    #[test]
    fn exact_match_outranks_prefix_match() {
        let (store, _dir) = create_test_store();

        // The longer txid is inserted later; the exact match must still win.
        store.insert_payment(&record("9988", "Exact", 100)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.insert_payment(&record("998877", "Prefix", 200)).unwrap();

        let found = store.find_by_txid("9988").unwrap().unwrap();
        assert_eq!(found.payer_name, "Exact");
    }

    #[test]
    fn stored_txid_shorter_than_claim_does_not_match() {
        let (store, _dir) = create_test_store();
        store.insert_payment(&record("99", "Short", 100)).unwrap();

        assert!(store.find_by_txid("998877").unwrap().is_none());
    }

    #[test]
    fn unknown_txid_returns_none() {
        let (store, _dir) = create_test_store();
        assert!(store.find_by_txid("missing").unwrap().is_none());
    }

    #[test]
    fn empty_claimed_txid_returns_none() {
        let (store, _dir) = create_test_store();
        store.insert_payment(&record("T1", "Alice", 100)).unwrap();

        assert!(store.find_by_txid("").unwrap().is_none());
        assert!(store.find_by_txid("   ").unwrap().is_none());
    }

    #[test]
    fn empty_txid_record_is_rejected() {
        let (store, _dir) = create_test_store();
        let mut rec = record("T1", "Alice", 100);
        rec.txid = String::new();

        let result = store.insert_payment(&rec);
        assert!(matches!(result, Err(StoreError::EmptyTxid)));
    }
}
