use std::marker::PhantomData;
use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::SessionTrait;
use crate::constants::COLLECTION_SCHEMA_VERSION;
use crate::errors::{AuthError, Result, StoreError};

use super::keys::collection_key;
use super::traits::KvStore;

/// Persisted envelope wrapping a collection's records.
///
/// `schemaVersion` allows future format migrations; `revision` is an
/// optimistic write counter guarding against a second writer (another
/// process/tab) silently overwriting this one's changes.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionEnvelope<T> {
    schema_version: u32,
    revision: u64,
    records: Vec<T>,
}

/// A collection's records together with the revision they were read at.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot<T> {
    pub records: Vec<T>,
    pub revision: u64,
}

impl<T> CollectionSnapshot<T> {
    fn empty() -> Self {
        CollectionSnapshot {
            records: Vec::new(),
            revision: 0,
        }
    }
}

/// Persists one ordered record collection under one namespaced key.
///
/// Every mutation re-serializes the entire collection; there is no partial
/// write. The key is resolved per call from the active session, so all
/// access is gated on a logged-in user.
pub struct CollectionStore<T> {
    store: Arc<dyn KvStore>,
    session: Arc<dyn SessionTrait>,
    namespace: String,
    collection: &'static str,
    _marker: PhantomData<T>,
}

impl<T> CollectionStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(
        store: Arc<dyn KvStore>,
        session: Arc<dyn SessionTrait>,
        namespace: &str,
        collection: &'static str,
    ) -> Self {
        CollectionStore {
            store,
            session,
            namespace: namespace.to_string(),
            collection,
            _marker: PhantomData,
        }
    }

    fn key(&self) -> Result<String> {
        let username = self
            .session
            .current_user()
            .ok_or(AuthError::NotAuthenticated)?;
        Ok(collection_key(&self.namespace, &username, self.collection))
    }

    /// Loads the current user's collection, or an empty snapshot if absent.
    ///
    /// Malformed stored data is logged and treated as an empty collection; a
    /// schema version newer than this build understands is an error.
    pub fn load(&self) -> Result<CollectionSnapshot<T>> {
        let key = self.key()?;
        match self.store.get(&key)? {
            None => Ok(CollectionSnapshot::empty()),
            Some(value) => decode(&key, value),
        }
    }

    /// Persists `records` as the new content of the collection.
    ///
    /// `expected_revision` must be the revision observed at load time; if the
    /// stored revision differs, another writer got there first and the save
    /// fails with [`StoreError::RevisionConflict`]. Returns the new revision.
    pub fn save(&self, records: Vec<T>, expected_revision: u64) -> Result<u64> {
        let key = self.key()?;
        let found = self.stored_revision(&key)?;
        if found != expected_revision {
            return Err(StoreError::RevisionConflict {
                key,
                expected: expected_revision,
                found,
            }
            .into());
        }

        let envelope = CollectionEnvelope {
            schema_version: COLLECTION_SCHEMA_VERSION,
            revision: expected_revision + 1,
            records,
        };
        let value = serde_json::to_value(&envelope).map_err(|e| StoreError::Serialization {
            key: key.clone(),
            message: e.to_string(),
        })?;
        self.store.set(&key, value)?;
        Ok(envelope.revision)
    }

    /// Reads the revision currently persisted under `key`.
    ///
    /// Reads the raw `revision` field exactly as [`decode`] does, so a
    /// snapshot from [`Self::load`] always passes the conflict check even
    /// when the stored records were unreadable. Absent keys and legacy bare
    /// arrays count as revision 0.
    fn stored_revision(&self, key: &str) -> Result<u64> {
        match self.store.get(key)? {
            Some(value) => Ok(value
                .get("revision")
                .and_then(Value::as_u64)
                .unwrap_or(0)),
            None => Ok(0),
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<CollectionSnapshot<T>> {
    // Legacy format: the original application stored the bare record array.
    if value.is_array() {
        return match serde_json::from_value::<Vec<T>>(value) {
            Ok(records) => Ok(CollectionSnapshot {
                records,
                revision: 0,
            }),
            Err(e) => {
                warn!("Malformed legacy collection under '{}': {}", key, e);
                Ok(CollectionSnapshot::empty())
            }
        };
    }

    if let Some(version) = value.get("schemaVersion").and_then(Value::as_u64) {
        let version = version as u32;
        if version > COLLECTION_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchemaVersion {
                key: key.to_string(),
                version,
            }
            .into());
        }
    }

    // Read the raw revision up front: when the envelope itself fails to
    // decode, the reported revision must still match what the save-time
    // conflict check will find, or the collection could never be rewritten.
    let raw_revision = value.get("revision").and_then(Value::as_u64).unwrap_or(0);

    match serde_json::from_value::<CollectionEnvelope<T>>(value) {
        Ok(envelope) => Ok(CollectionSnapshot {
            records: envelope.records,
            revision: envelope.revision,
        }),
        Err(e) => {
            warn!("Malformed collection under '{}': {}", key, e);
            Ok(CollectionSnapshot {
                records: Vec::new(),
                revision: raw_revision,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    struct FixedSession(Option<String>);

    impl SessionTrait for FixedSession {
        fn current_user(&self) -> Option<String> {
            self.0.clone()
        }
    }

    fn store_for(user: &str) -> (Arc<MemoryStore>, CollectionStore<String>) {
        let kv = Arc::new(MemoryStore::new());
        let session = Arc::new(FixedSession(Some(user.to_string())));
        let collection =
            CollectionStore::new(kv.clone(), session, "finapp", "favorites");
        (kv, collection)
    }

    #[test]
    fn empty_when_absent() {
        let (_, collection) = store_for("alice");
        let snap = collection.load().unwrap();
        assert!(snap.records.is_empty());
        assert_eq!(snap.revision, 0);
    }

    #[test]
    fn save_then_load_round_trips_and_bumps_revision() {
        let (_, collection) = store_for("alice");
        let rev = collection
            .save(vec!["PETR4".to_string(), "VALE3".to_string()], 0)
            .unwrap();
        assert_eq!(rev, 1);

        let snap = collection.load().unwrap();
        assert_eq!(snap.records, vec!["PETR4", "VALE3"]);
        assert_eq!(snap.revision, 1);
    }

    #[test]
    fn stale_revision_is_a_conflict() {
        let (_, collection) = store_for("alice");
        collection.save(vec!["PETR4".to_string()], 0).unwrap();

        let err = collection.save(vec!["VALE3".to_string()], 0).unwrap_err();
        match err {
            crate::errors::Error::Store(StoreError::RevisionConflict {
                expected, found, ..
            }) => {
                assert_eq!(expected, 0);
                assert_eq!(found, 1);
            }
            other => panic!("expected revision conflict, got {other}"),
        }
    }

    #[test]
    fn legacy_bare_array_loads_at_revision_zero() {
        let (kv, collection) = store_for("alice");
        kv.set("finapp_alice_favorites", json!(["ITUB4"])).unwrap();

        let snap = collection.load().unwrap();
        assert_eq!(snap.records, vec!["ITUB4"]);
        assert_eq!(snap.revision, 0);

        // Saving upgrades the record to the envelope format.
        collection.save(snap.records, snap.revision).unwrap();
        let stored = kv.get("finapp_alice_favorites").unwrap().unwrap();
        assert_eq!(stored["schemaVersion"], json!(COLLECTION_SCHEMA_VERSION));
        assert_eq!(stored["revision"], json!(1));
    }

    #[test]
    fn malformed_document_loads_as_empty_and_can_be_rewritten() {
        let (kv, collection) = store_for("alice");
        kv.set("finapp_alice_favorites", json!({"schemaVersion": 1, "oops": true}))
            .unwrap();

        let snap = collection.load().unwrap();
        assert!(snap.records.is_empty());
        assert_eq!(snap.revision, 0);

        // The next save replaces the broken document with a valid envelope.
        collection.save(vec!["PETR4".to_string()], snap.revision).unwrap();
        let snap = collection.load().unwrap();
        assert_eq!(snap.records, vec!["PETR4"]);
    }

    #[test]
    fn malformed_records_keep_the_stored_revision_saveable() {
        // A document whose revision parses but whose records do not: the
        // loaded revision must match the save-time conflict check, so the
        // collection stays writable.
        let (kv, collection) = store_for("alice");
        kv.set(
            "finapp_alice_favorites",
            json!({"schemaVersion": 1, "revision": 5, "records": "oops"}),
        )
        .unwrap();

        let snap = collection.load().unwrap();
        assert!(snap.records.is_empty());
        assert_eq!(snap.revision, 5);

        let rev = collection
            .save(vec!["PETR4".to_string()], snap.revision)
            .unwrap();
        assert_eq!(rev, 6);

        let stored = kv.get("finapp_alice_favorites").unwrap().unwrap();
        assert_eq!(stored["schemaVersion"], json!(COLLECTION_SCHEMA_VERSION));
        assert_eq!(stored["records"], json!(["PETR4"]));
    }

    #[test]
    fn future_schema_version_is_an_error() {
        let (kv, collection) = store_for("alice");
        kv.set(
            "finapp_alice_favorites",
            json!({"schemaVersion": 99, "revision": 3, "records": []}),
        )
        .unwrap();

        let err = collection.load().unwrap_err();
        assert!(matches!(
            err,
            crate::errors::Error::Store(StoreError::UnsupportedSchemaVersion { version: 99, .. })
        ));
    }

    #[test]
    fn access_without_session_is_rejected() {
        let kv = Arc::new(MemoryStore::new());
        let session = Arc::new(FixedSession(None));
        let collection: CollectionStore<String> =
            CollectionStore::new(kv, session, "finapp", "favorites");

        assert!(matches!(
            collection.load().unwrap_err(),
            crate::errors::Error::Auth(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn users_are_isolated_by_namespaced_keys() {
        let kv = Arc::new(MemoryStore::new());
        let alice: CollectionStore<String> = CollectionStore::new(
            kv.clone(),
            Arc::new(FixedSession(Some("alice".into()))),
            "finapp",
            "favorites",
        );
        let bob: CollectionStore<String> = CollectionStore::new(
            kv,
            Arc::new(FixedSession(Some("bob".into()))),
            "finapp",
            "favorites",
        );

        alice.save(vec!["PETR4".to_string()], 0).unwrap();
        assert!(bob.load().unwrap().records.is_empty());
    }
}
