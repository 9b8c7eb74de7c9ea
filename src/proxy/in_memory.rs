//! InMemoryDataProxy - HashMap-backed data proxy for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::StoreError;
use crate::policy::NextId;
use crate::record::Record;
use crate::rule::ValueRequiredRule;

use super::DataProxy;

/// In-memory data proxy backed by a HashMap.
///
/// Records are held serialized, so every value crossing the store
/// boundary is an independent copy: mutating anything handed out never
/// touches stored state. Reads share the lock; insert, update, delete,
/// and clear run under the write lock, which makes their read-check-write
/// sequences atomic.
pub struct InMemoryDataProxy<R: Record> {
    entries: Arc<RwLock<HashMap<R::Key, Vec<u8>>>>,
    next_id: NextId<R::Key>,
}

impl<R: Record> std::fmt::Debug for InMemoryDataProxy<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDataProxy").finish_non_exhaustive()
    }
}

impl<R: Record> InMemoryDataProxy<R> {
    /// Creates a store, loading and validating the seed records in the
    /// sequence's declared order.
    ///
    /// Every seed record must carry an explicitly supplied, unique
    /// identity. The first violation propagates as `InvalidSeed` or
    /// `DuplicateId` and no store is returned.
    pub fn new<I>(seed: I, next_id: NextId<R::Key>) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = R>,
    {
        let mut entries = HashMap::new();
        for record in seed {
            let id = record.id();
            let rule = ValueRequiredRule::new(&id, "ID");
            if !rule.validate() {
                return Err(StoreError::InvalidSeed {
                    record: R::NAME,
                    field: rule.field(),
                });
            }
            if entries.contains_key(&id) {
                return Err(StoreError::DuplicateId {
                    id: format!("{:?}", id),
                });
            }
            entries.insert(id, encode(&record)?);
        }
        Ok(Self {
            entries: Arc::new(RwLock::new(entries)),
            next_id,
        })
    }

    /// Atomically empties the store. Seed records are not reloaded.
    pub fn clear(&self) -> Result<(), StoreError> {
        debug!("executing {}.clear", R::NAME);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("clear"))?;
        entries.clear();
        Ok(())
    }

    /// Replaces the stored record with the same identity, running
    /// `prepare` inside the write critical section. `prepare` sees the
    /// stored record and may adjust the incoming one before it is
    /// persisted; an error from it leaves the store untouched.
    pub(crate) fn replace<F>(&self, mut record: R, prepare: F) -> Result<R, StoreError>
    where
        F: FnOnce(&R, &mut R) -> Result<(), StoreError>,
    {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let id = record.id();
        let existing: R = match entries.get(&id) {
            Some(bytes) => decode(bytes)?,
            None => {
                return Err(StoreError::NotFound {
                    id: format!("{:?}", id),
                })
            }
        };

        prepare(&existing, &mut record)?;
        entries.insert(id, encode(&record)?);
        Ok(record)
    }
}

impl<R: Record> DataProxy<R> for InMemoryDataProxy<R> {
    fn get_all(&self) -> Result<Vec<R>, StoreError> {
        debug!("executing {}.get_all", R::NAME);
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_all"))?;
        entries.values().map(|bytes| decode(bytes)).collect()
    }

    fn get_by_id(&self, id: &R::Key) -> Result<R, StoreError> {
        debug!("executing {}.get_by_id", R::NAME);
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_by_id"))?;
        match entries.get(id) {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::NotFound {
                id: format!("{:?}", id),
            }),
        }
    }

    fn insert(&self, mut record: R) -> Result<R, StoreError> {
        debug!("executing {}.insert", R::NAME);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        let occupied: Vec<R::Key> = entries.keys().cloned().collect();
        let next = (self.next_id)(&occupied);
        if entries.contains_key(&next) {
            // An occupied next ID means the injected policy is faulty.
            return Err(StoreError::DuplicateId {
                id: format!("{:?}", next),
            });
        }

        record.set_id(next.clone());
        entries.insert(next, encode(&record)?);
        Ok(record)
    }

    fn update(&self, record: R) -> Result<R, StoreError> {
        debug!("executing {}.update", R::NAME);
        self.replace(record, |_existing, _incoming| Ok(()))
    }

    fn delete(&self, id: &R::Key) -> Result<(), StoreError> {
        debug!("executing {}.delete", R::NAME);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;
        entries.remove(id);
        Ok(())
    }
}

fn encode<R: Record>(record: &R) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(record).map_err(|e| StoreError::Serde(e.to_string()))
}

fn decode<R: Record>(bytes: &[u8]) -> Result<R, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Gadget {
        id: u32,
        label: String,
    }

    impl Record for Gadget {
        type Key = u32;
        const NAME: &'static str = "Gadget";

        fn id(&self) -> u32 {
            self.id
        }

        fn set_id(&mut self, id: u32) {
            self.id = id;
        }
    }

    fn gadget(id: u32, label: &str) -> Gadget {
        Gadget {
            id,
            label: label.into(),
        }
    }

    fn sequential() -> NextId<u32> {
        Box::new(|keys| keys.iter().max().map_or(1, |max| max + 1))
    }

    #[test]
    fn seeds_and_reads_back() {
        let proxy =
            InMemoryDataProxy::new(vec![gadget(1, "widget"), gadget(2, "sprocket")], sequential())
                .unwrap();
        assert_eq!(proxy.get_all().unwrap().len(), 2);
        assert_eq!(proxy.get_by_id(&2).unwrap().label, "sprocket");
    }

    #[test]
    fn seed_without_id_is_rejected() {
        let err = InMemoryDataProxy::new(vec![gadget(0, "widget")], sequential()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSeed { .. }));
    }

    #[test]
    fn seed_with_duplicate_id_is_rejected() {
        let err = InMemoryDataProxy::new(
            vec![gadget(1, "widget"), gadget(1, "sprocket")],
            sequential(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
    }

    #[test]
    fn insert_assigns_sequential_ids_from_empty() {
        let proxy = InMemoryDataProxy::new(Vec::<Gadget>::new(), sequential()).unwrap();
        assert_eq!(proxy.insert(gadget(0, "widget")).unwrap().id, 1);
        assert_eq!(proxy.insert(gadget(0, "sprocket")).unwrap().id, 2);
    }

    #[test]
    fn failed_prepare_leaves_the_entry_untouched() {
        let proxy = InMemoryDataProxy::new(vec![gadget(1, "widget")], sequential()).unwrap();
        let err = proxy
            .replace(gadget(1, "sprocket"), |_existing, _incoming| {
                Err(StoreError::Serde("refused".into()))
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
        assert_eq!(proxy.get_by_id(&1).unwrap().label, "widget");
    }
}
