//! VersionedDataProxy - optimistic concurrency over the in-memory store.

use tracing::debug;

use crate::error::StoreError;
use crate::policy::{keep_version, IncrementVersion, NextId};
use crate::record::VersionedRecord;

use super::{DataProxy, InMemoryDataProxy};

/// In-memory data proxy that enforces optimistic concurrency on update.
///
/// Wraps the plain store and compares the incoming record's version token
/// against the stored one by equality. A mismatch fails the update and
/// leaves the store unmodified; on a match the configured
/// [`IncrementVersion`] policy rotates the token before the record is
/// persisted. The default policy keeps tokens unchanged.
pub struct VersionedDataProxy<R: VersionedRecord> {
    inner: InMemoryDataProxy<R>,
    increment_version: IncrementVersion,
}

impl<R: VersionedRecord> VersionedDataProxy<R> {
    /// Creates a version-checked store over the given seed records. Seed
    /// validation is identical to [`InMemoryDataProxy::new`].
    pub fn new<I>(seed: I, next_id: NextId<R::Key>) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = R>,
    {
        Ok(Self {
            inner: InMemoryDataProxy::new(seed, next_id)?,
            increment_version: keep_version(),
        })
    }

    /// Replaces the default no-op token policy.
    pub fn with_increment_version(mut self, policy: IncrementVersion) -> Self {
        self.increment_version = policy;
        self
    }

    /// Atomically empties the store. Seed records are not reloaded.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.inner.clear()
    }
}

impl<R: VersionedRecord> DataProxy<R> for VersionedDataProxy<R> {
    fn get_all(&self) -> Result<Vec<R>, StoreError> {
        self.inner.get_all()
    }

    fn get_by_id(&self, id: &R::Key) -> Result<R, StoreError> {
        self.inner.get_by_id(id)
    }

    fn insert(&self, record: R) -> Result<R, StoreError> {
        self.inner.insert(record)
    }

    fn update(&self, record: R) -> Result<R, StoreError> {
        debug!("executing {}.update with version check", R::NAME);
        self.inner.replace(record, |existing, incoming| {
            if existing.version() != incoming.version() {
                return Err(StoreError::VersionConflict {
                    record: R::NAME,
                    id: format!("{:?}", incoming.id()),
                });
            }
            incoming.set_version((self.increment_version)(incoming.version()));
            Ok(())
        })
    }

    fn delete(&self, id: &R::Key) -> Result<(), StoreError> {
        self.inner.delete(id)
    }
}
