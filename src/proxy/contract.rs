//! DataProxy - the abstract CRUD contract stores implement.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::Record;

/// Synchronous CRUD contract for a service data proxy.
///
/// An in-memory store implements this the same way a real backend-facing
/// proxy would, so one can be substituted for the other in tests and
/// prototypes.
pub trait DataProxy<R: Record>: Send + Sync {
    /// Returns an isolated snapshot of every stored record, in no
    /// guaranteed order.
    fn get_all(&self) -> Result<Vec<R>, StoreError>;

    /// Returns the record with the given identity, or `NotFound`.
    fn get_by_id(&self, id: &R::Key) -> Result<R, StoreError>;

    /// Assigns the next identity and stores the record. Any identity the
    /// caller set on the input is overwritten.
    fn insert(&self, record: R) -> Result<R, StoreError>;

    /// Replaces the stored record carrying the same identity, or fails
    /// with `NotFound`.
    fn update(&self, record: R) -> Result<R, StoreError>;

    /// Removes the record with the given identity. Deleting an absent
    /// identity is not an error.
    fn delete(&self, id: &R::Key) -> Result<(), StoreError>;

    /// Whether multiple operations can be grouped atomically.
    fn supports_transactions(&self) -> bool {
        false
    }

    /// Whether calls are expected to incur I/O latency. Callers branch on
    /// this flag to choose between the sync and async call paths.
    fn is_latency_prone(&self) -> bool {
        false
    }
}

/// Suspend-capable counterpart to [`DataProxy`].
///
/// Semantics, error conditions, ordering, and atomicity are identical to
/// the synchronous form; this trait exists for callers that must not
/// block a scheduling thread.
#[async_trait]
pub trait AsyncDataProxy<R: Record>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<R>, StoreError>;
    async fn get_by_id(&self, id: &R::Key) -> Result<R, StoreError>;
    async fn insert(&self, record: R) -> Result<R, StoreError>;
    async fn update(&self, record: R) -> Result<R, StoreError>;
    async fn delete(&self, id: &R::Key) -> Result<(), StoreError>;
}

// Every synchronous proxy is usable from async callers. The in-memory
// stores perform no I/O, so these complete immediately; a backend-facing
// implementation would provide its own non-blocking impl instead.
#[async_trait]
impl<R: Record, T: DataProxy<R>> AsyncDataProxy<R> for T {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        DataProxy::get_all(self)
    }

    async fn get_by_id(&self, id: &R::Key) -> Result<R, StoreError> {
        DataProxy::get_by_id(self, id)
    }

    async fn insert(&self, record: R) -> Result<R, StoreError> {
        DataProxy::insert(self, record)
    }

    async fn update(&self, record: R) -> Result<R, StoreError> {
        DataProxy::update(self, record)
    }

    async fn delete(&self, id: &R::Key) -> Result<(), StoreError> {
        DataProxy::delete(self, id)
    }
}
