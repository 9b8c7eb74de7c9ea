//! Records - Uniquely identified data held by a proxy.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can be stored in a data proxy.
///
/// A record is a plain data aggregate with a mandatory identity field.
/// The serde bounds double as the copy-isolation mechanism: records cross
/// the proxy boundary by serialization, never by shared reference.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Key type used as the record's identity. A key equal to
    /// `Key::default()` counts as "not supplied".
    type Key: Eq + Hash + Clone + Default + Debug + Send + Sync + 'static;

    /// Short type name used in log and error messages (e.g. "Person").
    const NAME: &'static str;

    /// Returns the record's identity.
    fn id(&self) -> Self::Key;

    /// Replaces the record's identity. Insert calls this with the
    /// identity computed by the store's next-ID policy.
    fn set_id(&mut self, id: Self::Key);
}

/// A record carrying an opaque version token for optimistic concurrency
/// control. Tokens are compared by equality on update.
pub trait VersionedRecord: Record {
    fn version(&self) -> &str;
    fn set_version(&mut self, version: String);
}
