mod error;
mod policy;
mod proxy;
mod record;
mod rule;

pub use error::StoreError;
pub use policy::{keep_version, numeric_version, IncrementVersion, NextId};
pub use proxy::{AsyncDataProxy, DataProxy, InMemoryDataProxy, VersionedDataProxy};
pub use record::{Record, VersionedRecord};
pub use rule::ValueRequiredRule;
