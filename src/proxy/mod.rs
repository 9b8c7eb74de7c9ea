//! Data proxies - CRUD stores behind the service data proxy contract.
//!
//! The in-memory stores here emulate a persistence layer for tests and
//! prototypes: same contract, same error conditions, no backend.
//!
//! ## Example
//!
//! ```ignore
//! use memproxy::{DataProxy, InMemoryDataProxy, Record};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Person {
//!     pub id: i32,
//!     pub name: String,
//! }
//!
//! impl Record for Person {
//!     type Key = i32;
//!     const NAME: &'static str = "Person";
//!     fn id(&self) -> i32 { self.id }
//!     fn set_id(&mut self, id: i32) { self.id = id; }
//! }
//!
//! let proxy = InMemoryDataProxy::new(
//!     seed_people(),
//!     Box::new(|keys: &[i32]| keys.iter().max().map_or(1, |max| max + 1)),
//! )?;
//! let person = proxy.get_by_id(&1)?;
//! ```

mod contract;
mod in_memory;
mod versioned;

pub use contract::{AsyncDataProxy, DataProxy};
pub use in_memory::InMemoryDataProxy;
pub use versioned::VersionedDataProxy;
