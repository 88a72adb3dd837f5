//! Namespaced key-value store layer.
//!
//! The [`KvStore`] trait is the single seam between the domain logic and the
//! backing medium (file tree, embedded database, browser storage). Collections
//! are persisted as one JSON envelope per namespaced key via
//! [`CollectionStore`].

mod collection;
mod keys;
mod memory;
mod traits;

pub use collection::{CollectionSnapshot, CollectionStore};
pub use keys::collection_key;
pub use memory::MemoryStore;
pub use traits::KvStore;
