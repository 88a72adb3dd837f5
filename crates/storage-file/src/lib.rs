//! File-backed key-value storage for the finapp core.
//!
//! Implements `finapp_core::store::KvStore` over a directory of JSON
//! documents, one file per key. Writes are atomic (temp file + rename) so a
//! crash mid-write never leaves a half-written document behind.

mod file_store;

pub use file_store::FileStore;
