pub mod bucket;
pub mod persistence;
pub mod store;

pub use bucket::{Bucket, DEFAULT_NAMESPACE};
pub use persistence::Persistence;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
