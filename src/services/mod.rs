// Service exports
pub mod accounts;
pub mod browse;
pub mod file;
pub mod memory;
pub mod profile_store;
pub mod redis_store;
pub mod store;

pub use browse::{BrowseService, SessionError, SwipeSettings};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use profile_store::{load_pool_file, ProfileStore, StoreKey};
pub use redis_store::RedisStore;
pub use store::{Backend, KeyValueStore, StoreError};
