pub mod disk;
pub mod interface;
pub mod memory;
pub mod naming;

pub use disk::DiskStore;
pub use interface::{AudioStore, StorageError, TTS_URL_PREFIX};
pub use memory::MemoryStore;
