//! Durable storage backends.

mod atomic_toml;
mod memory_storage;
mod toml_local_storage;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
pub use memory_storage::MemoryStorage;
pub use toml_local_storage::TomlLocalStorage;
