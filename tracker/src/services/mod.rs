//! Service implementations
//!
//! Real implementations of the durable medium trait.

pub mod file_store;
pub mod memory_store;

// Re-export all service implementations
pub use file_store::RealFileStore;
pub use memory_store::InMemoryStore;
