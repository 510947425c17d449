//! Storage backends for the canonical record set.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStore;
pub use traits::RecordStore;
