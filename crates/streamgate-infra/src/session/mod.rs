//! Session store implementations.

mod memory;

pub use memory::MemorySessionStore;
