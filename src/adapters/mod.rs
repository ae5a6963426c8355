//! Destination-free adapters shipped with the crate: a discarding sink, an
//! in-memory buffer, and a fan-out combinator. Real destinations (files,
//! databases, the network) live with their owners and implement
//! [`LogAdapter`](crate::LogAdapter) the same way.

mod memory;
mod multi;
mod null;

pub use memory::MemoryAdapter;
pub use multi::MultiAdapter;
pub use null::NullAdapter;
