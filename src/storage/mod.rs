//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

pub use in_memory::InMemorySubmissionStore;
#[cfg(feature = "mongodb_backend")]
pub use mongodb::MongoSubmissionStore;
