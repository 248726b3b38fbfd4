//! Server module for building the intake HTTP server
//!
//! Routes, handlers and the [`ServerBuilder`] that wires a store into them.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::build_intake_routes;
