//! Infrastructure: telemetry, fixture loading, and the in-memory post store.

pub mod error;
pub mod fixtures;
pub mod store;
pub mod telemetry;
