//! Persistence module for state serialization
//!
//! Saves the dashboard to a string-keyed store as a single JSON record and
//! reads it back, accepting records written by older versions.

mod snapshot;
mod store;
mod decode;
mod bridge;

pub use snapshot::DashboardState;
pub use store::{KeyValueStore, MemoryStore};
pub use bridge::PersistenceBridge;
