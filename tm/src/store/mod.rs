//! Shared state store aggregating the latest received values
//!
//! Six fields, each behind its own lock. Individual reads and writes are
//! atomic; a [`Snapshot`] is not a joint transaction across fields.

mod error;
mod shared;

pub use error::StoreError;
pub use shared::{SharedStore, Snapshot};
