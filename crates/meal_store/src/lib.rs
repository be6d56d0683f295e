//! User and meal storage for the Daily Diet API.
//!
//! This crate provides a storage abstraction for users and their meals. The
//! server process uses the SQLite implementation; tests use the in-memory
//! implementation. Both list meals in insertion order, which is the order the
//! streak calculator consumes.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
