//! Core entity definitions for the Daily Diet API.
//!
//! This crate defines the data types shared across the application (users,
//! meals and partial meal updates) together with the pure streak and totals
//! calculators that operate on a user's meal history.

mod meal;
mod stats;
mod user;

pub use meal::*;
pub use stats::*;
pub use user::*;
