//! Domain types and pure helpers shared by the store and the HTTP layer.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod search;
pub mod types;
pub mod validation;
