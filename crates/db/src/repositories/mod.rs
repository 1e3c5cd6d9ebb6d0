//! Repository layer.
//!
//! Stores own their pool handle and expose async operations returning
//! [`StoreError`](crate::StoreError).

pub mod poem_repo;

pub use poem_repo::PoemStore;
