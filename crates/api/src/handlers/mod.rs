//! Request handlers.
//!
//! Handlers delegate to the stores in `poetry_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod poem;
