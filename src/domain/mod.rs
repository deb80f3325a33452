//! # Domain Layer
//!
//! Chat and image request state machines, messages and errors.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
