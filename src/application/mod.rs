//! # Application Layer
//!
//! Inference interfaces and the use cases that drive the domain state
//! machines through them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
