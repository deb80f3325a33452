//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP clients for the text and image inference endpoints
//! - An offline mock for both endpoints
//! - The demo inference backend (axum)
//! - The CLI container, router and controllers

pub mod adapter;
pub mod api;
pub mod server;

pub use adapter::*;
pub use server::*;
