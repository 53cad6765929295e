//! HTTP handlers

pub mod diagnostics;
pub mod dummy;
pub mod health;

pub use health::health;
