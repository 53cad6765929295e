//! Business logic services

pub mod diagnostics;
pub mod dummy_service;

pub use diagnostics::QueryDiagnostics;
pub use dummy_service::DummyService;
