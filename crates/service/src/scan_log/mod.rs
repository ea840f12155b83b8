//! Append-only scan events and per-item history.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::ScanLogService;
