//! Customer orders: create, status change, listing.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::OrderService;
