//! Inventory items: create, read, partial update, delete.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::ItemService;
