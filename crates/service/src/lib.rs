//! Service layer for the warehouse backend.
//! - One service per entity, generic over its repository (the record store seam).
//! - Record-level rules live in `models`; presence and uniqueness checks live here.
//! - Every failure is a typed [`errors::ServiceError`].

pub mod errors;
pub mod validate;
pub mod item;
pub mod order;
pub mod warehouse_user;
pub mod scan_log;
#[cfg(test)]
pub mod test_support;
