pub mod envelope;
pub mod errors;
pub mod openapi;
pub mod params;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
