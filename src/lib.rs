pub mod configuration;
pub mod domain;
pub mod handler;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub use handler::handle;
