mod errors;
mod health_check;
mod invocations;
mod web_backend;

pub use errors::ApiError;
pub use health_check::health_check;
pub use invocations::{invoke, INVOCATIONS_PATH};
pub use web_backend::web_backend;
