pub mod binder;
pub mod composer;
mod handlers;
mod routes;
mod types;

#[cfg(test)]
mod test_helpers;

pub use binder::{BindError, GenerateFlags, NametagRequest};
pub use composer::DeliveryMode;
pub use routes::create_router;
pub use types::{ApiError, AppState, ErrorResponse, HealthStatus, TemplateListing};
