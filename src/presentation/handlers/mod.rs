mod health;
mod process;

pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use process::{AcceptedResponse, CALLBACK_URL_FIELD, process_handler};
