pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod settings;
pub mod telemetry;

pub use application::gateway::PayLeapGateway;
pub use error::{GatewayError, Result};
