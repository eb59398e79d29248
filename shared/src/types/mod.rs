//! Wire types written by the HTTP layer
//!
//! - `response` - the terminal message body and health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus, MessageBody};
