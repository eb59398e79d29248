pub mod digest;
pub mod health;

pub use digest::{digest_response, respond_json, HttpContext};
pub use health::health_check;
