mod api_error;
mod errors;
mod types;

pub use api_error::ApiError;
pub use errors::RenderError;
pub use types::{Cause, ErrorEnvelope, PROBLEM_JSON};
