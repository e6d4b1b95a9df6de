mod email;
mod errors;
mod password;
mod types;
mod validation;

pub use errors::UserError;
pub use password::Password;
pub use types::{Input, RecordMetadata, User};
pub use validation::{INVALID_VALUE, required};
