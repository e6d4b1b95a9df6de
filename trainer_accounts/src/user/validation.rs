use super::email::is_valid_email;
use super::types::Input;
use crate::response::Cause;
use crate::role::Role;

/// Message for every cause flagging a value that is present but unacceptable
pub const INVALID_VALUE: &str = "value informed is invalid";

/// Message for a cause flagging an empty `field`
pub fn required(field: &str) -> String {
    format!("{field} is required")
}

/// Run every rule against `input`, in a fixed order, collecting all failures
///
/// Rules never short-circuit: an empty email yields both a required and an
/// invalid cause. On success the parsed role is returned.
pub(super) fn validate(input: &Input) -> Result<Role, Vec<Cause>> {
    let mut causes = Vec::new();

    if input.name.is_empty() {
        causes.push(Cause::new("name", required("name")));
    }

    if input.email.is_empty() {
        causes.push(Cause::new("email", required("email")));
    }

    if !is_valid_email(&input.email) {
        causes.push(Cause::new("email", INVALID_VALUE));
    }

    if input.password.is_empty() {
        causes.push(Cause::new("password", required("password")));
    }

    if input.role.is_empty() {
        causes.push(Cause::new("role", required("role")));
    }

    let role = input.role.parse::<Role>();
    if role.is_err() {
        causes.push(Cause::new("role", INVALID_VALUE));
    }

    match role {
        Ok(role) if causes.is_empty() => Ok(role),
        _ => Err(causes),
    }
}
