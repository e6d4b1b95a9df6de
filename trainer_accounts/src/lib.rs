//! trainer_accounts - User-account core for the personal trainer API
//!
//! This crate turns untrusted registration input into validated user records,
//! hashes and verifies passwords, and renders failures as a uniform
//! `application/problem+json` error envelope. Persistence and routing are left
//! to the caller.

mod config;
mod response;
mod role;
mod user;

pub use config::PASSWORD_HASH_COST;

pub use response::{ApiError, Cause, ErrorEnvelope, PROBLEM_JSON, RenderError};

pub use role::{Role, RoleError, is_valid_role};

pub use user::{INVALID_VALUE, Input, Password, RecordMetadata, User, UserError, required};
