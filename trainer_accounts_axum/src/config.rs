//! Central configuration for the trainer_accounts_axum crate

use std::sync::LazyLock;

/// Envelope message for rejected registration payloads
/// Default: "invalid user data"
pub static INVALID_USER_MESSAGE: LazyLock<String> = LazyLock::new(|| {
    get_invalid_user_message(std::env::var("INVALID_USER_MESSAGE").ok().as_deref())
});

/// Envelope message for failed password checks
/// Default: "invalid credentials"
pub static INVALID_CREDENTIALS_MESSAGE: LazyLock<String> = LazyLock::new(|| {
    get_invalid_credentials_message(std::env::var("INVALID_CREDENTIALS_MESSAGE").ok().as_deref())
});

fn get_invalid_user_message(env_value: Option<&str>) -> String {
    env_value
        .map(|s| s.to_string())
        .unwrap_or_else(|| "invalid user data".to_string())
}

fn get_invalid_credentials_message(env_value: Option<&str>) -> String {
    env_value
        .map(|s| s.to_string())
        .unwrap_or_else(|| "invalid credentials".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_user_message_default() {
        let message = get_invalid_user_message(None);
        assert_eq!(message, "invalid user data");
    }

    #[test]
    fn test_invalid_user_message_custom() {
        let message = get_invalid_user_message(Some("check the highlighted fields"));
        assert_eq!(message, "check the highlighted fields");
    }

    #[test]
    fn test_invalid_credentials_message_default() {
        let message = get_invalid_credentials_message(None);
        assert_eq!(message, "invalid credentials");
    }

    #[test]
    fn test_invalid_credentials_message_custom() {
        let message = get_invalid_credentials_message(Some("wrong email or password"));
        assert_eq!(message, "wrong email or password");
    }
}
