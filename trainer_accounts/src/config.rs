//! Central configuration for the trainer_accounts crate

use std::sync::LazyLock;

/// bcrypt cost factor used by [`crate::User::generate_hash`]
///
/// Read from `PASSWORD_HASH_COST`. Falls back to `bcrypt::DEFAULT_COST` when the
/// variable is unset or not a number. Out-of-range values are passed through and
/// rejected by bcrypt at hashing time.
pub static PASSWORD_HASH_COST: LazyLock<u32> = LazyLock::new(|| {
    std::env::var("PASSWORD_HASH_COST")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST)
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    /// Helper function to set an environment variable for the duration of the test
    /// and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    // The LazyLock may already be initialized, so these tests exercise the same
    // parsing logic it uses.
    fn parse_cost() -> u32 {
        env::var("PASSWORD_HASH_COST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST)
    }

    #[test]
    #[serial]
    fn test_password_hash_cost_default() {
        with_env_var("PASSWORD_HASH_COST", None, || {
            assert_eq!(parse_cost(), bcrypt::DEFAULT_COST);
        });
    }

    #[test]
    #[serial]
    fn test_password_hash_cost_custom() {
        with_env_var("PASSWORD_HASH_COST", Some("6"), || {
            assert_eq!(parse_cost(), 6);
        });
    }

    #[test]
    #[serial]
    fn test_password_hash_cost_unparsable_falls_back() {
        with_env_var("PASSWORD_HASH_COST", Some("very-slow"), || {
            assert_eq!(parse_cost(), bcrypt::DEFAULT_COST);
        });
    }
}
