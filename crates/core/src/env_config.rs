//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read an environment variable, treating blank values as unset.
///
/// Secrets are read through this so that `RETELL_API_KEY=` fails closed
/// instead of authenticating against an empty key.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test uses a unique variable name, nothing else reads it.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_INGEST_ENV_PARSE_VALID_40211";
        set(var_name, "42");
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_INGEST_ENV_PARSE_INVALID_40212";
        set(var_name, "five minutes");
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 300);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_INGEST_ENV_PARSE_MISSING_40213";
        unset(var_name);
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 300);
    }

    #[test]
    fn test_env_non_empty_blank_is_none() {
        let var_name = "TEST_INGEST_ENV_NON_EMPTY_40214";
        set(var_name, "   ");
        assert_eq!(env_non_empty(var_name), None);
        set(var_name, " key_abc ");
        assert_eq!(env_non_empty(var_name).as_deref(), Some("key_abc"));
        unset(var_name);
    }
}
