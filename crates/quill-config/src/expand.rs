//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Strings without a `${` sequence are returned unchanged, so bare `$VAR`
/// and literal dollar signs in URLs survive untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_token_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("QUILL_TEST_TOKEN", "secret_abc");
        }
        let result = expand_env("${QUILL_TEST_TOKEN}", "notion.api_key").unwrap();
        assert_eq!(result, "secret_abc");
        unsafe {
            std::env::remove_var("QUILL_TEST_TOKEN");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUILL_TEST_UNSET_DB");
        }
        let result = expand_env("${QUILL_TEST_UNSET_DB:-fallback-db}", "notion.database_id").unwrap();
        assert_eq!(result, "fallback-db");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUILL_TEST_MISSING");
        }
        let err = expand_env("${QUILL_TEST_MISSING}", "notion.api_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("QUILL_TEST_MISSING"));
        assert!(err.to_string().contains("notion.api_key"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("QUILL_TEST_HOST", "notion.internal");
        }
        let result = expand_env("https://${QUILL_TEST_HOST}/v1", "notion.api_url").unwrap();
        assert_eq!(result, "https://notion.internal/v1");
        unsafe {
            std::env::remove_var("QUILL_TEST_HOST");
        }
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
        assert_eq!(expand_env("$VAR", "f").unwrap(), "$VAR");
    }
}
