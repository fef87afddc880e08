//! Environment variable expansion for configuration strings.
//!
//! - `${VAR}` expands to the value of VAR and errors if unset
//! - `${VAR:-default}` expands to VAR if set, otherwise to the default

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Bare `$VAR` is left untouched; only the braced form is expanded.
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Variable referenced without a default and missing from the environment.
struct UnsetVar(String);
