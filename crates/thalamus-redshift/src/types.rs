//! Credential value type
//!
//! Every credential this crate touches (the warehouse password parsed out of
//! the connection URL, the storage key prefix, the composed staging URI) is
//! held as a [`SensitiveString`] so that a stray `{:?}` can never leak it.

use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Credential material held out of accidental reach.
///
/// Debug output is redacted; the real value only comes out through
/// [`expose_secret`](Self::expose_secret), at the two places that compose
/// connector strings from credentials.
#[derive(Clone)]
pub struct SensitiveString(SecretString);

impl SensitiveString {
    /// Wrap a credential value
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// The wrapped credential value.
    ///
    /// Callers own what happens next; anything built from the return value
    /// (a JDBC URL, a staging URI) is itself credential material.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for SensitiveString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SensitiveString([REDACTED])")
    }
}

impl From<String> for SensitiveString {
    fn from(value: String) -> Self {
        Self(SecretString::from(value))
    }
}

impl From<&str> for SensitiveString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Deserializes from the plain value so credentials can arrive through
/// settings files and environment expansion.
impl<'de> Deserialize<'de> for SensitiveString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl JsonSchema for SensitiveString {
    fn schema_name() -> String {
        "SensitiveString".to_string()
    }

    fn json_schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = schemars::schema::SchemaObject {
            instance_type: Some(schemars::schema::InstanceType::String.into()),
            format: Some("password".to_string()),
            ..Default::default()
        };
        schema.metadata().description = Some(
            "Credential material (warehouse password or storage key prefix); redacted in output"
                .to_string(),
        );
        schema.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_storage_key() {
        let key = SensitiveString::new("AKIA123:token@");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SensitiveString([REDACTED])");
        assert!(!debug.contains("AKIA123"));
    }

    #[test]
    fn test_expose_returns_wrapped_value() {
        let password = SensitiveString::new("warehouse-password");
        assert_eq!(password.expose_secret(), "warehouse-password");
    }

    #[test]
    fn test_deserializes_from_settings_value() {
        // The storage key arrives as a plain YAML scalar
        let key: SensitiveString = serde_yaml::from_str("AKIA123:token@").unwrap();
        assert_eq!(key.expose_secret(), "AKIA123:token@");
    }

    #[test]
    fn test_conversion_from_string_types() {
        let owned = SensitiveString::from("secret".to_string());
        let borrowed = SensitiveString::from("secret");
        assert_eq!(owned.expose_secret(), borrowed.expose_secret());
    }

    #[test]
    fn test_schema_marks_field_as_password() {
        let schema = schemars::schema_for!(SensitiveString);
        assert_eq!(schema.schema.format.as_deref(), Some("password"));
    }
}
