//! # Serde module for Config
//!
//! This module provides serde-based (serialization and deserialization) features for
//! `Config`, so estimator parameters can be loaded from configuration files.
//!
//! `Config` is serialized as a struct with `precision` and `max_sparse_set_size` fields.
//! During deserialization `max_sparse_set_size` defaults to `DEFAULT_MAX_SPARSE_SET_SIZE`
//! when missing, and the resulting parameters are validated, so out of range values are
//! reported as deserialization errors instead of failing later on estimator construction.
//!
//! Estimator state itself is not serializable.
use serde::de::Error;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::estimator::{Config, DEFAULT_MAX_SPARSE_SET_SIZE};

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Config", 2)?;
        state.serialize_field("precision", &self.precision)?;
        state.serialize_field("max_sparse_set_size", &self.max_sparse_set_size)?;
        state.end()
    }
}

/// Unvalidated `Config` fields
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    precision: u8,
    #[serde(default = "default_max_sparse_set_size")]
    max_sparse_set_size: usize,
}

fn default_max_sparse_set_size() -> usize {
    DEFAULT_MAX_SPARSE_SET_SIZE
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        let config = Config::new(raw.precision, raw.max_sparse_set_size);
        config.validate().map_err(D::Error::custom)?;
        Ok(config)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::CardinalityEstimator;
    use test_case::test_case;

    #[test_case(4, 1; "lowest precision")]
    #[test_case(14, 1024; "default parameters")]
    #[test_case(25, 65536; "highest precision")]
    fn test_serde(precision: u8, max_sparse_set_size: usize) {
        let original = Config::new(precision, max_sparse_set_size);

        let serialized = serde_json::to_string(&original).expect("serialization failed");
        assert!(
            !serialized.is_empty(),
            "serialized string should not be empty"
        );

        let deserialized: Config =
            serde_json::from_str(&serialized).expect("deserialization failed");
        assert_eq!(original, deserialized);

        let estimator = CardinalityEstimator::from_config(deserialized).unwrap();
        assert_eq!(estimator.precision(), precision);
    }

    #[test]
    fn test_default_write_buffer_capacity() {
        let config: Config = serde_json::from_str(r#"{"precision": 12}"#).unwrap();
        assert_eq!(config, Config::new(12, DEFAULT_MAX_SPARSE_SET_SIZE));
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let invalid_json = "{ invalid_json_string }";
        let result: Result<Config, _> = serde_json::from_str(invalid_json);

        assert!(
            result.is_err(),
            "Deserialization should fail for invalid JSON"
        );
    }

    #[test_case(r#"{"precision": 3}"#; "precision too low")]
    #[test_case(r#"{"precision": 26}"#; "precision too high")]
    #[test_case(r#"{"precision": 300}"#; "precision overflow")]
    #[test_case(r#"{"precision": 12, "max_sparse_set_size": 0}"#; "empty write buffer")]
    #[test_case(r#"{"precision": 12, "width": 6}"#; "unknown field")]
    #[test_case(r#"{"max_sparse_set_size": 16}"#; "missing precision")]
    fn test_failed_deserialization(input: &str) {
        let result: Result<Config, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message() {
        let err = serde_json::from_str::<Config>(r#"{"precision": 30}"#).unwrap_err();
        assert!(err.to_string().contains("invalid precision 30"));
    }
}
