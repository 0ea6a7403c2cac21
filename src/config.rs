/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Parser configuration and its JSON loader.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * GitHub:    https://github.com/samwilcox/mapping-dsl
 *
 * License:
 * This file is part of the MAPPING-DSL project.
 *
 * MAPPING-DSL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on nested generic argument lists.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 8;

/// Errors raised while loading a [`ParserConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parser configuration json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parser configuration: {0}")]
    Invalid(String),
}

/// Knobs of the mapping parser.
///
/// Every key is optional when loaded from JSON:
///
/// ```json
/// {
///   "max-nesting-depth": 4,
///   "package-name": "io.example.generated",
///   "allow-unnamed-parameter": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParserConfig {
    /// Maximum number of generic argument lists nested inside each other.
    pub max_nesting_depth: usize,

    /// Replacement for the `{package-name}` placeholder. Left in place
    /// when `None`.
    pub package_name: Option<String>,

    /// Accept `io.Ann(42)`, a single value without a parameter name.
    pub allow_unnamed_parameter: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            package_name: None,
            allow_unnamed_parameter: true,
        }
    }
}

impl ParserConfig {
    /// Loads and validates a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_package_name(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "max-nesting-depth must be at least 1".to_string(),
            ));
        }

        if let Some(package) = &self.package_name {
            if package.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "package-name must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(ParserConfig::from_json("{}").unwrap(), ParserConfig::default());
    }

    #[test]
    fn kebab_case_keys() {
        let config = ParserConfig::from_json(
            r#"{ "max-nesting-depth": 3, "package-name": "io.gen", "allow-unnamed-parameter": false }"#,
        )
        .unwrap();

        assert_eq!(config.max_nesting_depth, 3);
        assert_eq!(config.package_name.as_deref(), Some("io.gen"));
        assert!(!config.allow_unnamed_parameter);
    }

    #[test]
    fn zero_depth_is_invalid() {
        let err = ParserConfig::from_json(r#"{ "max-nesting-depth": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ParserConfig::from_json(r#"{ "depth": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
