// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration loading with environment variable interpolation.

use super::env_interpolation;
use super::types::CompendiumServerConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Deserialize YAML after interpolating `${...}` references.
///
/// ```
/// use compendium_server::config::loader::from_yaml_str;
/// use compendium_server::config::CompendiumServerConfig;
///
/// std::env::set_var("DOC_SERVER_PORT", "9000");
///
/// let config: CompendiumServerConfig = from_yaml_str("port: ${DOC_SERVER_PORT}").unwrap();
/// assert_eq!(config.port, 9000);
/// ```
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Parse already-interpolated content as YAML, falling back to JSON.
fn parse_either<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T, ConfigError> {
    match serde_yaml::from_str::<T>(content) {
        Ok(value) => Ok(value),
        Err(yaml_err) => match serde_json::from_str::<T>(content) {
            Ok(value) => Ok(value),
            Err(json_err) => Err(ConfigError::ParseError {
                path: origin.to_string(),
                yaml_err: yaml_err.to_string(),
                json_err: json_err.to_string(),
            }),
        },
    }
}

/// Read any YAML or JSON file with interpolation. Used for the server
/// configuration and for matcher term dictionaries.
pub fn load_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content)?;
    parse_either(&interpolated, &path_ref.display().to_string())
}

/// Load and validate the server configuration.
///
/// The file is interpolated, parsed as YAML (JSON as fallback) and validated.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<CompendiumServerConfig, ConfigError> {
    let config: CompendiumServerConfig = load_document(path)?;
    config.validate()?;
    Ok(config)
}

/// Save the configuration as YAML.
///
/// Interpolated values are written, not the original `${...}` references.
pub fn save_config_file<P: AsRef<Path>>(
    config: &CompendiumServerConfig,
    path: P,
) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;
    Ok(fs::write(path, content)?)
}
