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

//! Environment variable interpolation for configuration files.
//!
//! Supported forms:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - falls back to `default` when unset or empty
//!
//! ```
//! use compendium_server::config::env_interpolation::interpolate;
//!
//! std::env::set_var("DOC_UPSTREAM_HOST", "documedis.example.org");
//!
//! let yaml = "upstream:\n  baseUrl: https://${DOC_UPSTREAM_HOST}/api/products\nport: ${DOC_PORT:-8080}";
//! let result = interpolate(yaml).unwrap();
//! assert!(result.contains("https://documedis.example.org/api/products"));
//! assert!(result.contains("port: 8080"));
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::env;

/// Upper bound on the interpolated output size
const MAX_INTERPOLATED_LENGTH: usize = 1_000_000;

lazy_static! {
    /// Group 1: variable name (POSIX), group 2: default value after `:-`.
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Environment variable '{name}' does not contain valid Unicode")]
    InvalidUnicode { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Replace every `${...}` reference in `input` with its environment value.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut resolved = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&input[cursor..whole.start()]);
        output.push_str(&resolve(&caps)?);
        cursor = whole.end();

        if output.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
        if let Some(name) = caps.get(1) {
            resolved.push(name.as_str());
        }
    }
    output.push_str(&input[cursor..]);

    if output.len() > MAX_INTERPOLATED_LENGTH {
        return Err(InterpolationError::ResultTooLarge);
    }

    // Names only, values may be secrets
    if !resolved.is_empty() {
        debug!("Interpolated environment variables: {}", resolved.join(", "));
    }

    Ok(output)
}

/// Names of all variables referenced in `input`, in order of first appearance.
pub fn referenced_variables(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        if let Some(name) = caps.get(1) {
            if !names.iter().any(|n| n == name.as_str()) {
                names.push(name.as_str().to_string());
            }
        }
    }
    names
}

fn resolve(caps: &Captures<'_>) -> Result<String, InterpolationError> {
    let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let default = caps.get(2).map(|m| m.as_str());

    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => default
            .map(str::to_string)
            .ok_or_else(|| InterpolationError::MissingVariable {
                name: name.to_string(),
            }),
        Err(env::VarError::NotUnicode(_)) => Err(InterpolationError::InvalidUnicode {
            name: name.to_string(),
        }),
    }
}
