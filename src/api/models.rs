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

//! Query parameter DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::compendium::Language;

/// Parameters of endpoints taking several GTINs
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GtinsQuery {
    /// Drug GTINs, separated by commas
    #[param(example = "7680612850014,7680612850090")]
    pub gtins: String,
    /// Content language; the configured default is used when omitted
    #[param(inline)]
    pub language: Option<Language>,
}

/// Parameters of endpoints taking one GTIN
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GtinQuery {
    /// Drug GTIN
    #[param(example = "7680612850014")]
    pub gtin: String,
    /// Content language; the configured default is used when omitted
    #[param(inline)]
    pub language: Option<Language>,
}

/// Split a comma-separated GTIN list.
///
/// Entries are trimmed. Empty entries and characters other than ASCII letters
/// and digits are rejected, since each entry becomes an upstream path segment.
pub fn parse_gtins(raw: &str) -> Result<Vec<String>, String> {
    let mut gtins = Vec::new();
    for (position, entry) in raw.split(',').enumerate() {
        let gtin = entry.trim();
        if gtin.is_empty() {
            return Err(format!("GTIN list entry {} is empty", position + 1));
        }
        if !gtin.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("Invalid GTIN '{gtin}'"));
        }
        gtins.push(gtin.to_string());
    }
    Ok(gtins)
}

/// Parse a parameter that must hold exactly one GTIN.
pub fn parse_single_gtin(raw: &str) -> Result<String, String> {
    let mut gtins = parse_gtins(raw)?;
    if gtins.len() != 1 {
        return Err(format!(
            "Expected a single GTIN, got {}; use a multi-GTIN endpoint instead",
            gtins.len()
        ));
    }
    Ok(gtins.remove(0))
}
