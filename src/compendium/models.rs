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

//! Typed views of compendium product records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Interaction id returned when no shared interaction exists.
pub const NO_INTERACTION_ID: &str = "0";
/// Interaction name returned when no shared interaction exists.
pub const NO_INTERACTION_NAME: &str = "No interaction found";

/// Content language requested from the compendium.
///
/// Only the two locales published by the compendium are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[default]
    #[serde(rename = "fr-CH")]
    Fr,
    #[serde(rename = "de-CH")]
    De,
}

impl Language {
    /// The locale tag sent as `Accept-Language`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr-CH",
            Language::De => "de-CH",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Fr, Language::De]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unsupported language '{s}'. Supported languages are: fr-CH, de-CH"
                )
            })
    }
}

/// A drug-drug interaction recorded for a substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Interaction {
    /// Opaque upstream interaction identifier
    pub id: String,
    /// Display title of the interaction
    pub name: String,
    /// Mechanism description
    pub mechanism: String,
}

impl Interaction {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mechanism: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mechanism: mechanism.into(),
        }
    }

    /// Placeholder returned by the cross-GTIN aggregation when nothing is shared.
    pub fn none_found() -> Self {
        Self::new(NO_INTERACTION_ID, NO_INTERACTION_NAME, "")
    }

    pub fn is_none_found(&self) -> bool {
        self.id == NO_INTERACTION_ID && self.name == NO_INTERACTION_NAME
    }
}

/// A compendium product reduced to its GTIN, description and interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Drug {
    pub gtin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub interactions: Vec<Interaction>,
}
