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

//! In-memory compendium source and product document builders.

use async_trait::async_trait;
use compendium_server::annotation::{DictionaryMatcher, TermEntry};
use compendium_server::compendium::{CompendiumError, CompendiumSource, Language};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// GTIN of the documented example product
pub const EXAMPLE_GTIN: &str = "7680612850014";

enum MockProduct {
    Document(Value),
    Status(u16),
}

/// A compendium source answering from a fixed table of GTINs
///
/// Unknown GTINs answer with status 404, like the real upstream.
#[derive(Default)]
pub struct MockCompendium {
    products: HashMap<String, MockProduct>,
    requests: Mutex<Vec<(String, Language)>>,
}

impl MockCompendium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, gtin: &str, document: Value) -> Self {
        self.products
            .insert(gtin.to_string(), MockProduct::Document(document));
        self
    }

    pub fn with_status(mut self, gtin: &str, status: u16) -> Self {
        self.products
            .insert(gtin.to_string(), MockProduct::Status(status));
        self
    }

    /// Every `(gtin, language)` lookup seen so far, in order
    pub fn requests(&self) -> Vec<(String, Language)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompendiumSource for MockCompendium {
    async fn fetch_product(&self, gtin: &str, language: Language) -> Result<Value, CompendiumError> {
        self.requests
            .lock()
            .unwrap()
            .push((gtin.to_string(), language));

        let status = match self.products.get(gtin) {
            Some(MockProduct::Document(document)) => return Ok(document.clone()),
            Some(MockProduct::Status(status)) => *status,
            None => 404,
        };

        Err(CompendiumError::UpstreamStatus {
            gtin: gtin.to_string(),
            status: reqwest::StatusCode::from_u16(status).unwrap(),
        })
    }
}

/// Build a product document whose first component holds one substance per
/// entry of `substances`, each with the given `(id, title, mechanismText)`
/// interaction records.
pub fn product_document(description: &str, substances: &[&[(&str, &str, &str)]]) -> Value {
    let substances: Vec<Value> = substances
        .iter()
        .enumerate()
        .map(|(index, records)| {
            let interactions: Vec<Value> = records
                .iter()
                .map(|(id, title, mechanism)| {
                    json!({ "id": id, "title": title, "mechanismText": mechanism })
                })
                .collect();
            json!({ "id": index + 1, "drugInteractions": interactions })
        })
        .collect();

    json!({
        "description": { "description": description },
        "components": [ { "substances": substances } ]
    })
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The documented example response for [`EXAMPLE_GTIN`]
pub fn example_product() -> Value {
    let raw = std::fs::read_to_string(fixture_path("product_7680612850014.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub fn term(term: &str, concept_id: &str) -> TermEntry {
    TermEntry {
        term: term.to_string(),
        term_type: "CHEMICAL".to_string(),
        concept_id: concept_id.to_string(),
        pref_term: None,
        provenance: "test-dictionary".to_string(),
    }
}

/// Matcher recognising the substances of the example product
pub fn example_matcher() -> DictionaryMatcher {
    DictionaryMatcher::new(vec![
        term("paracétamol", "CHEBI:46195"),
        term("warfarine", "CHEBI:10033"),
        term("caféine", "CHEBI:27732"),
        term("vitamine K", "CHEBI:28384"),
    ])
    .unwrap()
}
