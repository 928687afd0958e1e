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

//! BioC output for drug interaction texts.
//!
//! A collection holds documents, a document holds passages and a passage holds
//! annotations. One passage is produced per interaction record; its offset is
//! the character position of the passage inside the document, with passages
//! separated by one character.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::matcher::{OntologyTerm, Stopwatch, TermMatch, TermMatcher};
use crate::compendium::{Drug, Interaction};

/// `source` of every collection produced by this service.
pub const BIOC_SOURCE: &str = "Documedis";
/// `key` of every collection produced by this service.
pub const BIOC_KEY: &str = "documedis.key";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BioCCollection {
    pub source: String,
    /// Creation date as `YYYYMMDD`
    pub date: String,
    pub key: String,
    pub infons: BTreeMap<String, String>,
    pub documents: Vec<BioCDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BioCDocument {
    pub id: String,
    pub infons: BTreeMap<String, String>,
    pub passages: Vec<BioCPassage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BioCPassage {
    pub offset: usize,
    pub text: String,
    pub infons: BTreeMap<String, String>,
    pub annotations: Vec<BioCAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BioCAnnotation {
    pub id: String,
    /// Matched concept, see [`term_infon`]
    pub infons: String,
    pub text: String,
    pub locations: Vec<BioCLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BioCLocation {
    pub offset: usize,
    pub length: usize,
}

/// Text annotated for one interaction: its title and mechanism.
pub fn interaction_text(interaction: &Interaction) -> String {
    let name = interaction.name.trim();
    let mechanism = interaction.mechanism.trim();
    match (name.is_empty(), mechanism.is_empty()) {
        (false, false) => format!("{name}. {mechanism}"),
        (false, true) => name.to_string(),
        (true, false) => mechanism.to_string(),
        (true, true) => String::new(),
    }
}

/// Annotation infon string for a matched concept.
pub fn term_infon(term: &OntologyTerm) -> String {
    format!(
        "type={}|concept_id={}|pref_term={}|provenance={}",
        term.term_type, term.concept_id, term.pref_term, term.provenance
    )
}

/// Convert one matcher hit into an annotation, or `None` if its span does
/// not fit inside the passage text.
pub fn annotation_from_match(
    id: usize,
    passage_chars: &[char],
    passage_offset: usize,
    hit: &TermMatch,
) -> Option<BioCAnnotation> {
    if hit.start_index > hit.end_index || hit.end_index > passage_chars.len() {
        return None;
    }

    Some(BioCAnnotation {
        id: id.to_string(),
        infons: term_infon(&hit.term),
        text: passage_chars[hit.start_index..hit.end_index].iter().collect(),
        locations: vec![BioCLocation {
            offset: passage_offset + hit.start_index,
            length: hit.end_index - hit.start_index,
        }],
    })
}

/// One annotated passage per interaction, in order.
///
/// Annotation ids are sequential across all passages, starting at 0.
pub fn build_passages(
    interactions: &[Interaction],
    matcher: &dyn TermMatcher,
    stopwatch: &mut Stopwatch,
) -> Vec<BioCPassage> {
    let mut passages = Vec::with_capacity(interactions.len());
    let mut offset = 0;
    let mut next_annotation_id = 0;

    for interaction in interactions {
        let text = interaction_text(interaction);
        let chars: Vec<char> = text.chars().collect();

        let hits = matcher.find_matches(&text);
        stopwatch.lap(format!("interaction {}", interaction.id));

        let mut annotations = Vec::with_capacity(hits.len());
        for hit in &hits {
            match annotation_from_match(next_annotation_id, &chars, offset, hit) {
                Some(annotation) => {
                    annotations.push(annotation);
                    next_annotation_id += 1;
                }
                None => warn!(
                    "Discarding match {}..{} outside interaction {} text",
                    hit.start_index, hit.end_index, interaction.id
                ),
            }
        }

        let mut infons = BTreeMap::new();
        infons.insert("interaction_id".to_string(), interaction.id.clone());
        infons.insert("interaction_name".to_string(), interaction.name.clone());

        passages.push(BioCPassage {
            offset,
            text,
            infons,
            annotations,
        });
        offset += chars.len() + 1;
    }

    passages
}

/// Document for one drug, identified by its GTIN.
pub fn build_document(drug: &Drug, matcher: &dyn TermMatcher) -> BioCDocument {
    let mut stopwatch = Stopwatch::start();
    let passages = build_passages(&drug.interactions, matcher, &mut stopwatch);
    debug!(
        "Annotated {} passage(s) for GTIN {}: {}",
        passages.len(),
        drug.gtin,
        stopwatch.summary()
    );

    let mut infons = BTreeMap::new();
    if let Some(description) = &drug.description {
        infons.insert("description".to_string(), description.clone());
    }

    BioCDocument {
        id: drug.gtin.clone(),
        infons,
        passages,
    }
}

pub fn build_collection(documents: Vec<BioCDocument>, date: NaiveDate) -> BioCCollection {
    BioCCollection {
        source: BIOC_SOURCE.to_string(),
        date: date.format("%Y%m%d").to_string(),
        key: BIOC_KEY.to_string(),
        infons: BTreeMap::new(),
        documents,
    }
}

/// Collection with exactly one document for `drug`.
pub fn annotate_drug(drug: &Drug, matcher: &dyn TermMatcher, date: NaiveDate) -> BioCCollection {
    build_collection(vec![build_document(drug, matcher)], date)
}
