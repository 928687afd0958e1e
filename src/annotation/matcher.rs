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

//! Ontology term matching.
//!
//! The annotation endpoint depends only on the [`TermMatcher`] trait. The
//! bundled [`DictionaryMatcher`] is loaded from a YAML or JSON term list:
//!
//! ```yaml
//! - term: simvastatin
//!   termType: CHEMICAL
//!   conceptId: "CHEBI:9150"
//!   provenance: ChEBI
//! - term: CYP3A4
//!   termType: GENE
//!   conceptId: "HGNC:2637"
//!   prefTerm: cytochrome P450 family 3 subfamily A member 4
//!   provenance: HGNC
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::{load_document, ConfigError};

/// Errors raised while building a matcher.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Failed to load term dictionary: {0}")]
    Load(#[from] ConfigError),

    #[error("Term for concept '{concept_id}' is empty")]
    EmptyTerm { concept_id: String },
}

/// The ontology concept a span was matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTerm {
    pub term_type: String,
    pub concept_id: String,
    pub pref_term: String,
    pub provenance: String,
}

/// A matched span. Indices are character positions, `end_index` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    pub start_index: usize,
    pub end_index: usize,
    pub term: OntologyTerm,
}

/// Finds ontology terms in free text.
pub trait TermMatcher: Send + Sync {
    fn find_matches(&self, text: &str) -> Vec<TermMatch>;
}

/// Records named laps for matcher timing.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
    last_lap: Instant,
    laps: Vec<(String, Duration)>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_lap: now,
            laps: Vec::new(),
        }
    }

    /// Close the current lap and return its duration.
    pub fn lap(&mut self, label: impl Into<String>) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_lap);
        self.last_lap = now;
        self.laps.push((label.into(), elapsed));
        elapsed
    }

    pub fn laps(&self) -> &[(String, Duration)] {
        &self.laps
    }

    pub fn total(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn summary(&self) -> String {
        let laps: Vec<String> = self
            .laps
            .iter()
            .map(|(label, d)| format!("{label}={}us", d.as_micros()))
            .collect();
        format!("total={}us [{}]", self.total().as_micros(), laps.join(", "))
    }
}

/// One entry of a term dictionary file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TermEntry {
    pub term: String,
    pub term_type: String,
    pub concept_id: String,
    #[serde(default)]
    pub pref_term: Option<String>,
    pub provenance: String,
}

struct CompiledTerm {
    pattern: Vec<char>,
    term: OntologyTerm,
}

/// Case-insensitive, whole-word, longest-match dictionary matcher.
///
/// Matches never overlap; scanning proceeds left to right.
pub struct DictionaryMatcher {
    terms: Vec<CompiledTerm>,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

impl DictionaryMatcher {
    pub fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn new(entries: Vec<TermEntry>) -> Result<Self, MatcherError> {
        let mut terms = Vec::with_capacity(entries.len());
        for entry in entries {
            let pattern: Vec<char> = entry.term.trim().chars().map(fold).collect();
            if pattern.is_empty() {
                return Err(MatcherError::EmptyTerm {
                    concept_id: entry.concept_id,
                });
            }
            let pref_term = entry
                .pref_term
                .unwrap_or_else(|| entry.term.trim().to_string());
            terms.push(CompiledTerm {
                pattern,
                term: OntologyTerm {
                    term_type: entry.term_type,
                    concept_id: entry.concept_id,
                    pref_term,
                    provenance: entry.provenance,
                },
            });
        }
        // Stable sort keeps dictionary order among equal lengths
        terms.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn match_at(&self, chars: &[char], folded: &[char], start: usize) -> Option<&CompiledTerm> {
        self.terms.iter().find(|candidate| {
            let end = start + candidate.pattern.len();
            end <= folded.len()
                && folded[start..end] == candidate.pattern[..]
                && (end == chars.len() || !is_word_char(chars[end]))
        })
    }
}

impl TermMatcher for DictionaryMatcher {
    fn find_matches(&self, text: &str) -> Vec<TermMatch> {
        let chars: Vec<char> = text.chars().collect();
        let folded: Vec<char> = chars.iter().copied().map(fold).collect();
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let at_word_start = pos == 0 || !is_word_char(chars[pos - 1]);
            if at_word_start {
                if let Some(hit) = self.match_at(&chars, &folded, pos) {
                    let end = pos + hit.pattern.len();
                    matches.push(TermMatch {
                        start_index: pos,
                        end_index: end,
                        term: hit.term.clone(),
                    });
                    pos = end;
                    continue;
                }
            }
            pos += 1;
        }

        matches
    }
}

/// Load a [`DictionaryMatcher`] from a YAML or JSON term list.
pub fn load_matcher<P: AsRef<Path>>(path: P) -> Result<DictionaryMatcher, MatcherError> {
    let path_ref = path.as_ref();
    let entries: Vec<TermEntry> = load_document(path_ref)?;
    debug!("Read {} term(s) from {}", entries.len(), path_ref.display());
    let matcher = DictionaryMatcher::new(entries)?;
    info!(
        "Loaded term matcher with {} term(s) from {}",
        matcher.len(),
        path_ref.display()
    );
    Ok(matcher)
}
