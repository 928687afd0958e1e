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

//! Access to the pharmaceutical compendium.
//!
//! - `client` - upstream HTTP client behind the [`CompendiumSource`] trait
//! - `extract` - product document to [`Interaction`] / [`Drug`] translation
//! - `aggregate` - interactions shared between several products
//! - `models` - [`Language`], [`Interaction`], [`Drug`]

pub mod aggregate;
pub mod client;
pub mod extract;
pub mod models;

pub use aggregate::shared_interactions;
pub use client::{CompendiumError, CompendiumSource, HttpCompendiumClient};
pub use extract::{extract_drug, extract_interactions, interaction_from_record, SubstanceScope};
pub use models::{Drug, Interaction, Language, NO_INTERACTION_ID, NO_INTERACTION_NAME};
