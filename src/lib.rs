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

pub mod annotation;
pub mod api;
pub mod builder;
pub mod compendium;
pub mod config;
pub mod server;

// Main exports for library users
pub use builder::CompendiumServerBuilder;
pub use server::CompendiumServer;

pub use annotation::{annotate_drug, BioCCollection, DictionaryMatcher, TermMatcher};
pub use compendium::{
    CompendiumError, CompendiumSource, Drug, HttpCompendiumClient, Interaction, Language,
};
pub use config::{
    load_config_file, save_config_file, CompendiumServerConfig, ConfigError, MatcherSettings,
    UpstreamSettings,
};
