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

//! Translation of raw compendium product documents into typed models.
//!
//! Interactions live at `components[0].substances[*].drugInteractions[*]`.
//! A substance without `drugInteractions` contributes nothing, but a document
//! without `components[0]` or `substances` is rejected.

use serde_json::Value;

use super::client::CompendiumError;
use super::models::{Drug, Interaction};

/// Which substances of the first component are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstanceScope {
    /// Only `substances[0]`.
    First,
    /// Every substance, in document order.
    All,
}

/// Map one upstream `drugInteractions` entry to an [`Interaction`].
///
/// `id` -> id, `title` -> name, `mechanismText` -> mechanism.
pub fn interaction_from_record(record: &Value) -> Result<Interaction, String> {
    let id = match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err("interaction record is missing 'id'".to_string()),
    };

    Ok(Interaction {
        id,
        name: string_field(record, "title")?,
        mechanism: string_field(record, "mechanismText")?,
    })
}

fn string_field(record: &Value, key: &str) -> Result<String, String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("interaction record is missing '{key}'"))
}

fn shape_error(gtin: &str, reason: impl Into<String>) -> CompendiumError {
    CompendiumError::UnexpectedShape {
        gtin: gtin.to_string(),
        reason: reason.into(),
    }
}

fn substances<'a>(gtin: &str, product: &'a Value) -> Result<&'a Vec<Value>, CompendiumError> {
    let component = product
        .get("components")
        .and_then(Value::as_array)
        .and_then(|components| components.first())
        .ok_or_else(|| shape_error(gtin, "missing 'components[0]'"))?;

    component
        .get("substances")
        .and_then(Value::as_array)
        .ok_or_else(|| shape_error(gtin, "missing 'components[0].substances'"))
}

fn substance_interactions(
    gtin: &str,
    substance: &Value,
    out: &mut Vec<Interaction>,
) -> Result<(), CompendiumError> {
    let records = match substance.get("drugInteractions") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(records)) => records,
        Some(_) => return Err(shape_error(gtin, "'drugInteractions' is not a list")),
    };

    for record in records {
        out.push(interaction_from_record(record).map_err(|reason| shape_error(gtin, reason))?);
    }
    Ok(())
}

/// Extract the interaction list of a product document.
pub fn extract_interactions(
    gtin: &str,
    product: &Value,
    scope: SubstanceScope,
) -> Result<Vec<Interaction>, CompendiumError> {
    let substances = substances(gtin, product)?;
    let mut interactions = Vec::new();

    match scope {
        SubstanceScope::First => {
            let first = substances
                .first()
                .ok_or_else(|| shape_error(gtin, "missing 'components[0].substances[0]'"))?;
            substance_interactions(gtin, first, &mut interactions)?;
        }
        SubstanceScope::All => {
            for substance in substances {
                substance_interactions(gtin, substance, &mut interactions)?;
            }
        }
    }

    Ok(interactions)
}

/// Reduce a product document to a [`Drug`], walking every substance.
pub fn extract_drug(gtin: &str, product: &Value) -> Result<Drug, CompendiumError> {
    let interactions = extract_interactions(gtin, product, SubstanceScope::All)?;
    let description = product
        .get("description")
        .and_then(|d| d.get("description"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Drug {
        gtin: gtin.to_string(),
        description,
        interactions,
    })
}
