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

//! Cross-GTIN interaction aggregation.
//!
//! An interaction id listed for more than one of the requested products is a
//! drug-drug interaction between them.

use indexmap::{IndexMap, IndexSet};

use super::models::Interaction;

struct Occurrence {
    products: usize,
    latest: Interaction,
}

/// Interactions whose id occurs in the lists of at least two products.
///
/// `per_product` holds one interaction list per GTIN. An id repeated within a
/// single list counts once for that product. Results keep the order in which
/// each id was first seen; the returned record is the last one seen for that
/// id. When nothing is shared the result is the single
/// [`Interaction::none_found`] placeholder.
pub fn shared_interactions(per_product: &[Vec<Interaction>]) -> Vec<Interaction> {
    let mut occurrences: IndexMap<&str, Occurrence> = IndexMap::new();

    for interactions in per_product {
        let mut seen_here: IndexSet<&str> = IndexSet::new();
        for interaction in interactions {
            let first_in_product = seen_here.insert(interaction.id.as_str());
            occurrences
                .entry(interaction.id.as_str())
                .and_modify(|occ| {
                    if first_in_product {
                        occ.products += 1;
                    }
                    occ.latest = interaction.clone();
                })
                .or_insert_with(|| Occurrence {
                    products: 1,
                    latest: interaction.clone(),
                });
        }
    }

    let shared: Vec<Interaction> = occurrences
        .into_values()
        .filter(|occ| occ.products > 1)
        .map(|occ| occ.latest)
        .collect();

    if shared.is_empty() {
        vec![Interaction::none_found()]
    } else {
        shared
    }
}
