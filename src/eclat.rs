// Copyright 2026 The eclat developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use errors::MiningError;
use generate_rules::{generate_rules, validate_parameters};
use hierarchy::{hierarchy_rules, Taxonomy};
use item::Item;
use rule::RuleSet;
use vec_sets::intersection;
use vertical_index::{vertical_index, Itemset, SupportMap};

// Mining thresholds. min_sup and min_confidence are exclusive lower bounds;
// min_len/max_len bound the itemset lengths rules are generated from, with
// max_len defaulting to the deepest frequent level.
pub struct Parameters {
    pub min_sup: u32,
    pub min_confidence: f64,
    pub min_len: usize,
    pub max_len: Option<usize>,
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            min_sup: 1,
            min_confidence: 0.5,
            min_len: 1,
            max_len: None,
        }
    }
}

// Level-wise ECLAT search. Returns the frequent itemsets grouped by length
// (level i holds the (i+1)-itemsets) along with the support of every
// surviving itemset at every level.
pub fn frequent_itemsets(
    transactions: &[Vec<Item>],
    min_sup: u32,
) -> (Vec<Vec<Itemset>>, SupportMap) {
    let mut frequent: Vec<Vec<Itemset>> = Vec::new();
    if min_sup as usize >= transactions.len() {
        return (frequent, SupportMap::default());
    }

    let (mut tid_map, mut support) = vertical_index(transactions, min_sup);
    let mut row: Vec<Itemset> = tid_map.keys().cloned().collect();
    row.sort();
    if row.is_empty() {
        return (frequent, support);
    }

    // No itemset can be longer than the number of frequent items.
    let max_levels = row.len();
    frequent.push(row);

    for _ in 1..max_levels {
        let mut next: Vec<Itemset> = Vec::new();
        {
            let prev = &frequent[frequent.len() - 1];
            for i1 in 0..prev.len() {
                for i2 in (i1 + 1)..prev.len() {
                    let a = &prev[i1];
                    let b = &prev[i2];
                    // Join only itemsets sharing all items but the last.
                    // The level is sorted, so once the prefix diverges no
                    // later pairing in this scan can match either.
                    if a[..a.len() - 1] != b[..b.len() - 1] || a[a.len() - 1] == b[b.len() - 1] {
                        break;
                    }
                    let tids = intersection(&tid_map[a], &tid_map[b]);
                    if tids.len() as u32 > min_sup {
                        let mut candidate = a.clone();
                        candidate.push(b[b.len() - 1]);
                        support.insert(candidate.clone(), tids.len() as u32);
                        tid_map.insert(candidate.clone(), tids);
                        next.push(candidate);
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frequent.push(next);
    }

    (frequent, support)
}

// Full pipeline over one transaction set: vertical index, frequent itemset
// search, rule generation, and (when a taxonomy is supplied) hierarchy
// rules, merged into one set. Parameters are validated before any mining
// work begins.
pub fn eclat(
    transactions: &[Vec<Item>],
    taxonomy: Option<&Taxonomy>,
    params: &Parameters,
) -> Result<RuleSet, MiningError> {
    validate_parameters(params.min_confidence, params.min_len, params.max_len)?;

    let (frequent, support) = frequent_itemsets(transactions, params.min_sup);
    let mut rules = generate_rules(
        &frequent,
        &support,
        params.min_confidence,
        params.min_len,
        params.max_len,
    )?;
    if let Some(taxonomy) = taxonomy {
        let extra = hierarchy_rules(&frequent, taxonomy, &support)?;
        rules.extend(extra);
    }
    Ok(rules)
}
