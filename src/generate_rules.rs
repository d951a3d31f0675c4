use errors::MiningError;
use itertools::Itertools;
use rayon::prelude::*;
use rule::{Rule, RuleSet};
use std::cmp;
use vec_sets::split_out;
use vertical_index::{Itemset, SupportMap};

// Checks the rule-generation thresholds before any mining work starts.
pub fn validate_parameters(
    min_confidence: f64,
    min_len: usize,
    max_len: Option<usize>,
) -> Result<(), MiningError> {
    if !(min_confidence >= 0.0 && min_confidence <= 1.0) {
        return Err(MiningError::InvalidParameter(format!(
            "min_confidence must be in [0,1], got {}",
            min_confidence
        )));
    }
    if min_len < 1 {
        return Err(MiningError::InvalidParameter(format!(
            "min_len must be at least 1, got {}",
            min_len
        )));
    }
    if let Some(max_len) = max_len {
        if min_len > max_len {
            return Err(MiningError::InvalidParameter(format!(
                "min_len ({}) must not exceed max_len ({})",
                min_len, max_len
            )));
        }
    }
    Ok(())
}

// Enumerates every antecedent/consequent split of every frequent itemset
// whose length lies in [min_len, max_len], keeping rules whose confidence
// strictly exceeds min_confidence. Itemsets are independent of each other
// and only read the support table, so levels are walked in parallel; the
// result is a set, so rule membership does not depend on scan order.
pub fn generate_rules(
    frequent: &[Vec<Itemset>],
    support: &SupportMap,
    min_confidence: f64,
    min_len: usize,
    max_len: Option<usize>,
) -> Result<RuleSet, MiningError> {
    validate_parameters(min_confidence, min_len, max_len)?;

    let deepest = frequent.len();
    if min_len > deepest {
        return Ok(RuleSet::default());
    }
    let last = cmp::min(max_len.unwrap_or(deepest), deepest);

    let rules: Vec<Rule> = frequent[min_len - 1..last]
        .par_iter()
        .flat_map(|level| {
            level
                .par_iter()
                .flat_map(|itemset| rules_for_itemset(itemset, support, min_confidence))
        })
        .collect();

    Ok(rules.into_iter().collect())
}

// All rules derivable from one itemset: every non-empty proper subset is a
// candidate consequent, the antecedent is its complement. Splits whose
// antecedent was pruned from the support table yield no rule.
fn rules_for_itemset(itemset: &Itemset, support: &SupportMap, min_confidence: f64) -> Vec<Rule> {
    let mut rules: Vec<Rule> = Vec::new();
    for size in 1..itemset.len() {
        for consequent in itemset.iter().cloned().combinations(size) {
            let antecedent = split_out(itemset, &consequent);
            if let Some(rule) = Rule::make(antecedent, consequent, support, min_confidence) {
                rules.push(rule);
            }
        }
    }
    rules
}
