use errors::MiningError;
use fnv::{FnvHashMap, FnvHashSet};
use item::Item;
use rule::{Rule, RuleSet};
use vertical_index::{Itemset, SupportMap};

// Child to parent; items without an entry are roots. Each chain must be
// acyclic.
pub type Taxonomy = FnvHashMap<Item, Item>;

// Memoizes each item's full ancestor set across the pairwise scan. Lives
// only for one miner invocation.
pub struct AncestorCache<'a> {
    taxonomy: &'a Taxonomy,
    cache: FnvHashMap<Item, FnvHashSet<Item>>,
}

impl<'a> AncestorCache<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> AncestorCache<'a> {
        AncestorCache {
            taxonomy,
            cache: FnvHashMap::default(),
        }
    }

    // Walks the parent chain up to the root, reusing any ancestor set
    // already computed along the way. A chain that revisits an item is
    // rejected rather than looped on.
    pub fn ancestors(&mut self, item: Item) -> Result<FnvHashSet<Item>, MiningError> {
        if let Some(ancestors) = self.cache.get(&item) {
            return Ok(ancestors.clone());
        }

        let mut ancestors = FnvHashSet::default();
        let mut current = item;
        while let Some(&parent) = self.taxonomy.get(&current) {
            if parent == item || !ancestors.insert(parent) {
                return Err(MiningError::CyclicTaxonomy(item));
            }
            if let Some(cached) = self.cache.get(&parent) {
                ancestors.extend(cached.iter().cloned());
                break;
            }
            current = parent;
        }

        self.cache.insert(item, ancestors.clone());
        Ok(ancestors)
    }
}

// Derives `{item} -> {common ancestor}` rules from the frequent 2-itemset
// level: for each frequent pair whose members share an ancestor, both
// members generalize to it with confidence 1.0. The same (item, ancestor)
// rule can arise from several pairs, so results land in a set.
pub fn hierarchy_rules(
    frequent: &[Vec<Itemset>],
    taxonomy: &Taxonomy,
    support: &SupportMap,
) -> Result<RuleSet, MiningError> {
    let mut rules = RuleSet::default();
    if frequent.len() < 2 {
        return Ok(rules);
    }

    let mut cache = AncestorCache::new(taxonomy);
    for pair in &frequent[1] {
        let (a, b) = (pair[0], pair[1]);
        let a_ancestors = cache.ancestors(a)?;
        let b_ancestors = cache.ancestors(b)?;
        for &ancestor in a_ancestors.intersection(&b_ancestors) {
            if let Some(&a_support) = support.get(&vec![a]) {
                rules.insert(Rule::hierarchy(a, ancestor, a_support));
            }
            if let Some(&b_support) = support.get(&vec![b]) {
                rules.insert(Rule::hierarchy(b, ancestor, b_support));
            }
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::{hierarchy_rules, AncestorCache, Taxonomy};
    use eclat::frequent_itemsets;
    use errors::MiningError;
    use fnv::FnvHashSet;
    use item::Item;
    use rule::RuleSet;

    fn to_transactions(rows: &[&[u32]]) -> Vec<Vec<Item>> {
        rows.iter()
            .map(|row| row.iter().map(|&i| Item::with_id(i)).collect())
            .collect()
    }

    fn to_taxonomy(pairs: &[(u32, u32)]) -> Taxonomy {
        pairs
            .iter()
            .map(|&(child, parent)| (Item::with_id(child), Item::with_id(parent)))
            .collect()
    }

    fn to_item_set(nums: &[u32]) -> FnvHashSet<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    fn assert_has_rule(rules: &RuleSet, ant: u32, con: u32, sup: u32) {
        let ant = vec![Item::with_id(ant)];
        let con = vec![Item::with_id(con)];
        let rule = rules
            .iter()
            .find(|r| r.antecedent() == &ant[..] && r.consequent() == &con[..])
            .unwrap_or_else(|| panic!("missing rule {:?} => {:?}", ant, con));
        assert_eq!(rule.support(), sup);
        assert_eq!(rule.confidence(), 1.0);
    }

    #[test]
    fn test_ancestors() {
        let taxonomy = to_taxonomy(&[(1, 11), (2, 11), (3, 33), (11, 22)]);
        let mut cache = AncestorCache::new(&taxonomy);
        assert_eq!(cache.ancestors(Item::with_id(1)).unwrap(), to_item_set(&[11, 22]));
        assert_eq!(cache.ancestors(Item::with_id(2)).unwrap(), to_item_set(&[11, 22]));
        assert_eq!(cache.ancestors(Item::with_id(3)).unwrap(), to_item_set(&[33]));
        // Roots have no ancestors.
        assert_eq!(cache.ancestors(Item::with_id(22)).unwrap(), to_item_set(&[]));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let taxonomy = to_taxonomy(&[(1, 2), (2, 3), (3, 2)]);
        let mut cache = AncestorCache::new(&taxonomy);
        assert_eq!(
            cache.ancestors(Item::with_id(1)),
            Err(MiningError::CyclicTaxonomy(Item::with_id(1)))
        );

        let taxonomy = to_taxonomy(&[(1, 1)]);
        let mut cache = AncestorCache::new(&taxonomy);
        assert!(cache.ancestors(Item::with_id(1)).is_err());
    }

    #[test]
    fn test_hierarchy_rules() {
        let transactions = to_transactions(&[&[1, 2], &[1, 2], &[1, 3]]);
        let taxonomy = to_taxonomy(&[(1, 11), (2, 11), (3, 33), (11, 22)]);
        let (frequent, support) = frequent_itemsets(&transactions, 1);
        let rules = hierarchy_rules(&frequent, &taxonomy, &support).unwrap();

        assert_eq!(rules.len(), 4);
        assert_has_rule(&rules, 1, 11, 3);
        assert_has_rule(&rules, 2, 11, 2);
        assert_has_rule(&rules, 1, 22, 3);
        assert_has_rule(&rules, 2, 22, 2);
    }

    #[test]
    fn test_hierarchy_rules_reach_through_second_chain() {
        let transactions = to_transactions(&[&[1, 2], &[1, 2], &[1, 3]]);
        let taxonomy = to_taxonomy(&[(1, 11), (2, 11), (3, 33), (11, 22), (33, 22)]);
        // min_sup=0 keeps item 3 and the pair (1,3).
        let (frequent, support) = frequent_itemsets(&transactions, 0);
        let rules = hierarchy_rules(&frequent, &taxonomy, &support).unwrap();

        assert_eq!(rules.len(), 5);
        assert_has_rule(&rules, 1, 11, 3);
        assert_has_rule(&rules, 2, 11, 2);
        assert_has_rule(&rules, 1, 22, 3);
        assert_has_rule(&rules, 2, 22, 2);
        assert_has_rule(&rules, 3, 22, 1);
    }

    #[test]
    fn test_no_pairs_means_no_rules() {
        let transactions = to_transactions(&[&[1], &[2]]);
        let taxonomy = to_taxonomy(&[(1, 11), (2, 11)]);
        let (frequent, support) = frequent_itemsets(&transactions, 0);
        assert_eq!(frequent.len(), 1);
        let rules = hierarchy_rules(&frequent, &taxonomy, &support).unwrap();
        assert!(rules.is_empty());
    }
}
