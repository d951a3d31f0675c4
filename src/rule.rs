use fnv::FnvHashSet;
use item::Item;
use std::fmt;
use std::hash::{Hash, Hasher};
use vec_sets::union;
use vertical_index::SupportMap;

pub type RuleSet = FnvHashSet<Rule>;

// An association rule. Antecedent and consequent are canonically sorted,
// disjoint and non-empty; support counts the transactions containing their
// union. Identity is the (antecedent, consequent) split only.
#[derive(Clone, Debug)]
pub struct Rule {
    antecedent: Vec<Item>,
    consequent: Vec<Item>,
    support: u32,
    confidence: f64,
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the rule's
    // confidence would exceed the min_confidence threshold. Returns None
    // when either itemset is missing from the support table; such splits
    // were pruned by the support filter and produce no rule.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        support: &SupportMap,
        min_confidence: f64,
    ) -> Option<Rule> {
        if antecedent.is_empty() || consequent.is_empty() {
            return None;
        }

        let combined = union(&antecedent, &consequent);
        let combined_support = match support.get(&combined) {
            Some(&count) => count,
            None => return None,
        };
        let antecedent_support = match support.get(&antecedent) {
            Some(&count) => count,
            None => return None,
        };

        let confidence = combined_support as f64 / antecedent_support as f64;
        // The threshold is exclusive throughout the pipeline.
        if confidence <= min_confidence {
            return None;
        }

        Some(Rule {
            antecedent,
            consequent,
            support: combined_support,
            confidence,
        })
    }

    // A hierarchy rule {item} -> {ancestor}. Every transaction containing
    // the item is by definition in the ancestor category, so confidence
    // is exactly 1.0 and support is the item's own support.
    pub fn hierarchy(item: Item, ancestor: Item, support: u32) -> Rule {
        Rule {
            antecedent: vec![item],
            consequent: vec![ancestor],
            support,
            confidence: 1.0,
        }
    }

    pub fn antecedent(&self) -> &[Item] {
        &self.antecedent
    }

    pub fn consequent(&self) -> &[Item] {
        &self.consequent
    }

    pub fn support(&self) -> u32 {
        self.support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    // Canonical export row: `pred_items;suc_items;support;confidence`,
    // items comma-joined, confidence fixed to 4 decimal places.
    pub fn csv_row(&self) -> String {
        format!(
            "{};{};{};{:.4}",
            Item::item_vec_to_string(&self.antecedent),
            Item::item_vec_to_string(&self.consequent),
            self.support,
            self.confidence
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} => {}",
            Item::item_vec_to_string(&self.antecedent),
            Item::item_vec_to_string(&self.consequent)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use item::Item;
    use vertical_index::SupportMap;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    fn support_table() -> SupportMap {
        let mut support = SupportMap::default();
        support.insert(to_item_vec(&[1]), 3);
        support.insert(to_item_vec(&[2]), 2);
        support.insert(to_item_vec(&[1, 2]), 2);
        support
    }

    #[test]
    fn test_make() {
        let support = support_table();
        let rule = Rule::make(to_item_vec(&[2]), to_item_vec(&[1]), &support, 0.5).unwrap();
        assert_eq!(rule.antecedent(), &to_item_vec(&[2])[..]);
        assert_eq!(rule.consequent(), &to_item_vec(&[1])[..]);
        assert_eq!(rule.support(), 2);
        assert_eq!(rule.confidence(), 1.0);
    }

    #[test]
    fn test_make_threshold_is_exclusive() {
        let support = support_table();
        // confidence(1 -> 2) is exactly 2/3; the bound is strict.
        assert!(Rule::make(to_item_vec(&[1]), to_item_vec(&[2]), &support, 2.0 / 3.0).is_none());
        assert!(Rule::make(to_item_vec(&[1]), to_item_vec(&[2]), &support, 0.5).is_some());
    }

    #[test]
    fn test_make_missing_support_is_skipped() {
        let support = support_table();
        assert!(Rule::make(to_item_vec(&[3]), to_item_vec(&[1]), &support, 0.0).is_none());
    }

    #[test]
    fn test_identity_ignores_measures() {
        let support = support_table();
        let a = Rule::make(to_item_vec(&[2]), to_item_vec(&[1]), &support, 0.0).unwrap();
        let b = Rule::hierarchy(Item::with_id(2), Item::with_id(1), 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_csv_row() {
        let support = support_table();
        let rule = Rule::make(to_item_vec(&[1]), to_item_vec(&[2]), &support, 0.1).unwrap();
        assert_eq!(rule.csv_row(), "1;2;2;0.6667");
        let hierarchy = Rule::hierarchy(Item::with_id(2), Item::with_id(11), 2);
        assert_eq!(hierarchy.csv_row(), "2;11;2;1.0000");
    }
}
