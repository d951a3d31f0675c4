use std::fmt;

// Item ids come straight from the input data. Id 0 is reserved as the
// "absent" marker used to pad short rows in tabular storage; it never
// participates in any itemset.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id: id }
    }
    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    // Canonical text form of an itemset: ids comma-joined. Callers pass
    // itemsets that are already sorted.
    pub fn item_vec_to_string(items: &[Item]) -> String {
        items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn test_item_vec_to_string() {
        let items: Vec<Item> = [2, 5, 11].iter().map(|&i| Item::with_id(i)).collect();
        assert_eq!(Item::item_vec_to_string(&items), "2,5,11");
        assert_eq!(Item::item_vec_to_string(&[]), "");
    }

    #[test]
    fn test_null() {
        assert!(Item::null().is_null());
        assert!(!Item::with_id(1).is_null());
    }
}
