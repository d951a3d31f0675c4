use fnv::FnvHashMap;
use item::Item;

// Itemsets are sorted, duplicate-free item vectors; equal itemsets always
// compare equal as map keys.
pub type Itemset = Vec<Item>;
// Transaction ids in ascending order.
pub type TidList = Vec<u32>;
pub type TidMap = FnvHashMap<Itemset, TidList>;
pub type SupportMap = FnvHashMap<Itemset, u32>;

// Inverts the transaction table into per-item tid-lists, keeping only items
// whose support strictly exceeds min_sup. Null items are padding and never
// indexed.
pub fn vertical_index(transactions: &[Vec<Item>], min_sup: u32) -> (TidMap, SupportMap) {
    let mut by_item: FnvHashMap<Item, TidList> = FnvHashMap::default();
    for (tid, transaction) in transactions.iter().enumerate() {
        let tid = tid as u32;
        for &item in transaction {
            if item.is_null() {
                continue;
            }
            let tids = by_item.entry(item).or_insert_with(Vec::new);
            // Tids arrive in ascending order; a repeated item within one
            // transaction counts once.
            if tids.last() != Some(&tid) {
                tids.push(tid);
            }
        }
    }

    let mut tid_map = TidMap::default();
    let mut support = SupportMap::default();
    for (item, tids) in by_item {
        if tids.len() as u32 > min_sup {
            support.insert(vec![item], tids.len() as u32);
            tid_map.insert(vec![item], tids);
        }
    }
    (tid_map, support)
}
