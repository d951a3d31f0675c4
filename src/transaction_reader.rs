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

use hierarchy::Taxonomy;
use item::Item;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

// Streams a transaction file: one transaction per line, items as
// whitespace-separated integer ids.
pub struct TransactionReader {
    reader: BufReader<File>,
}

impl TransactionReader {
    pub fn new(path: &str) -> io::Result<TransactionReader> {
        let file = File::open(path)?;
        Ok(TransactionReader {
            reader: BufReader::new(file),
        })
    }
}

impl Iterator for TransactionReader {
    type Item = Vec<Item>;
    fn next(&mut self) -> Option<Vec<Item>> {
        loop {
            let mut line = String::new();
            let len = self.reader.read_line(&mut line).unwrap();
            if len == 0 {
                return None;
            }
            let transaction = parse_transaction(&line);
            if !transaction.is_empty() {
                return Some(transaction);
            }
        }
    }
}

// Tokens that don't parse as item ids are padding/absence markers left over
// from fixed-width tabular exports; they are not items.
pub fn parse_transaction(line: &str) -> Vec<Item> {
    let mut items = line
        .split_whitespace()
        .filter_map(|token| token.parse::<u32>().ok())
        .map(Item::with_id)
        .filter(|item| !item.is_null())
        .collect::<Vec<Item>>();

    // Some input files have transactions with duplicate items.
    // Remove any duplicates here.
    items.sort();
    dedupe_sorted(&mut items);
    items
}

// Taxonomy files carry one `child,parent` pair per line, at most one parent
// per child.
pub fn read_taxonomy(path: &str) -> Result<Taxonomy, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut taxonomy = Taxonomy::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (child, parent) = parse_taxonomy_line(&line)?;
        taxonomy.insert(child, parent);
    }
    Ok(taxonomy)
}

fn parse_taxonomy_line(line: &str) -> Result<(Item, Item), Box<dyn Error>> {
    let mut fields = line.split(',');
    let child = match fields.next() {
        Some(field) => field.trim().parse::<u32>()?,
        None => return Err(From::from(format!("malformed taxonomy row: {}", line))),
    };
    let parent = match fields.next() {
        Some(field) => field.trim().parse::<u32>()?,
        None => return Err(From::from(format!("malformed taxonomy row: {}", line))),
    };
    Ok((Item::with_id(child), Item::with_id(parent)))
}

fn dedupe_sorted(v: &mut Vec<Item>) {
    let mut i = 0;
    let mut k = 0;
    while i < v.len() {
        v[k] = v[i];
        while i < v.len() && v[k] == v[i] {
            i += 1;
        }
        k += 1;
    }
    assert!(k <= v.len());
    v.resize(k, Item::null());
}

#[cfg(test)]
mod tests {
    use item::Item;

    fn to_item_vec(nums: &[u32]) -> Vec<Item> {
        nums.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_dedupe_sorted() {
        let cases = [
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![1, 2], vec![1, 2]),
            (vec![1, 1], vec![1]),
            (vec![1, 1, 1], vec![1]),
            (vec![1, 1, 2, 2], vec![1, 2]),
            (vec![1, 2, 3], vec![1, 2, 3]),
            (vec![1, 2, 2, 3], vec![1, 2, 3]),
        ];
        for (mut v, e) in cases.iter().map(|&(ref a, ref b)| (to_item_vec(a), to_item_vec(b))) {
            super::dedupe_sorted(&mut v);
            assert!(v == e);
        }
    }

    #[test]
    fn test_parse_transaction() {
        assert_eq!(super::parse_transaction("1 2 3"), to_item_vec(&[1, 2, 3]));
        assert_eq!(super::parse_transaction("3 1 2 1"), to_item_vec(&[1, 2, 3]));
        // Padding markers and non-numeric tokens are treated as absent.
        assert_eq!(super::parse_transaction("1 NaN 2"), to_item_vec(&[1, 2]));
        assert_eq!(super::parse_transaction("1 0 2"), to_item_vec(&[1, 2]));
        assert_eq!(super::parse_transaction(""), to_item_vec(&[]));
    }

    #[test]
    fn test_parse_taxonomy_line() {
        let (child, parent) = super::parse_taxonomy_line("1,11").unwrap();
        assert_eq!(child, Item::with_id(1));
        assert_eq!(parent, Item::with_id(11));
        assert!(super::parse_taxonomy_line("banana,11").is_err());
        assert!(super::parse_taxonomy_line("7").is_err());
    }
}
