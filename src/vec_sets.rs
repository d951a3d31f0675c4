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

// Merge-based set operations over sorted, duplicate-free vectors. Both
// itemsets and tid-lists are stored this way, so these run in linear time.

// Assumes both vectors are sorted.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            c.push(b[bp]);
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// Assumes both vectors are sorted.
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len().min(b.len()));
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            ap += 1;
        } else if b[bp] < a[ap] {
            bp += 1;
        } else {
            c.push(a[ap]);
            ap += 1;
            bp += 1;
        }
    }
    c
}

// Removes items in a that are in b. Every item of b must occur in a.
pub fn split_out<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() - b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        if a[ap] < b[bp] {
            c.push(a[ap]);
            ap += 1;
        } else if b[bp] < a[ap] {
            panic!("Tried to remove item that's not in set!");
        } else {
            ap += 1;
            bp += 1;
        }
    }
    c.extend_from_slice(&a[ap..]);
    c
}
