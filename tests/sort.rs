/*
 * Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use rs_classics::sort::{bubble_sort, merge_sort, quick_sort, selection_sort, Algorithm};

use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::cmp::Ordering;

/// An element compared by its key only; the tag tracks the input position.
#[derive(Clone, Copy, Debug)]
struct Keyed {
    key: u8,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Keyed) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Keyed) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Keyed) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn test_examples() {
    let mut xs = [5, 3, 1, 4, 2];
    bubble_sort(&mut xs);
    assert_eq!(xs, [1, 2, 3, 4, 5]);

    let mut xs = [5, 3, 1, 4, 2];
    selection_sort(&mut xs);
    assert_eq!(xs, [1, 2, 3, 4, 5]);

    assert_eq!(quick_sort(&[3, 1, 3, 2, 3]), vec![1, 2, 3, 3, 3]);
    assert_eq!(merge_sort(&[4, 2, 4, 1]), vec![1, 2, 4, 4]);
}

#[test]
fn test_random_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let n = rng.gen_range(0..60);
        let data: Vec<i32> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
        let mut expected = data.clone();
        expected.sort();

        for &alg in Algorithm::ALL.iter() {
            assert_eq!(alg.sort(data.clone()), expected, "algorithm: {} input: {:?}", alg, data);
        }
    }
}

#[test]
fn test_sorted_input_unchanged() {
    let sorted: Vec<_> = (0..50).map(|i| i / 3).collect();
    for &alg in Algorithm::ALL.iter() {
        assert_eq!(alg.sort(sorted.clone()), sorted, "algorithm: {}", alg);
    }
}

#[test]
fn test_stability() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let n = rng.gen_range(0..40);
        let data: Vec<_> = (0..n).map(|tag| Keyed { key: rng.gen_range(0..4), tag }).collect();

        for &alg in Algorithm::ALL.iter().filter(|a| a.is_stable()) {
            let sorted = alg.sort(data.clone());
            assert!(
                sorted
                    .windows(2)
                    .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag)),
                "algorithm: {} output: {:?}",
                alg,
                sorted
            );
        }
    }
}

#[test]
fn test_selection_not_stable() {
    // the first 2 is swapped behind the second one
    let data = vec![
        Keyed { key: 2, tag: 0 },
        Keyed { key: 2, tag: 1 },
        Keyed { key: 1, tag: 2 },
    ];
    let tags: Vec<_> = Algorithm::Selection.sort(data).iter().map(|k| k.tag).collect();
    assert_eq!(tags, vec![2, 1, 0]);
}

#[test]
fn test_floats() {
    let data: Vec<_> = vec![2.5, -1.0, 0.0, 2.5, -7.25].into_iter().map(OrderedFloat).collect();
    let expected: Vec<_> = vec![-7.25, -1.0, 0.0, 2.5, 2.5].into_iter().map(OrderedFloat).collect();
    for &alg in Algorithm::ALL.iter() {
        assert_eq!(alg.sort(data.clone()), expected, "algorithm: {}", alg);
    }
}
