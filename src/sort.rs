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

//! # Comparison based sorting algorithms.
//!
//! All algorithms sort in ascending order with respect to [`Ord`].
//!
//! | Algorithm        | Time (avg)      | Time (worst) | Extra space | In place | Stable |
//! |------------------|-----------------|--------------|-------------|----------|--------|
//! | [`bubble_sort`]  | O(n²)           | O(n²)        | O(1)        | yes      | yes    |
//! | [`selection_sort`] | O(n²)         | O(n²)        | O(1)        | yes      | no     |
//! | [`quick_sort`]   | O(n log n)      | O(n²)        | O(n)        | no       | yes    |
//! | [`merge_sort`]   | O(n log n)      | O(n log n)   | O(n)        | no       | yes    |
//!
//! The in-place algorithms work on mutable slices, the others return a new
//! vector. [`Algorithm`] selects one of them at runtime.

mod bubble;
mod merge;
mod quick;
mod selection;

pub use self::bubble::bubble_sort;
pub use self::merge::merge_sort;
pub use self::quick::quick_sort;
pub use self::selection::selection_sort;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace_span;

/// A sorting algorithm.
///
/// # Example
///
/// ```
/// use rs_classics::sort::Algorithm;
///
/// for alg in Algorithm::ALL.iter() {
///     assert_eq!(alg.sort(vec![5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
/// }
///
/// let alg: Algorithm = "merge".parse().unwrap();
/// assert_eq!(alg, Algorithm::Merge);
/// assert_eq!(alg.to_string(), "merge");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Quick,
    Merge,
}

impl Algorithm {
    /// All algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Sort `data` in ascending order.
    pub fn sort<T>(self, mut data: Vec<T>) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let _span = trace_span!("sort", algorithm = %self, len = data.len()).entered();
        match self {
            Algorithm::Bubble => {
                bubble_sort(&mut data);
                data
            }
            Algorithm::Selection => {
                selection_sort(&mut data);
                data
            }
            Algorithm::Quick => quick_sort(&data),
            Algorithm::Merge => merge_sort(&data),
        }
    }

    /// Return `true` if equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        self != Algorithm::Selection
    }

    /// Return `true` if the algorithm works on the input sequence itself.
    pub fn is_in_place(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Selection)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// Error parsing an algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sorting algorithm: {0:?} (expected: bubble, selection, quick or merge)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" | "select" => Ok(Algorithm::Selection),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, ParseAlgorithmError};

    #[test]
    fn test_parse() {
        for &alg in Algorithm::ALL.iter() {
            assert_eq!(alg.to_string().parse(), Ok(alg));
        }
        assert_eq!(" Select".parse(), Ok(Algorithm::Selection));
        assert_eq!(
            "heap".parse::<Algorithm>(),
            Err(ParseAlgorithmError("heap".to_string()))
        );
    }

    #[test]
    fn test_properties() {
        let in_place: Vec<_> = Algorithm::ALL.iter().copied().filter(|a| a.is_in_place()).collect();
        assert_eq!(in_place, vec![Algorithm::Bubble, Algorithm::Selection]);
        assert!(!Algorithm::Selection.is_stable());
        assert!(Algorithm::Merge.is_stable());
    }

    #[test]
    fn test_trivial_inputs() {
        for &alg in Algorithm::ALL.iter() {
            assert_eq!(alg.sort(Vec::<u8>::new()), Vec::<u8>::new());
            assert_eq!(alg.sort(vec!['x']), vec!['x']);
            assert_eq!(alg.sort(vec![2, 1]), vec![1, 2]);
        }
    }

    #[test]
    fn test_strings() {
        let words = vec!["pear", "apple", "fig", "apple"];
        for &alg in Algorithm::ALL.iter() {
            assert_eq!(alg.sort(words.clone()), vec!["apple", "apple", "fig", "pear"]);
        }
    }
}
