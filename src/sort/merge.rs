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

//! Merge sort.

/// Sort a slice into a new vector using merge sort.
///
/// The sequence is split at `len / 2` (so the left half is never the larger
/// one), both halves are sorted recursively and then merged. On equal front
/// elements the merge takes the one of the *left* half, which makes the sort
/// stable.
///
/// # Example
///
/// ```
/// use rs_classics::sort::merge_sort;
///
/// assert_eq!(merge_sort(&[4, 2, 4, 1]), vec![1, 2, 4, 4]);
/// ```
pub fn merge_sort<T>(data: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if data.len() <= 1 {
        return data.to_vec();
    }

    let (left, right) = data.split_at(data.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

/// Merge two sorted vectors.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
