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

//! Quick sort.

/// Sort a slice into a new vector using quick sort.
///
/// The last element of each subsequence is the pivot. The elements are split
/// into those strictly less than the pivot, those equal to it and those
/// strictly greater. The less and greater parts are sorted recursively, and
/// the block of elements equal to the pivot goes between them. Because every
/// element equal to the pivot is removed from the recursion, inputs with many
/// duplicates do not degrade, and the relative order of equal elements is
/// kept.
///
/// Already sorted input is the worst case with quadratic running time and
/// linear recursion depth.
///
/// # Example
///
/// ```
/// use rs_classics::sort::quick_sort;
///
/// assert_eq!(quick_sort(&[3, 1, 3, 2, 3]), vec![1, 2, 3, 3, 3]);
/// ```
pub fn quick_sort<T>(data: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let pivot = match data.last() {
        Some(pivot) if data.len() > 1 => pivot,
        _ => return data.to_vec(),
    };

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for x in data {
        match x.cmp(pivot) {
            std::cmp::Ordering::Less => less.push(x.clone()),
            std::cmp::Ordering::Equal => equal.push(x.clone()),
            std::cmp::Ordering::Greater => greater.push(x.clone()),
        }
    }

    let mut sorted = quick_sort(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}
