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

//! Selection sort.

/// Sort a slice in place by repeatedly moving the minimum to the front.
///
/// In step `i` the smallest element of `data[i..]` is swapped to position
/// `i`; on ties the first minimum is taken. The swap may move an element
/// behind others equal to it, so the sort is not stable.
///
/// # Example
///
/// ```
/// use rs_classics::sort::selection_sort;
///
/// let mut xs = vec![5, 3, 1, 4, 2];
/// selection_sort(&mut xs);
/// assert_eq!(xs, vec![1, 2, 3, 4, 5]);
/// ```
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut min = i;
        for j in i + 1..data.len() {
            if data[j] < data[min] {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::selection_sort;

    #[test]
    fn test_duplicates() {
        let mut xs = vec![3, 1, 3, 2, 3, 1];
        selection_sort(&mut xs);
        assert_eq!(xs, vec![1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_sorted_input() {
        let mut xs = vec!["a", "b", "c"];
        selection_sort(&mut xs);
        assert_eq!(xs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_subslice() {
        let mut xs = [9, 4, 2, 7, 0];
        selection_sort(&mut xs[1..4]);
        assert_eq!(xs, [9, 2, 4, 7, 0]);
    }
}
