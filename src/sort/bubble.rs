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

//! Bubble sort.

/// Sort a slice in place by repeatedly swapping adjacent elements.
///
/// After the `i`-th pass the `i` largest elements are in their final
/// position at the end of the slice. The algorithm stops as soon as a pass
/// does not swap anything, so sorted input takes a single pass. Only
/// strictly decreasing neighbours are swapped, hence the sort is stable.
///
/// # Example
///
/// ```
/// use rs_classics::sort::bubble_sort;
///
/// let mut xs = [5, 3, 1, 4, 2];
/// bubble_sort(&mut xs);
/// assert_eq!(xs, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
