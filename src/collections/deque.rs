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

use super::{Error, Result};

use std::collections::vec_deque::{self, VecDeque};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Bound, RangeBounds};

/// A double-ended queue.
///
/// # Example
///
/// ```
/// use rs_classics::collections::Deque;
///
/// let mut d: Deque<_> = vec![2, 3].into_iter().collect();
/// d.push_front(1);
/// d.push_back(4);
/// d.rotate(1);
/// assert_eq!(d.to_string(), "Deque([4, 1, 2, 3])");
/// assert_eq!(d.index(&2, ..), Ok(2));
/// assert_eq!(d.pop_front(), Ok(4));
/// assert_eq!(d.pop_back(), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque { items: VecDeque::new() }
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element at the back.
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item)
    }

    /// Add an element at the front.
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item)
    }

    /// Remove and return the element at the back.
    pub fn pop_back(&mut self) -> Result<T> {
        self.items.pop_back().ok_or(Error::Empty)
    }

    /// Remove and return the element at the front.
    pub fn pop_front(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        self.items.make_contiguous().reverse()
    }

    /// Rotate the deque `n` steps to the right.
    ///
    /// A negative `n` rotates to the left. Rotating by more than the length
    /// wraps around.
    pub fn rotate(&mut self, n: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let k = n.unsigned_abs() % len;
        if n >= 0 {
            self.items.rotate_right(k)
        } else {
            self.items.rotate_left(k)
        }
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    pub fn iter(&self) -> vec_deque::Iter<T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Deque<T> {
    /// Return the position of the first occurrence of `item` in `range`.
    ///
    /// The range is clamped to the length of the deque. Searching an empty
    /// deque fails with [`Error::Empty`], a missing element with
    /// [`Error::NotFound`].
    pub fn index<R>(&self, item: &T, range: R) -> Result<usize>
    where
        R: RangeBounds<usize>,
    {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        let len = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        self.items
            .iter()
            .enumerate()
            .take(end)
            .skip(start)
            .find(|(_, x)| *x == item)
            .map(|(i, _)| i)
            .ok_or(Error::NotFound)
    }

    /// Return the number of occurrences of `item`.
    pub fn count(&self, item: &T) -> usize {
        self.items.iter().filter(|&x| x == item).count()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Deque {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for Deque<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Deque(")?;
        fmt.debug_list().entries(self.items.iter()).finish()?;
        write!(fmt, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Deque;
    use crate::collections::Error;
    use std::ops::Bound;

    fn items(d: &Deque<i32>) -> Vec<i32> {
        d.iter().copied().collect()
    }

    #[test]
    fn test_both_ends() {
        let mut d = Deque::new();
        assert_eq!(d.pop_back(), Err(Error::Empty));
        assert_eq!(d.pop_front(), Err(Error::Empty));
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(items(&d), vec![1, 2, 3]);
        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_rotate() {
        let mut d: Deque<_> = (1..=5).collect();
        d.rotate(2);
        assert_eq!(items(&d), vec![4, 5, 1, 2, 3]);
        d.rotate(-2);
        assert_eq!(items(&d), vec![1, 2, 3, 4, 5]);
        d.rotate(-6);
        assert_eq!(items(&d), vec![2, 3, 4, 5, 1]);
        d.rotate(10);
        assert_eq!(items(&d), vec![2, 3, 4, 5, 1]);

        let mut e: Deque<i32> = Deque::new();
        e.rotate(3);
        assert!(e.is_empty());
    }

    #[test]
    fn test_reverse() {
        let mut d: Deque<_> = (1..=4).collect();
        d.pop_front().unwrap();
        d.push_front(0);
        d.reverse();
        assert_eq!(items(&d), vec![4, 3, 2, 0]);
    }

    #[test]
    fn test_index_and_count() {
        let d: Deque<_> = vec![5, 7, 5, 9, 5].into_iter().collect();
        assert_eq!(d.index(&5, ..), Ok(0));
        assert_eq!(d.index(&5, 1..), Ok(2));
        assert_eq!(d.index(&5, 3..), Ok(4));
        assert_eq!(d.index(&9, ..3), Err(Error::NotFound));
        assert_eq!(d.index(&9, 1..=3), Ok(3));
        assert_eq!(d.index(&5, 10..), Err(Error::NotFound));
        assert_eq!(d.index(&8, ..), Err(Error::NotFound));
        assert_eq!(d.count(&5), 3);
        assert_eq!(d.count(&8), 0);
        assert_eq!(d.index(&9, 0..=usize::MAX), Ok(3));
        assert_eq!(
            d.index(&5, (Bound::Excluded(usize::MAX), Bound::Unbounded)),
            Err(Error::NotFound)
        );
        assert_eq!(d.index(&7, (Bound::Excluded(0), Bound::Included(usize::MAX))), Ok(1));

        let e: Deque<i32> = Deque::new();
        assert_eq!(e.index(&1, ..), Err(Error::Empty));
        assert_eq!(e.count(&1), 0);
    }

    #[test]
    fn test_display() {
        let mut d: Deque<_> = "ab".chars().collect();
        assert_eq!(d.to_string(), "Deque(['a', 'b'])");
        d.clear();
        assert_eq!(d.to_string(), "Deque([])");
    }
}
