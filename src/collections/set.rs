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

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// The set of items already handled by a search.
///
/// A search owns its visited set, so the searched graph itself is never
/// modified.
pub trait VisitedSet<I>
where
    I: Copy,
{
    /// Return `true` if no item has been marked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of marked items.
    fn len(&self) -> usize;

    /// Unmark all items.
    fn reset(&mut self);

    /// Mark an item as visited.
    ///
    /// Return `true` iff `u` had not been marked before.
    fn mark(&mut self, u: I) -> bool;

    /// Return `true` iff `u` has been marked.
    fn is_marked(&self, u: I) -> bool;
}

impl<'a, I, S> VisitedSet<I> for &'a mut S
where
    S: VisitedSet<I>,
    I: Copy,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn mark(&mut self, u: I) -> bool {
        (**self).mark(u)
    }

    fn is_marked(&self, u: I) -> bool {
        (**self).is_marked(u)
    }
}

impl<I, B> VisitedSet<I> for HashSet<I, B>
where
    I: Copy + Eq + Hash,
    B: BuildHasher,
{
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn reset(&mut self) {
        HashSet::clear(self)
    }

    fn mark(&mut self, u: I) -> bool {
        HashSet::insert(self, u)
    }

    fn is_marked(&self, u: I) -> bool {
        HashSet::contains(self, &u)
    }
}

impl<I> VisitedSet<I> for BTreeSet<I>
where
    I: Copy + Ord,
{
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn reset(&mut self) {
        BTreeSet::clear(self)
    }

    fn mark(&mut self, u: I) -> bool {
        BTreeSet::insert(self, u)
    }

    fn is_marked(&self, u: I) -> bool {
        BTreeSet::contains(self, &u)
    }
}

#[cfg(test)]
mod tests {
    use super::VisitedSet;
    use std::collections::{BTreeSet, HashSet};

    fn check<S: VisitedSet<&'static str>>(mut s: S) {
        assert!(s.is_empty());
        assert!(s.mark("bob"));
        assert!(s.mark("anna"));
        assert!(!s.mark("bob"));
        assert!(s.is_marked("anna"));
        assert!(!s.is_marked("paul"));
        assert_eq!(s.len(), 2);
        s.reset();
        assert!(s.is_empty());
        assert!(!s.is_marked("bob"));
    }

    #[test]
    fn test_hashset() {
        check(HashSet::new());
    }

    #[test]
    fn test_btreeset() {
        check(BTreeSet::new());
    }

    #[test]
    fn test_borrowed() {
        let mut s = HashSet::new();
        check(&mut s);
        s.insert("julia");
        assert!(s.is_marked("julia"));
    }
}
