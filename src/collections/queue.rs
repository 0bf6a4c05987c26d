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

/// A first-in-first-out work list.
///
/// Items are pushed at the back and popped from the front. All operations
/// should run in (amortized) constant time.
pub trait ItemQueue<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    /// Append an item at the back.
    fn push(&mut self, u: I);

    /// Remove and return the item at the front.
    fn pop(&mut self) -> Option<I>;

    /// Return the item at the front without removing it.
    fn peek(&self) -> Option<&I>;
}

impl<'a, I, Q> ItemQueue<I> for &'a mut Q
where
    Q: ItemQueue<I>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, u: I) {
        (**self).push(u)
    }

    fn pop(&mut self) -> Option<I> {
        (**self).pop()
    }

    fn peek(&self) -> Option<&I> {
        (**self).peek()
    }
}

impl<I> ItemQueue<I> for VecDeque<I> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push(&mut self, u: I) {
        VecDeque::push_back(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        VecDeque::pop_front(self)
    }

    fn peek(&self) -> Option<&I> {
        VecDeque::front(self)
    }
}

/// A FIFO queue.
///
/// # Example
///
/// ```
/// use rs_classics::collections::{Error, Queue};
///
/// let mut q = Queue::new();
/// q.enqueue("maria");
/// q.enqueue("bob");
/// assert_eq!(q.to_string(), "Queue([\"maria\", \"bob\"])");
/// assert_eq!(q.peek(), Ok(&"maria"));
/// assert_eq!(q.dequeue(), Ok("maria"));
/// assert_eq!(q.dequeue(), Ok("bob"));
/// assert_eq!(q.dequeue(), Err(Error::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue { items: VecDeque::new() }
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item)
    }

    /// Remove and return the first item of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Empty)
    }

    /// Return the first item of the queue without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return the number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Return an iterator from the front to the back of the queue.
    pub fn iter(&self) -> vec_deque::Iter<T> {
        self.items.iter()
    }
}

impl<I> ItemQueue<I> for Queue<I> {
    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn clear(&mut self) {
        Queue::clear(self)
    }

    fn push(&mut self, u: I) {
        self.enqueue(u)
    }

    fn pop(&mut self) -> Option<I> {
        self.dequeue().ok()
    }

    fn peek(&self) -> Option<&I> {
        Queue::peek(self).ok()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.items.extend(iter)
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Queue(")?;
        fmt.debug_list().entries(self.items.iter()).finish()?;
        write!(fmt, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemQueue, Queue};
    use crate::collections::Error;
    use std::collections::VecDeque;

    #[test]
    fn test_fifo_order() {
        let mut q: Queue<_> = (1..=3).collect();
        q.enqueue(4);
        assert_eq!(q.len(), 4);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        for i in 1..=4 {
            assert_eq!(q.dequeue(), Ok(i));
        }
        assert!(q.is_empty());
        assert_eq!(q.peek(), Err(Error::Empty));
    }

    #[test]
    fn test_clear() {
        let mut q = Queue::new();
        q.extend(vec!['a', 'b']);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.to_string(), "Queue([])");
    }

    fn drain<Q: ItemQueue<u32>>(mut q: Q, front: u32) -> Vec<u32> {
        q.push(7);
        q.push(8);
        assert_eq!(q.peek(), Some(&front));
        let mut items = vec![];
        while let Some(u) = q.pop() {
            items.push(u);
        }
        items
    }

    #[test]
    fn test_item_queue_impls() {
        assert_eq!(drain(VecDeque::new(), 7), vec![7, 8]);
        assert_eq!(drain(Queue::new(), 7), vec![7, 8]);

        let mut q = Queue::new();
        q.enqueue(1);
        assert_eq!(drain(&mut q, 1), vec![1, 7, 8]);
        assert!(q.is_empty());
    }
}
