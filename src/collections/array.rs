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

use std::fmt;
use std::iter::FromIterator;
use std::ops::Add;
use std::slice;
use std::vec;

/// A dynamic array with checked element access.
///
/// # Example
///
/// ```
/// use rs_classics::collections::{Array, Error};
///
/// let mut a = Array::new();
/// a.push(1);
/// a.push(2);
/// let b: Array<_> = vec![3].into_iter().collect();
/// let c = a + b;
/// assert_eq!(c.to_string(), "Array([1, 2, 3])");
/// assert_eq!(c.get(5), Err(Error::OutOfRange { index: 5, len: 3 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    data: Vec<T>,
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array { data: Vec::new() }
    }
}

impl<T> Array<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the end of the array.
    pub fn push(&mut self, value: T) {
        self.data.push(value)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the element at position `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Replace the element at position `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.data.len();
        let slot = self.data.get_mut(index).ok_or(Error::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> slice::Iter<T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> Array<T> {
    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let pos = self.data.iter().position(|x| x == value).ok_or(Error::NotFound)?;
        self.data.remove(pos);
        Ok(())
    }

    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }
}

impl<T> Add for Array<T> {
    type Output = Array<T>;

    fn add(mut self, other: Array<T>) -> Array<T> {
        self.data.extend(other.data);
        self
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Array {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for Array<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Array({:?})", self.data)
    }
}
