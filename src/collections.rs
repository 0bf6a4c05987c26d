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

//! Basic containers and the traits of the data structures used in algorithms.
//!
//! The traits [`ItemQueue`] and [`VisitedSet`] describe the internal data
//! structures of the search algorithms, so that a caller can supply (and
//! reuse) its own. The containers [`Array`], [`Queue`] and [`Deque`] are thin
//! wrappers around the standard collections with checked accessors.

mod array;
mod deque;
mod queue;
mod set;

pub use self::array::Array;
pub use self::deque::Deque;
pub use self::queue::{ItemQueue, Queue};
pub use self::set::VisitedSet;

use thiserror::Error;

/// Error of a checked container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The container has no elements.
    #[error("container is empty")]
    Empty,
    /// The requested element does not occur in the container.
    #[error("element not found")]
    NotFound,
    /// An index is beyond the end of the container.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
