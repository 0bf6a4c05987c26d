// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Classic data structures and algorithms: basic containers, breadth-first
//! search in a social network and comparison based sorting.

// # Data structures

pub mod collections;

pub mod traits;
pub use self::traits::Directory;

pub mod network;
pub use self::network::{Network, Person};

pub mod builder;
pub use self::builder::NetworkBuilder;

/// Network classes
pub mod classes;

// # Algorithms

pub mod search;
pub use self::search::{search, search_by};

pub mod sort;
pub use self::sort::{bubble_sort, merge_sort, quick_sort, selection_sort, Algorithm};

// # Input and output

pub mod string;
