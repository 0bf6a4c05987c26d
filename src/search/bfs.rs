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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_classics::classes::sellers_example;
//! use rs_classics::search::bfs;
//!
//! let net = sellers_example();
//! let order = bfs::start(&net, "you")
//!     .unwrap()
//!     .map(|p| p.name.as_str())
//!     .collect::<Vec<_>>();
//! assert_eq!(order, vec!["you", "maria", "alex", "bob", "julia", "jacob", "paul", "anna"]);
//! ```

use super::{Error, Result};
use crate::collections::{ItemQueue, VisitedSet};
use crate::network::Person;
use crate::traits::Directory;

use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// BFS iterator with default data structures.
pub type BFSDefault<'a, D> = BFS<'a, D, HashSet<&'a str>, VecDeque<&'a Person>>;

/// The default data structures for BFS.
pub type DefaultData<'a> = (HashSet<&'a str>, VecDeque<&'a Person>);

/// Start and return a BFS iterator using default data structures.
///
/// This is a convenience wrapper around [`start_with_data`] using the default
/// data structures [`DefaultData`].
///
/// # Parameter
/// - `dir`: the network to be searched
/// - `src`: the name of the person at which the search should start
pub fn start<'a, D>(dir: &'a D, src: &str) -> Result<BFSDefault<'a, D>>
where
    D: Directory + ?Sized,
{
    start_with_data(dir, src, DefaultData::default())
}

/// Start and return a BFS iterator with user defined data structures.
///
/// The returned iterator produces the person records in the order in which
/// they are examined, beginning with the start person. Each reachable person
/// is produced exactly once.
///
/// The records waiting for examination are kept in a queue. Examining a
/// record appends *all* of its friends contained in the network to the queue,
/// even if they have been examined before or are already waiting, and marks
/// the record as visited. Records that are already marked when they reach the
/// front of the queue are dropped. Hence the same person may be queued
/// several times, but is examined only once.
///
/// The algorithm requires a pair `(S, Q)` with `S` implementing
/// [`VisitedSet<&str>`][crate::collections::VisitedSet] and `Q` implementing
/// [`ItemQueue<&Person>`][crate::collections::ItemQueue]. Both are cleared
/// when the search starts and can be reused for further searches, see
/// [`BFS::into_data`]. The visited set is keyed by [`Person::name`], so the
/// names of the records must match the names under which the directory
/// returns them.
///
/// Fails with [`Error::StartNodeNotFound`] if `src` is not in the network.
///
/// # Example
///
/// ```
/// use rs_classics::classes::ring;
/// use rs_classics::search::bfs;
/// use std::collections::{BTreeSet, VecDeque};
///
/// let net = ring(4);
/// let mut data = (BTreeSet::new(), VecDeque::new());
/// for src in net.names() {
///     let mut it = bfs::start_with_data(&net, src, data).unwrap();
///     assert_eq!(it.by_ref().count(), 4);
///     data = it.into_data();
/// }
/// ```
pub fn start_with_data<'a, D, S, Q>(dir: &'a D, src: &str, data: (S, Q)) -> Result<BFS<'a, D, S, Q>>
where
    D: Directory + ?Sized,
    S: VisitedSet<&'a str>,
    Q: ItemQueue<&'a Person>,
{
    let (mut visited, mut queue) = data;
    visited.reset();
    queue.clear();

    let src = dir.person(src).ok_or_else(|| Error::StartNodeNotFound(src.to_string()))?;
    debug!(start = %src.name, "start breadth-first search");
    queue.push(src);

    Ok(BFS {
        dir,
        visited,
        queue,
        nexamined: 0,
    })
}

/// The BFS iterator.
pub struct BFS<'a, D, S, Q>
where
    D: Directory + ?Sized,
    S: VisitedSet<&'a str>,
    Q: ItemQueue<&'a Person>,
{
    dir: &'a D,
    visited: S,
    queue: Q,
    nexamined: usize,
}

impl<'a, D, S, Q> Iterator for BFS<'a, D, S, Q>
where
    D: Directory + ?Sized,
    S: VisitedSet<&'a str>,
    Q: ItemQueue<&'a Person>,
{
    type Item = &'a Person;

    fn next(&mut self) -> Option<&'a Person> {
        while let Some(u) = self.queue.pop() {
            if self.visited.is_marked(&u.name) {
                continue;
            }
            trace!(person = %u.name, queued = self.queue.len(), "examine");
            for v in self.dir.friends(u) {
                self.queue.push(v);
            }
            self.visited.mark(&u.name);
            self.nexamined += 1;
            return Some(u);
        }
        None
    }
}

impl<'a, D, S, Q> BFS<'a, D, S, Q>
where
    D: Directory + ?Sized,
    S: VisitedSet<&'a str>,
    Q: ItemQueue<&'a Person>,
{
    /// Run the search completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the number of persons produced so far.
    pub fn num_examined(&self) -> usize {
        self.nexamined
    }

    /// Return `true` if the person has already been examined.
    pub fn is_examined(&self, name: &str) -> bool {
        self.dir
            .person(name)
            .map_or(false, |p| self.visited.is_marked(&p.name))
    }

    /// Return the data structures used in the search.
    pub fn into_data(self) -> (S, Q) {
        (self.visited, self.queue)
    }
}
