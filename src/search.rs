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

//! # Searching a network.
//!
//! The traversal itself is implemented as an iterator in [`bfs`], producing
//! the person records in the order in which they are examined. The functions
//! in this module run that iterator until the first record satisfying a
//! predicate shows up.
//!
//! No search modifies the network: the visited state lives in the search, so
//! the same network can be searched again (or concurrently) without any
//! reset.

pub mod bfs;

use crate::network::Person;
use crate::traits::Directory;

use thiserror::Error;
use tracing::debug;

/// The reasons why a search did not return a person.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The start person is not contained in the network.
    #[error("start node missing: {0:?}")]
    StartNodeNotFound(String),
    /// No person reachable from the start satisfies the predicate.
    #[error("no matching node reachable")]
    NoMatchFound,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Find the nearest seller reachable from `start`.
///
/// This is [`search_by`] with the predicate [`Person::is_seller`].
///
/// # Example
///
/// ```
/// use rs_classics::classes::sellers_example;
/// use rs_classics::search::{search, Error};
///
/// let net = sellers_example();
/// assert_eq!(search(&net, "you"), Ok("julia"));
/// assert_eq!(search(&net, "alex"), Err(Error::NoMatchFound));
/// assert_eq!(search(&net, "carl"), Err(Error::StartNodeNotFound("carl".to_string())));
/// ```
pub fn search<'a, D>(dir: &'a D, start: &str) -> Result<&'a str>
where
    D: Directory + ?Sized,
{
    search_by(dir, start, Person::is_seller)
}

/// Find the nearest person reachable from `start` satisfying `pred`.
///
/// The persons are examined in breadth-first order, i.e. with non-decreasing
/// number of friendship hops from `start`. Persons with the same distance are
/// examined in the order in which they appear in the friend lists. The start
/// person itself is examined first. The first person satisfying `pred` wins.
///
/// # Example
///
/// ```
/// use rs_classics::classes::ring;
/// use rs_classics::search::search_by;
///
/// let net = ring(6);
/// assert_eq!(search_by(&net, "p4", |p| p.name.ends_with('1')), Ok("p1"));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(start = %start))]
pub fn search_by<'a, D, P>(dir: &'a D, start: &str, mut pred: P) -> Result<&'a str>
where
    D: Directory + ?Sized,
    P: FnMut(&Person) -> bool,
{
    let mut it = bfs::start(dir, start)?;
    match it.find(|p| pred(p)) {
        Some(p) => {
            debug!(found = %p.name, examined = it.num_examined(), "search succeeded");
            Ok(p.name.as_str())
        }
        None => {
            debug!(examined = it.num_examined(), "search exhausted");
            Err(Error::NoMatchFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{search, search_by, Error};
    use crate::classes::{complete, sellers_example, star};
    use crate::network::Person;
    use crate::Network;

    #[test]
    fn test_example() {
        let net = sellers_example();
        assert_eq!(search(&net, "you"), Ok("julia"));
        // repeatable, the network is not modified
        assert_eq!(search(&net, "you"), Ok("julia"));
        assert_eq!(search(&net, "bob"), Ok("paul"));
        assert_eq!(search(&net, "jacob"), Ok("julia"));
        assert_eq!(search(&net, "paul"), Ok("paul"));
        assert_eq!(search(&net, "alex"), Err(Error::NoMatchFound));
    }

    #[test]
    fn test_missing_start() {
        let net = sellers_example();
        assert_eq!(search(&net, "Paul"), Err(Error::StartNodeNotFound("Paul".to_string())));
        assert_eq!(search(&Network::new(), ""), Err(Error::StartNodeNotFound("".to_string())));
    }

    #[test]
    fn test_dangling_friends() {
        let net: Network = vec![
            Person::new("a").with_friends(vec!["x", "b"]),
            Person::seller("b").with_friends(vec!["y"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(search(&net, "a"), Ok("b"));
    }

    #[test]
    fn test_cycles_without_seller() {
        assert_eq!(search(&complete(5), "p2"), Err(Error::NoMatchFound));
        assert_eq!(search(&star(4), "p3"), Err(Error::NoMatchFound));
    }

    #[test]
    fn test_predicate_calls() {
        let net = complete(4);
        let mut calls = 0;
        let res = search_by(&net, "p0", |_| {
            calls += 1;
            false
        });
        assert_eq!(res, Err(Error::NoMatchFound));
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::StartNodeNotFound("x".to_string()).to_string(),
            "start node missing: \"x\""
        );
        assert_eq!(Error::NoMatchFound.to_string(), "no matching node reachable");
    }
}
