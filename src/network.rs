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

//! A social network of named persons.
//!
//! Each person is a record with a name, a seller flag and the names of its
//! friends. The network maps names to records. Friend lists are kept as
//! given: they may contain names not in the network, duplicates and the
//! person itself.

use crate::builder::NetworkBuilder;
use crate::traits::Directory;

use std::collections::btree_map::{self, BTreeMap};
use std::iter::FromIterator;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The record of a single person.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Person {
    /// The name, equal to its key in the network.
    pub name: String,
    /// Whether this person is a seller.
    #[cfg_attr(feature = "serialize", serde(default))]
    pub is_seller: bool,
    /// The names of the friends in the order they are visited.
    #[cfg_attr(feature = "serialize", serde(default))]
    pub friends: Vec<String>,
}

impl Person {
    /// Create a non-seller without friends.
    pub fn new<S: Into<String>>(name: S) -> Person {
        Person {
            name: name.into(),
            ..Person::default()
        }
    }

    /// Create a seller without friends.
    pub fn seller<S: Into<String>>(name: S) -> Person {
        Person {
            is_seller: true,
            ..Person::new(name)
        }
    }

    /// Replace the friend list.
    pub fn with_friends<I>(mut self, friends: I) -> Person
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_seller(&self) -> bool {
        self.is_seller
    }
}

/// A network of persons indexed by name.
///
/// # Example
///
/// ```
/// use rs_classics::{Network, Person};
///
/// let net: Network = vec![
///     Person::new("you").with_friends(vec!["bob"]),
///     Person::seller("bob"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(net.len(), 2);
/// assert!(net.is_seller("bob"));
/// assert!(!net.is_seller("you"));
/// assert!(!net.is_seller("nobody"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Network {
    people: BTreeMap<String, Person>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Network {
        Network::default()
    }

    /// Create a new builder for a network.
    pub fn new_builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Create a new network by passing a builder to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_classics::Network;
    ///
    /// let net = Network::new_with(|b| {
    ///     b.add_person("you");
    ///     b.add_seller("anna");
    ///     b.add_friend("you", "anna");
    /// });
    ///
    /// assert_eq!(net.get("you").unwrap().friends, vec!["anna"]);
    /// ```
    pub fn new_with<F>(f: F) -> Network
    where
        F: FnOnce(&mut NetworkBuilder),
    {
        let mut b = Network::new_builder();
        f(&mut b);
        b.into_network()
    }

    /// Add a person to the network.
    ///
    /// Returns the previous record of that name, if any.
    pub fn insert(&mut self, person: Person) -> Option<Person> {
        self.people.insert(person.name.clone(), person)
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Person> {
        self.people.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.people.contains_key(name)
    }

    /// Return the number of persons.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Return `true` if `name` is in the network and is a seller.
    pub fn is_seller(&self, name: &str) -> bool {
        self.people.get(name).map_or(false, Person::is_seller)
    }

    /// Return an iterator over all persons ordered by name.
    pub fn people(&self) -> btree_map::Values<String, Person> {
        self.people.values()
    }

    /// Return an iterator over all names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.people.keys().map(String::as_str)
    }
}

impl Directory for Network {
    fn person(&self, name: &str) -> Option<&Person> {
        self.get(name)
    }
}

impl FromIterator<Person> for Network {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Network {
            people: iter.into_iter().map(|p| (p.name.clone(), p)).collect(),
        }
    }
}

impl Extend<Person> for Network {
    fn extend<I: IntoIterator<Item = Person>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}
