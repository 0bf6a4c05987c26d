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

//! Incremental construction of networks.

use crate::network::{Network, Person};

use std::collections::btree_map::{BTreeMap, Entry};

/// A builder for [`Network`]s.
///
/// Persons are created on first mention: adding a friendship from an unknown
/// person creates a non-seller record for it. The friend itself is only
/// recorded by name and is *not* created, so dangling friends are possible.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    people: BTreeMap<String, Person>,
}

impl NetworkBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        NetworkBuilder::default()
    }

    /// Return the current number of persons.
    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    /// Add a non-seller.
    ///
    /// If the person already exists it is left unchanged.
    pub fn add_person(&mut self, name: &str) -> &mut Person {
        self.entry(name)
    }

    /// Add a seller.
    ///
    /// If the person already exists it is turned into a seller.
    pub fn add_seller(&mut self, name: &str) -> &mut Person {
        let p = self.entry(name);
        p.is_seller = true;
        p
    }

    /// Append `friend` to the friend list of `name`.
    pub fn add_friend(&mut self, name: &str, friend: &str) {
        self.entry(name).friends.push(friend.to_string());
    }

    /// Append several friends to the friend list of `name`.
    pub fn add_friends<I, S>(&mut self, name: &str, friends: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(name).friends.extend(friends.into_iter().map(Into::into));
    }

    /// Turn the builder into a network.
    pub fn into_network(self) -> Network {
        self.people.into_iter().map(|(_, p)| p).collect()
    }

    fn entry(&mut self, name: &str) -> &mut Person {
        match self.people.entry(name.to_string()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(Person::new(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Network;

    #[test]
    fn test_build() {
        let mut b = Network::new_builder();
        b.add_friends("you", vec!["maria", "alex"]);
        b.add_person("maria");
        b.add_seller("alex");
        b.add_friend("maria", "nobody");
        b.add_person("alex");
        assert_eq!(b.num_people(), 3);

        let net = b.into_network();
        assert_eq!(net.len(), 3);
        assert_eq!(net.get("you").unwrap().friends, vec!["maria", "alex"]);
        assert_eq!(net.get("maria").unwrap().friends, vec!["nobody"]);
        assert!(net.is_seller("alex"));
        assert!(!net.contains("nobody"));
    }
}
