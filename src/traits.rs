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

//! Traits for the suppliers of graph data.

use crate::network::Person;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A lookup of person records by name.
///
/// This is all a search needs to know about a graph: for a given name the
/// record containing the seller flag and the names of the friends. Whether
/// the records are stored in a [`Network`][crate::Network], a plain map or
/// are generated on the fly does not matter.
///
/// Friend names returned by a record need not exist in the directory.
pub trait Directory {
    /// Return the record of the person with the given name.
    fn person(&self, name: &str) -> Option<&Person>;

    /// Return `true` iff the directory contains a person with the given name.
    fn contains(&self, name: &str) -> bool {
        self.person(name).is_some()
    }

    /// Return the existing friends of a person.
    ///
    /// Names that do not resolve to a record are skipped; duplicates are
    /// returned as often as they are listed.
    fn friends<'a>(&'a self, person: &'a Person) -> Friends<'a, Self> {
        Friends {
            dir: self,
            names: person.friends.iter(),
        }
    }
}

/// Iterator over the resolved friends of a person.
pub struct Friends<'a, D: ?Sized> {
    dir: &'a D,
    names: std::slice::Iter<'a, String>,
}

impl<'a, D> Iterator for Friends<'a, D>
where
    D: Directory + ?Sized,
{
    type Item = &'a Person;

    fn next(&mut self) -> Option<&'a Person> {
        let dir = self.dir;
        self.names.by_ref().find_map(|name| dir.person(name))
    }
}

impl<'d, D> Directory for &'d D
where
    D: Directory + ?Sized,
{
    fn person(&self, name: &str) -> Option<&Person> {
        (**self).person(name)
    }
}

impl<S> Directory for HashMap<String, Person, S>
where
    S: BuildHasher,
{
    fn person(&self, name: &str) -> Option<&Person> {
        self.get(name)
    }
}

impl Directory for BTreeMap<String, Person> {
    fn person(&self, name: &str) -> Option<&Person> {
        self.get(name)
    }
}
