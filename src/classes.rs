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

//! Some common network classes.
//!
//! Except for [`sellers_example`] the persons are named `p0`, `p1`, ... and
//! nobody is a seller. Use [`Network::get_mut`] to turn some of them into
//! sellers.

use crate::builder::NetworkBuilder;
use crate::network::Network;

fn name(i: usize) -> String {
    format!("p{}", i)
}

fn people(n: usize) -> (NetworkBuilder, Vec<String>) {
    let mut b = Network::new_builder();
    let names: Vec<_> = (0..n).map(name).collect();
    for u in &names {
        b.add_person(u);
    }
    (b, names)
}

/// The small social network of the mango seller example.
///
/// It contains a cycle `you -> maria -> jacob -> anna -> you`, a self loop of
/// `bob` and the two sellers `julia` and `paul`, both at distance 2 from
/// `you`.
pub fn sellers_example() -> Network {
    Network::new_with(|b| {
        b.add_friends("you", vec!["maria", "alex", "bob"]);
        b.add_friends("maria", vec!["bob", "julia", "jacob", "alex"]);
        b.add_person("alex");
        b.add_friends("bob", vec!["paul", "bob", "anna"]);
        b.add_seller("julia");
        b.add_friend("julia", "jacob");
        b.add_friend("jacob", "anna");
        b.add_friend("anna", "you");
        b.add_seller("paul");
    })
}

/// Returns a chain of `n` persons, each the friend of its predecessor.
pub fn path(n: usize) -> Network {
    let (mut b, names) = people(n);
    for (u, v) in names.iter().zip(names.iter().skip(1)) {
        b.add_friend(u, v);
    }
    b.into_network()
}

/// Returns a ring of `n` persons.
///
/// Like [`path`] but the last person is a friend of the first.
pub fn ring(n: usize) -> Network {
    let (mut b, names) = people(n);
    for (u, v) in names.iter().zip(names.iter().cycle().skip(1)) {
        b.add_friend(u, v);
    }
    b.into_network()
}

/// Returns a star with `n` rays.
///
/// The center is `p0`. The center and every ray are mutual friends.
pub fn star(n: usize) -> Network {
    let (mut b, names) = people(n + 1);
    for v in &names[1..] {
        b.add_friend(&names[0], v);
        b.add_friend(v, &names[0]);
    }
    b.into_network()
}

/// Returns `n` persons that are all friends of each other.
pub fn complete(n: usize) -> Network {
    let (mut b, names) = people(n);
    for u in &names {
        b.add_friends(u, names.iter().filter(|&v| v != u).cloned());
    }
    b.into_network()
}
