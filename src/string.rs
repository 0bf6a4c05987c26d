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

//! A small module to read networks from text.
//!
//! See [`from_text`] for a description of the format.
//!
//! *Warning*: the main purpose of this module is its use in documentation
//! comments, tests and the demos. It is not meant for production use.

use crate::network::{Network, Person};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error reading a network from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A non-empty line without `:`.
    #[error("line {line}: missing ':' after the name")]
    MissingSeparator { line: usize },
    /// A name that is empty or contains invalid characters.
    #[error("line {line}: invalid name {name:?}")]
    InvalidName { line: usize, name: String },
    /// A person has been defined twice.
    #[error("line {line}: duplicate person {name:?}")]
    DuplicatePerson { line: usize, name: String },
}

fn check_name(line: usize, name: &str) -> Result<(), Error> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && c != ':' && c != '*' && c != '#');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName {
            line,
            name: name.to_string(),
        })
    }
}

/// Read a network from text.
///
/// Each line defines one person: its name, an optional `*` marking a seller,
/// a `:` and the whitespace separated names of its friends. Everything after
/// a `#` is a comment, empty lines are ignored. Line numbers in errors start
/// at 1.
///
/// Friends need not be defined in the text.
///
/// ```
/// use rs_classics::string::from_text;
///
/// let net = from_text("
///     ## the neighbourhood
///     you:   maria bob  # the closest friends
///     maria: bob
///     bob*:
/// ").unwrap();
///
/// assert_eq!(net.len(), 3);
/// assert!(net.is_seller("bob"));
/// assert_eq!(net.get("you").unwrap().friends, vec!["maria", "bob"]);
/// ```
pub fn from_text(text: &str) -> Result<Network, Error> {
    let mut net = Network::new();

    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let colon = line.find(':').ok_or(Error::MissingSeparator { line: lineno })?;
        let head = line[..colon].trim();
        let (name, is_seller) = match head.strip_suffix('*') {
            Some(name) => (name.trim_end(), true),
            None => (head, false),
        };
        check_name(lineno, name)?;

        let friends = line[colon + 1..].split_whitespace().collect::<Vec<_>>();
        for friend in &friends {
            check_name(lineno, friend)?;
        }

        if net.contains(name) {
            return Err(Error::DuplicatePerson {
                line: lineno,
                name: name.to_string(),
            });
        }

        let mut person = Person::new(name).with_friends(friends);
        person.is_seller = is_seller;
        net.insert(person);
    }

    Ok(net)
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network, Error> {
        from_text(s)
    }
}

/// Write the network in the format read by [`from_text`].
impl fmt::Display for Network {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for p in self.people() {
            write!(fmt, "{}{}:", p.name, if p.is_seller { "*" } else { "" })?;
            for friend in &p.friends {
                write!(fmt, " {}", friend)?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{from_text, Error};
    use crate::classes::sellers_example;
    use crate::Network;

    #[test]
    fn test_round_trip() {
        let net = sellers_example();
        let text = net.to_string();
        assert!(text.contains("julia*: jacob\n"));
        assert!(text.contains("alex:\n"));
        let back: Network = text.parse().unwrap();
        assert_eq!(back, net);
    }

    #[test]
    fn test_comments_and_spacing() {
        let net = from_text("a * : b c # friends of a\n\n  # nothing\nb:a").unwrap();
        assert!(net.is_seller("a"));
        assert!(!net.is_seller("b"));
        assert_eq!(net.get("a").unwrap().friends, vec!["b", "c"]);
        assert_eq!(net.get("b").unwrap().friends, vec!["a"]);
        assert!(!net.contains("c"));
    }

    #[test]
    fn test_comment_lines() {
        let net = from_text("\n    # the neighbourhood\n    you: maria # closest\n    maria*:\n").unwrap();
        assert_eq!(net.len(), 2);
        assert_eq!(net.get("you").unwrap().friends, vec!["maria"]);
        assert!(net.is_seller("maria"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(from_text("a: b\nb c"), Err(Error::MissingSeparator { line: 2 }));
        assert_eq!(
            from_text(": b"),
            Err(Error::InvalidName {
                line: 1,
                name: "".to_string()
            })
        );
        assert_eq!(
            from_text("a**: b"),
            Err(Error::InvalidName {
                line: 1,
                name: "a*".to_string()
            })
        );
        assert_eq!(
            from_text("a: b:c"),
            Err(Error::InvalidName {
                line: 1,
                name: "b:c".to_string()
            })
        );
        assert_eq!(
            from_text("a:\n\na: b"),
            Err(Error::DuplicatePerson {
                line: 3,
                name: "a".to_string()
            })
        );
        assert_eq!(
            Error::MissingSeparator { line: 4 }.to_string(),
            "line 4: missing ':' after the name"
        );
    }
}
