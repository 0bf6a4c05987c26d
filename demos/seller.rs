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

use rs_classics::classes::sellers_example;
use rs_classics::search::{bfs, search, Error};
use rs_classics::Network;

use rustop::opts;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (args, _) = opts! {
        synopsis "Search the nearest seller in a network of friends";
        opt start:String = "you".to_string(), desc:"Name of the person to start at";
        opt order:bool, desc:"Print the order in which the persons are examined";
        param network:Option<String>, desc:"Network file (default: the built-in example)";
    }
    .parse_or_exit();

    let net: Network = match &args.network {
        Some(file) => fs::read_to_string(file)?.parse()?,
        None => sellers_example(),
    };

    if args.order {
        match bfs::start(&net, &args.start) {
            Ok(it) => {
                let names = it.map(|p| p.name.as_str()).collect::<Vec<_>>();
                println!("Examination order: {}", names.join(" "));
            }
            Err(Error::StartNodeNotFound(_)) => {
                println!("Person not found in the network.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }

    match search(&net, &args.start) {
        Ok(name) => println!("Person {} is a seller!", name),
        Err(Error::NoMatchFound) => println!("Seller not found!"),
        Err(Error::StartNodeNotFound(_)) => println!("Person not found in the network."),
    }

    Ok(())
}
