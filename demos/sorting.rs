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

use rs_classics::sort::Algorithm;

use rustop::opts;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (args, _) = opts! {
        synopsis "Sort a list of integers";
        opt algorithm:Option<String>, desc:"bubble, selection, quick or merge (default: all)";
        param values:String, desc:"Comma separated list of integers";
    }
    .parse_or_exit();

    let values = args
        .values
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()?;

    let algorithms = match &args.algorithm {
        Some(name) => vec![name.parse::<Algorithm>()?],
        None => Algorithm::ALL.to_vec(),
    };

    for alg in algorithms {
        println!("{:>9}: {:?}", alg.to_string(), alg.sort(values.clone()));
    }

    Ok(())
}
