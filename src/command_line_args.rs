// Copyright 2026 The eclat developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption};

pub struct Arguments {
    pub input_file_path: String,
    pub taxonomy_file_path: Option<String>,
    pub output_rules_path: String,
    pub min_support: u32,
    pub min_confidence: f64,
    pub min_len: usize,
    pub max_len: Option<usize>,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        taxonomy_file_path: None,
        output_rules_path: String::new(),
        min_support: 1,
        min_confidence: 0.5,
        min_len: 1,
        max_len: None,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Taxonomy-aware ECLAT association rule mining in Rust.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset: one transaction per line, items as \
                 whitespace-separated integer ids.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.taxonomy_file_path)
            .add_option(
                &["--taxonomy"],
                StoreOption,
                "Optional taxonomy in `child,parent` CSV format. When given, \
                 hierarchy rules are mined as well.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: predecessor;successor;support;confidence.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support count, exclusive. Default 1.",
            )
            .metavar("count");

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1], exclusive. \
                 Default 0.5.",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_len)
            .add_option(
                &["--min-len"],
                Store,
                "Minimum itemset length to generate rules from. Default 1.",
            )
            .metavar("length");

        parser
            .refer(&mut args.max_len)
            .add_option(
                &["--max-len"],
                StoreOption,
                "Maximum itemset length to generate rules from. Defaults to \
                 the deepest frequent level.",
            )
            .metavar("length");

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    if args.min_confidence < 0.0 || args.min_confidence > 1.0 {
        eprintln!("Minimum rule confidence threshold must be in range [0,1]");
        process::exit(1);
    }

    if args.min_len < 1 {
        eprintln!("Minimum itemset length must be at least 1");
        process::exit(1);
    }

    if let Some(max_len) = args.max_len {
        if args.min_len > max_len {
            eprintln!("Minimum itemset length must not exceed maximum itemset length");
            process::exit(1);
        }
    }

    args
}
