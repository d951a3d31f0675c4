extern crate argparse;
extern crate fnv;
extern crate itertools;
extern crate rayon;

mod command_line_args;
mod eclat;
mod errors;
mod generate_rules;
mod hierarchy;
mod item;
mod rule;
mod transaction_reader;
mod vec_sets;
mod vertical_index;

use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use eclat::eclat;
use eclat::Parameters;
use item::Item;
use rule::Rule;
use rule::RuleSet;
use transaction_reader::read_taxonomy;
use transaction_reader::TransactionReader;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;

fn mine_dataset(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let transactions: Vec<Vec<Item>> = TransactionReader::new(&args.input_file_path)?.collect();
    println!(
        "Loaded {} transactions in {} seconds.",
        transactions.len(),
        timer.elapsed().as_secs()
    );

    let taxonomy = match args.taxonomy_file_path {
        Some(ref path) => {
            println!("Loading taxonomy: {}", path);
            Some(read_taxonomy(path)?)
        }
        None => None,
    };

    let params = Parameters {
        min_sup: args.min_support,
        min_confidence: args.min_confidence,
        min_len: args.min_len,
        max_len: args.max_len,
    };

    println!("Mining association rules...");
    let timer = Instant::now();
    let rules = eclat(&transactions, taxonomy.as_ref(), &params)?;
    println!(
        "Mined {} rules in {} seconds.",
        rules.len(),
        timer.elapsed().as_secs()
    );

    write_rules(&rules, &args.output_rules_path)?;
    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn write_rules(rules: &RuleSet, path: &str) -> Result<(), Box<dyn Error>> {
    // Rule sets are unordered; sort rows so repeated runs produce
    // byte-identical files.
    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by(|a, b| {
        (a.antecedent(), a.consequent()).cmp(&(b.antecedent(), b.consequent()))
    });

    let mut output = File::create(path)?;
    writeln!(output, "predecessor;successor;support;confidence")?;
    for rule in sorted {
        writeln!(output, "{}", rule.csv_row())?;
    }
    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_dataset(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
