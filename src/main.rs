#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::fs;
use std::io::{self, Read};
use std::process::exit;
use std::str::FromStr;

use clap::{App, ArgMatches};

use springrow::{parser, utils, ArrangementCounter, Count, ParseError};

/// The scaled variant of the problem replicates every record five times.
const UNFOLD_FACTOR: usize = 5;

fn main() {
    env_logger::init();

    let matches = App::new("Springrow")
        .version(crate_version!())
        .about("Counts the arrangements of damaged springs in condition records")
        .args_from_usage(
            "[PATH]                'path to the records file (reads stdin when omitted)'
             -u, --unfold          'count the scaled variant: every record expanded five times'
             -f, --factor [FACTOR] 'use a custom unfold factor instead of five'",
        )
        .get_matches();

    let factor = unfold_factor(&matches);
    let path = matches.value_of("PATH");

    match run(path, factor) {
        Ok(total) => println!("{}", total),
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
}

fn run(path: Option<&str>, factor: usize) -> Result<Count, ParseError> {
    let content = read_content(path)?;
    let records = parser::parse_records(&content)?;

    let start = utils::time::now();

    let mut counter = ArrangementCounter::new();
    let mut total: Count = 0;
    for record in &records {
        let record = record.unfold(factor);
        let counted = counter.count_record(&record);
        debug!("{} -> {}", record, counted);
        total += counted;
    }

    if let Some(start) = start {
        info!("Counted {} records in {:?}.", records.len(), start.elapsed());
    }

    let (cache_size, hits, hit_rate) = counter.cache_info();
    info!(
        "Cache size: {}, hits: {} (rate: {:.4}).",
        cache_size, hits, hit_rate
    );

    Ok(total)
}

fn read_content(path: Option<&str>) -> Result<String, io::Error> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            let _ = io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn unfold_factor(matches: &ArgMatches) -> usize {
    if let Some(factor) = parse_arg::<usize>(matches, "factor") {
        return factor;
    }

    if matches.is_present("unfold") {
        UNFOLD_FACTOR
    } else {
        1
    }
}

fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Option<T>
where
    T: FromStr,
{
    if matches.is_present(name) {
        let value = value_t!(matches, name, T).unwrap_or_else(|e| e.exit());
        return Some(value);
    }

    None
}
