//! Decoding of the text format: one record per line,
//! `<pattern> <comma-separated-run-lengths>`.

use std::fmt;
use std::io;

use crate::block::{Cell, Description, Run};
use crate::record::Record;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self(format!("{:?}", err))
    }
}

fn parse_cell(symbol: char) -> Result<Cell, ParseError> {
    match symbol {
        '.' => Ok(Cell::Empty),
        '#' => Ok(Cell::Filled),
        '?' => Ok(Cell::Unknown),
        _ => Err(ParseError(format!("Invalid pattern symbol {:?}", symbol))),
    }
}

fn parse_run(size: &str) -> Result<Run, ParseError> {
    size.parse()
        .map(Run)
        .map_err(|err| ParseError(format!("Invalid run length {:?}: {}", size, err)))
}

pub fn parse_record(line: &str) -> Result<Record, ParseError> {
    let mut parts = line.split_whitespace();

    let pattern = parts
        .next()
        .ok_or_else(|| ParseError("Empty record".to_string()))?;
    let lengths = parts
        .next()
        .ok_or_else(|| ParseError("Missing run lengths".to_string()))?;
    if parts.next().is_some() {
        return Err(ParseError(format!("Trailing garbage in record {:?}", line)));
    }

    let cells: Result<_, _> = pattern.chars().map(parse_cell).collect();
    let runs: Result<_, _> = lengths.split(',').map(parse_run).collect();

    Ok(Record::new(cells?, Description::new(runs?)))
}

/// Decodes a whole input, one record per non-blank line.
pub fn parse_records(text: &str) -> Result<Vec<Record>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_number, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            parse_record(line).map_err(|err| ParseError(format!("Line {}: {}", number + 1, err)))
        })
        .collect()
}
