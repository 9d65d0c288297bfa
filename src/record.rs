use std::fmt;

use crate::block::{Cell, Description};

/// A single condition record: the line of cells
/// and the run lengths its resolutions must produce.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Record {
    line: Vec<Cell>,
    desc: Description,
}

impl Record {
    pub fn new(line: Vec<Cell>, desc: Description) -> Self {
        Self { line, desc }
    }

    pub fn line(&self) -> &[Cell] {
        &self.line
    }

    pub fn description(&self) -> &Description {
        &self.desc
    }

    /// Expands the record into the scaled variant of the same problem:
    /// `factor` copies of the line joined by a single `Unknown` cell,
    /// the run lengths repeated `factor` times unchanged.
    ///
    /// Factors 0 and 1 both leave the record as it is.
    pub fn unfold(&self, factor: usize) -> Self {
        if factor <= 1 {
            return self.clone();
        }

        let line: Vec<_> = (0..factor)
            .flat_map(|copy| {
                let separator = if copy > 0 { Some(Cell::Unknown) } else { None };
                separator.into_iter().chain(self.line.iter().copied())
            })
            .collect();

        let runs: Vec<_> = (0..factor)
            .flat_map(|_copy| self.desc.vec.iter().copied())
            .collect();

        Self::new(line, Description::new(runs))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.line {
            write!(f, "{}", cell)?;
        }
        write!(f, " ")?;

        let mut runs = self.desc.vec.iter();
        if let Some(first) = runs.next() {
            write!(f, "{}", first)?;
            for run in runs {
                write!(f, ",{}", run)?;
            }
        }
        Ok(())
    }
}
