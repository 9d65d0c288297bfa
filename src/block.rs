use std::fmt;

use smallvec::SmallVec;

/// One position of a condition record.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    Unknown,
    Empty,
    Filled,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Cell {
    /// The cell may resolve to a gap between runs.
    pub fn can_be_blank(self) -> bool {
        self != Self::Filled
    }

    /// The cell may resolve to a part of a run.
    pub fn can_be_filled(self) -> bool {
        self != Self::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Cell::*;

        let symbol = match self {
            Empty => '.',
            Filled => '#',
            Unknown => '?',
        };
        write!(f, "{}", symbol)
    }
}

/// The length of a single maximal run of `Filled` cells.
#[derive(Debug, PartialEq, Eq, Hash, Default, Clone, Copy)]
pub struct Run(pub usize);

impl Run {
    pub fn size(self) -> usize {
        self.0
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Most records keep their run lengths inline even after unfolding.
pub type RunVec = SmallVec<[Run; 8]>;

/// Ordered lengths of the runs a resolved line must produce, left to right.
/// An empty description means "no filled cells anywhere".
#[derive(Debug, PartialEq, Eq, Hash, Default, Clone)]
pub struct Description {
    pub vec: RunVec,
}

impl Description {
    pub fn new(vec: Vec<Run>) -> Self {
        let mut vec = RunVec::from_vec(vec);
        // zero-length runs carry no information
        vec.retain(|run| run.size() > 0);
        Self { vec }
    }

    /// For every run, the minimum number of cells needed to place it
    /// together with all its predecessors
    /// (a single separator between consecutive runs).
    pub fn partial_sums(&self) -> Vec<usize> {
        self.vec
            .iter()
            .scan(None, |prev, run| {
                let current = if let Some(prev_size) = *prev {
                    prev_size + run.size() + 1
                } else {
                    run.size()
                };
                *prev = Some(current);
                *prev
            })
            .collect()
    }
}
