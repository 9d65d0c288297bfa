use std::iter::once;

use crate::block::{Cell, Description, Run};
use crate::cache::GrowableCache;
use crate::record::Record;

/// The number of valid resolutions of a record.
/// Unfolded records routinely overflow 32 bits.
pub type Count = u64;

/// Subproblem identity: the remaining cells and the remaining runs.
/// Built from content, so identical suffixes reached from different
/// records collapse into a single cache entry.
type Key = (Box<[Cell]>, Box<[Run]>);

/// Counts the ways to resolve every `Unknown` cell of a line so that
/// the maximal runs of `Filled` cells match the description exactly,
/// in the same order, with no extra runs.
///
/// The store of solved subproblems survives between calls:
/// a counter reused across a batch of records
/// speeds up as their suffixes repeat.
#[derive(Debug, Default)]
pub struct ArrangementCounter {
    cache: GrowableCache<Key, Count>,
}

impl ArrangementCounter {
    pub fn new() -> Self {
        Self {
            cache: GrowableCache::with_capacity(4096),
        }
    }

    pub fn count_record(&mut self, record: &Record) -> Count {
        self.count(record.line(), record.description())
    }

    pub fn count(&mut self, line: &[Cell], desc: &Description) -> Count {
        CountJob::new(line, desc).run(&mut self.cache)
    }

    /// (solved subproblems stored, cache hits, hit rate)
    pub fn cache_info(&self) -> (usize, u32, f32) {
        self.cache.info()
    }
}

/// A single record's traversal state: immutable views of the line
/// and the description, plus the minimum number of cells
/// every run suffix still requires.
struct CountJob<'a> {
    line: &'a [Cell],
    runs: &'a [Run],
    min_sizes: Vec<usize>,
}

impl<'a> CountJob<'a> {
    fn new(line: &'a [Cell], desc: &'a Description) -> Self {
        let sums = desc.partial_sums();
        let total = sums.last().copied().unwrap_or(0);

        // min_sizes[run] = cells needed by runs[run..] with their separators
        let min_sizes = once(total)
            .chain(sums.iter().map(|&sum| total.saturating_sub(sum + 1)))
            .collect();

        Self {
            line,
            runs: &desc.vec,
            min_sizes,
        }
    }

    fn run(&self, cache: &mut GrowableCache<Key, Count>) -> Count {
        self.count_from(0, 0, cache)
    }

    /// The number of resolutions of `line[position..]` producing
    /// exactly the runs `runs[run..]`.
    fn count_from(
        &self,
        position: usize,
        run: usize,
        cache: &mut GrowableCache<Key, Count>,
    ) -> Count {
        let line = &self.line[position..];
        let runs = &self.runs[run..];

        if line.is_empty() {
            return if runs.is_empty() { 1 } else { 0 };
        }

        if runs.is_empty() {
            // the rest can only resolve to blanks
            return if line.iter().all(|cell| cell.can_be_blank()) {
                1
            } else {
                0
            };
        }

        // not enough room left for the remaining runs
        if line.len() < self.min_sizes[run] {
            return 0;
        }

        let key: Key = (line.into(), runs.into());
        if let Some(&counted) = cache.get(&key) {
            return counted;
        }

        let mut result = 0;

        if line[0].can_be_blank() {
            result += self.count_from(position + 1, run, cache);
        }

        if line[0].can_be_filled() {
            let size = runs[0].size();
            if self.can_place_run(position, size) {
                // skip the run and the mandatory separator after it
                let next = (position + size + 1).min(self.line.len());
                result += self.count_from(next, run + 1, cache);
            }
        }

        cache.put(key, result);

        result
    }

    /// The run fits at `position`: `size` cells that may be filled,
    /// followed by the line end or by a cell that may be blank.
    fn can_place_run(&self, position: usize, size: usize) -> bool {
        let end = position + size;
        if end > self.line.len() {
            return false;
        }

        if let Some(after) = self.line.get(end) {
            if !after.can_be_blank() {
                return false;
            }
        }

        self.line[position..end]
            .iter()
            .all(|cell| cell.can_be_filled())
    }
}
