//! Fill engine: floods the grid from the center, always filling the
//! lowest-valued cell adjacent to the filled region, until the fill touches
//! the grid border.
//!
//! Two engines share the same selection semantics and random stream:
//! [`fill`] tracks candidates incrementally through a [`Frontier`] index,
//! while [`fill_scan`] rescans the whole grid every step. The rescan engine
//! is the slow reference used for cross-validation.

use std::time::Instant;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::{FILLED, GridStore, has_filled_neighbor};
use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Running,
    Done,
}

/// Result of one completed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOutcome {
    /// Cells filled, including the center seed.
    pub cells_filled: usize,
    /// Original random value of the center cell.
    pub center_value: u32,
    /// The border cell whose fill ended the run.
    pub last: (usize, usize),
}

/// Stepwise fill driver. [`fill`] wraps it; tests step it manually to check
/// the frontier invariant between transitions.
pub struct FillEngine<'a, G: GridStore + ?Sized> {
    grid: &'a mut G,
    rng: &'a mut dyn RandomSource,
    frontier: Frontier,
    state: State,
    cells_filled: usize,
    center_value: u32,
    last: (usize, usize),
}

impl<'a, G: GridStore + ?Sized> FillEngine<'a, G> {
    pub fn new(grid: &'a mut G, rng: &'a mut dyn RandomSource) -> Self {
        Self {
            grid,
            rng,
            frontier: Frontier::new(),
            state: State::NotStarted,
            cells_filled: 0,
            center_value: 0,
            last: (0, 0),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Perform one transition; returns `true` while the fill is still
    /// running. The first call seeds the center cell.
    pub fn step(&mut self) -> Result<bool> {
        let (x, y) = match self.state {
            State::NotStarted => (self.grid.width() / 2, self.grid.height() / 2),
            State::Running => self
                .frontier
                .pop_minimum(self.rng)
                .map_err(|_| Error::FrontierExhausted {
                    filled: self.cells_filled,
                })?,
            State::Done => return Ok(false),
        };

        if self.state == State::NotStarted {
            self.center_value = self.grid.get(x, y);
        }
        self.grid.set(x, y, FILLED);
        self.cells_filled += 1;
        self.last = (x, y);

        // Border fill ends the run immediately; no further candidates are
        // pushed. A 1-wide or 1-tall grid finishes on the seed itself.
        if self.grid.on_border(x, y) {
            self.state = State::Done;
            return Ok(false);
        }
        self.frontier.add_neighbors_of(self.grid, x, y);
        self.state = State::Running;
        Ok(true)
    }

    pub fn run(mut self) -> Result<FillOutcome> {
        let t = Instant::now();
        while self.step()? {}
        let outcome = FillOutcome {
            cells_filled: self.cells_filled,
            center_value: self.center_value,
            last: self.last,
        };
        debug!(
            ms = t.elapsed().as_secs_f64() * 1000.0,
            cells = outcome.cells_filled,
            "fill complete"
        );
        Ok(outcome)
    }
}

/// Fill via the incremental frontier index (the "lazy" engine).
pub fn fill<G: GridStore + ?Sized>(
    grid: &mut G,
    rng: &mut dyn RandomSource,
) -> Result<FillOutcome> {
    FillEngine::new(grid, rng).run()
}

/// Fill by rescanning the entire grid for candidates at every step.
/// Quadratic per step; only useful as a correctness oracle.
pub fn fill_scan<G: GridStore + ?Sized>(
    grid: &mut G,
    rng: &mut dyn RandomSource,
) -> Result<FillOutcome> {
    let (cx, cy) = (grid.width() / 2, grid.height() / 2);
    let center_value = grid.get(cx, cy);
    grid.set(cx, cy, FILLED);
    let mut cells_filled = 1;
    let mut last = (cx, cy);

    while !grid.on_border(last.0, last.1) {
        let (x, y) = choose_cell_scan(grid, rng, cells_filled)?;
        grid.set(x, y, FILLED);
        cells_filled += 1;
        last = (x, y);
    }

    Ok(FillOutcome {
        cells_filled,
        center_value,
        last,
    })
}

/// Collect every minimum-valued unfilled cell adjacent to the filled region
/// (in lexicographic order, matching the frontier's bucket order) and choose
/// one with a single draw.
fn choose_cell_scan<G: GridStore + ?Sized>(
    grid: &G,
    rng: &mut dyn RandomSource,
    filled_so_far: usize,
) -> Result<(usize, usize)> {
    let mut least: Option<u32> = None;
    let mut candidates: Vec<(usize, usize)> = Vec::new();

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let value = grid.get(x, y);
            if value == FILLED || !has_filled_neighbor(grid, x, y) {
                continue;
            }
            match least {
                Some(l) if value > l => {}
                Some(l) if value == l => candidates.push((x, y)),
                _ => {
                    least = Some(value);
                    candidates.clear();
                    candidates.push((x, y));
                }
            }
        }
    }

    if candidates.is_empty() {
        return Err(Error::FrontierExhausted {
            filled: filled_so_far,
        });
    }
    let i = rng.range_usize(candidates.len());
    Ok(candidates[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridArray, GridList, grids_equal};
    use crate::rng::Rng;
    use std::collections::BTreeSet;

    /// Deterministic tie-break: always the last candidate in sorted order.
    struct TakeLast;

    impl RandomSource for TakeLast {
        fn next_u64(&mut self) -> u64 {
            0
        }

        fn range_usize(&mut self, max: usize) -> usize {
            max - 1
        }
    }

    fn filled_set<G: GridStore>(grid: &G) -> BTreeSet<(usize, usize)> {
        let mut set = BTreeSet::new();
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                if grid.is_filled(x, y) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn single_column_fills_one_cell() {
        let mut rng = Rng::new(3);
        let mut grid = GridArray::new(1, 9, 4, &mut rng).unwrap();
        let outcome = fill(&mut grid, &mut rng).unwrap();
        assert_eq!(outcome.cells_filled, 1);
        assert_eq!(outcome.last, (0, 4));
        assert_eq!(filled_set(&grid).len(), 1);
    }

    #[test]
    fn single_row_fills_one_cell() {
        let mut rng = Rng::new(3);
        let mut grid = GridArray::new(9, 1, 4, &mut rng).unwrap();
        let outcome = fill(&mut grid, &mut rng).unwrap();
        assert_eq!(outcome.cells_filled, 1);
        assert_eq!(outcome.last, (4, 0));
    }

    #[test]
    fn terminates_on_border_within_bound() {
        for seed in [1u64, 22, 333, 4444, 55555] {
            let mut rng = Rng::new(seed);
            let mut grid = GridArray::new(21, 17, 5, &mut rng).unwrap();
            let outcome = fill(&mut grid, &mut rng).unwrap();
            assert!(outcome.cells_filled <= 21 * 17);
            let (lx, ly) = outcome.last;
            assert!(grid.on_border(lx, ly));
        }
    }

    #[test]
    fn fill_count_matches_zero_cells() {
        let mut rng = Rng::new(98765);
        let mut grid = GridArray::new(25, 25, 3, &mut rng).unwrap();
        let outcome = fill(&mut grid, &mut rng).unwrap();
        assert_eq!(outcome.cells_filled, filled_set(&grid).len());
    }

    #[test]
    fn center_value_is_preserved() {
        let mut rng = Rng::new(17);
        let mut grid = GridArray::new(11, 11, 6, &mut rng).unwrap();
        let before = grid.get(5, 5);
        let outcome = fill(&mut grid, &mut rng).unwrap();
        assert_eq!(outcome.center_value, before);
        assert!(grid.is_filled(5, 5));
    }

    #[test]
    fn engine_stays_done() {
        let mut rng = Rng::new(3);
        let mut grid = GridArray::new(1, 1, 2, &mut rng).unwrap();
        let mut engine = FillEngine::new(&mut grid, &mut rng);
        assert_eq!(engine.state(), State::NotStarted);
        assert!(!engine.step().unwrap());
        assert_eq!(engine.state(), State::Done);
        assert!(!engine.step().unwrap());
    }

    #[test]
    fn frontier_matches_recomputation_after_every_step() {
        let mut rng = Rng::new(2024);
        let mut grid = GridArray::new(15, 15, 3, &mut rng).unwrap();
        let mut engine = FillEngine::new(&mut grid, &mut rng);
        while engine.step().unwrap() {
            let indexed: BTreeSet<(u32, (usize, usize))> = engine.frontier().iter().collect();
            let snapshot: &GridArray = &*engine.grid;
            let mut expected = BTreeSet::new();
            for x in 0..snapshot.width() {
                for y in 0..snapshot.height() {
                    let value = snapshot.get(x, y);
                    if value != FILLED && has_filled_neighbor(snapshot, x, y) {
                        expected.insert((value, (x, y)));
                    }
                }
            }
            assert_eq!(indexed, expected);
        }
    }

    #[test]
    fn forced_low_value_chain_fills_six_cells() {
        // 5x5, value-2 background, a chain of 1s leading the fill from the
        // center to the left border. With the take-last tie-break the chain
        // is consumed before any background cell, so exactly 6 cells fill.
        let mut rng = Rng::new(0);
        let mut grid = GridList::new(5, 5, 2, &mut rng).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                grid.set(x, y, 2);
            }
        }
        for &(x, y) in &[(2, 1), (1, 2), (1, 1), (1, 3), (0, 3)] {
            grid.set(x, y, 1);
        }

        let mut tie_break = TakeLast;
        let outcome = fill(&mut grid, &mut tie_break).unwrap();
        assert_eq!(outcome.cells_filled, 6);
        assert_eq!(outcome.last, (0, 3));
        let expected: BTreeSet<(usize, usize)> =
            [(2, 2), (2, 1), (1, 2), (1, 3), (1, 1), (0, 3)]
                .into_iter()
                .collect();
        assert_eq!(filled_set(&grid), expected);
    }

    #[test]
    fn scan_engine_agrees_with_lazy_engine() {
        for seed in [7u64, 70, 700] {
            let mut rng_a = Rng::new(seed);
            let mut grid_a = GridArray::new(13, 13, 4, &mut rng_a).unwrap();
            let lazy = fill(&mut grid_a, &mut rng_a).unwrap();

            let mut rng_b = Rng::new(seed);
            let mut grid_b = GridArray::new(13, 13, 4, &mut rng_b).unwrap();
            let scan = fill_scan(&mut grid_b, &mut rng_b).unwrap();

            assert_eq!(lazy, scan);
            assert!(grids_equal(&grid_a, &grid_b));
        }
    }
}
