//! Frontier index: cell value -> set of unfilled coordinates adjacent to the
//! filled region.
//!
//! Invariant: a coordinate is present iff its cell is unfilled and has at
//! least one filled 4-neighbor. A cell's value never changes while unfilled,
//! so each coordinate lives under exactly one key. Emptied buckets are
//! removed so the minimum key is never stale.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::grid::{GridStore, neighbors4};
use crate::rng::RandomSource;

#[derive(Debug, Default)]
pub struct Frontier {
    buckets: BTreeMap<u32, BTreeSet<(usize, usize)>>,
    len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of candidate coordinates across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a candidate under its cell value. Re-inserting a coordinate
    /// already present is a no-op (set semantics).
    pub fn insert(&mut self, value: u32, x: usize, y: usize) {
        if self.buckets.entry(value).or_default().insert((x, y)) {
            self.len += 1;
        }
    }

    /// Push the in-bounds unfilled 4-neighbors of a just-filled cell.
    pub fn add_neighbors_of<G: GridStore + ?Sized>(&mut self, grid: &G, x: usize, y: usize) {
        for (nx, ny) in neighbors4(x, y, grid.width(), grid.height()) {
            let value = grid.get(nx, ny);
            if value != crate::grid::FILLED {
                self.insert(value, nx, ny);
            }
        }
    }

    /// Remove and return one coordinate chosen uniformly at random among the
    /// minimum-valued bucket.
    ///
    /// Always consumes exactly one draw, even for a single candidate, so the
    /// lazy and rescan engines replay the same random stream.
    pub fn pop_minimum(&mut self, rng: &mut dyn RandomSource) -> Result<(usize, usize)> {
        let (&value, bucket) = self.buckets.iter_mut().next().ok_or(Error::FrontierEmpty)?;
        let i = rng.range_usize(bucket.len());
        // BTreeSet iterates in sorted order, matching the rescan engine's
        // lexicographic candidate collection.
        let choice = match bucket.iter().nth(i) {
            Some(&xy) => xy,
            None => return Err(Error::FrontierEmpty),
        };
        bucket.remove(&choice);
        if bucket.is_empty() {
            self.buckets.remove(&value);
        }
        self.len -= 1;
        Ok(choice)
    }

    /// Flat view of every (value, coordinate) entry, for invariant checks.
    pub fn iter(&self) -> impl Iterator<Item = (u32, (usize, usize))> + '_ {
        self.buckets
            .iter()
            .flat_map(|(&value, bucket)| bucket.iter().map(move |&xy| (value, xy)))
    }
}
