//! Grid storage for the percolation simulation.
//!
//! A cell holds either [`FILLED`] (zero) or its original random value in
//! `[1, depth]`, which doubles as its fill priority. Two interchangeable
//! backends exist: a flat row-major array and a vec-of-vecs, kept around so
//! the equivalence checker can cross-validate them.

mod array;
mod list;

pub use array::GridArray;
pub use list::GridList;

use crate::error::{Error, Result};

/// Sentinel value of a filled cell.
pub const FILLED: u32 = 0;

/// Storage backend for a percolation grid.
pub trait GridStore {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn depth(&self) -> u32;

    /// Cell value. Caller guarantees bounds; backends debug-assert.
    fn get(&self, x: usize, y: usize) -> u32;

    /// Overwrite a cell. Caller guarantees bounds.
    fn set(&mut self, x: usize, y: usize, value: u32);

    #[inline]
    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Bounds-checked read for callers outside the fill loop.
    fn try_get(&self, x: usize, y: usize) -> Result<u32> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.get(x, y))
    }

    /// Bounds-checked write.
    fn try_set(&mut self, x: usize, y: usize, value: u32) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set(x, y, value);
        Ok(())
    }

    #[inline]
    fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == FILLED
    }

    /// Whether the cell lies on the outer boundary of the grid.
    #[inline]
    fn on_border(&self, x: usize, y: usize) -> bool {
        x == 0 || x == self.width() - 1 || y == 0 || y == self.height() - 1
    }
}

/// Reject non-positive grid parameters.
pub(crate) fn validate_dims(width: usize, height: usize, depth: u32) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidDimension {
            name: "width",
            value: width as u64,
        });
    }
    if height == 0 {
        return Err(Error::InvalidDimension {
            name: "height",
            value: height as u64,
        });
    }
    if depth == 0 {
        return Err(Error::InvalidDimension {
            name: "depth",
            value: depth as u64,
        });
    }
    Ok(())
}

/// 4-connected in-bounds neighbors (no wrapping: percolation grids have hard
/// edges).
pub fn neighbors4(x: usize, y: usize, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let mut out = [(0usize, 0usize); 4];
    let mut n = 0;
    for (dx, dy) in offsets {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < w && (ny as usize) < h {
            out[n] = (nx as usize, ny as usize);
            n += 1;
        }
    }
    out.into_iter().take(n)
}

/// Whether (x, y) touches the filled region. Used by the rescan engine; the
/// lazy engine tracks this incrementally instead.
pub fn has_filled_neighbor<G: GridStore + ?Sized>(grid: &G, x: usize, y: usize) -> bool {
    neighbors4(x, y, grid.width(), grid.height()).any(|(nx, ny)| grid.is_filled(nx, ny))
}

/// Cell-by-cell equality across (possibly different) backends. Used only for
/// cross-checking engine variants.
pub fn grids_equal<A, B>(a: &A, b: &B) -> bool
where
    A: GridStore + ?Sized,
    B: GridStore + ?Sized,
{
    if a.width() != b.width() || a.height() != b.height() {
        return false;
    }
    for x in 0..a.width() {
        for y in 0..a.height() {
            if a.get(x, y) != b.get(x, y) {
                return false;
            }
        }
    }
    true
}
