use crate::error::Result;
use crate::grid::{GridStore, validate_dims};
use crate::rng::RandomSource;

/// Vec-of-vecs grid, indexed `columns[x][y]`. Slower than [`GridArray`]
/// (one extra indirection per access) but kept as an independent
/// representation for cross-validation.
#[derive(Clone, Debug)]
pub struct GridList {
    columns: Vec<Vec<u32>>,
    depth: u32,
}

impl GridList {
    /// Build a grid with every cell drawn uniformly from `[1, depth]`.
    pub fn new(
        width: usize,
        height: usize,
        depth: u32,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        validate_dims(width, height, depth)?;
        let mut columns = Vec::with_capacity(width);
        for _ in 0..width {
            let mut column = Vec::with_capacity(height);
            for _ in 0..height {
                column.push(rng.int_inclusive(1, depth));
            }
            columns.push(column);
        }
        Ok(Self { columns, depth })
    }
}

impl GridStore for GridList {
    #[inline]
    fn width(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    fn height(&self) -> usize {
        self.columns[0].len()
    }

    #[inline]
    fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u32 {
        debug_assert!(x < self.width() && y < self.height());
        self.columns[x][y]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u32) {
        debug_assert!(x < self.width() && y < self.height());
        self.columns[x][y] = value;
    }
}
