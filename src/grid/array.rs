use crate::error::Result;
use crate::grid::{GridStore, validate_dims};
use crate::rng::RandomSource;

/// Row-major flat grid. No per-cell objects; the fast backend.
#[derive(Clone, Debug)]
pub struct GridArray {
    data: Vec<u32>,
    w: usize,
    h: usize,
    depth: u32,
}

impl GridArray {
    /// Build a grid with every cell drawn uniformly from `[1, depth]`.
    pub fn new(
        width: usize,
        height: usize,
        depth: u32,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        validate_dims(width, height, depth)?;
        let mut data = vec![0u32; width * height];
        // Column-major draw order so every backend consumes the random
        // stream identically.
        for x in 0..width {
            for y in 0..height {
                data[y * width + x] = rng.int_inclusive(1, depth);
            }
        }
        Ok(Self {
            data,
            w: width,
            h: height,
            depth,
        })
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }
}

impl GridStore for GridArray {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }

    #[inline]
    fn height(&self) -> usize {
        self.h
    }

    #[inline]
    fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u32) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }
}
