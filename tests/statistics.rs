//! Large-scale statistical behavior: over many reproducible trials on a
//! 301x301 depth-2 grid, the mean fill count approximates size^2 / 4.

use rayon::prelude::*;

use invperc::fill::fill;
use invperc::grid::GridArray;
use invperc::rng::{Rng, run_seed};

#[test]
fn mean_fill_count_tracks_quarter_area() {
    const TRIALS: u64 = 500;
    const SIZE: usize = 301;
    const DEPTH: u32 = 2;

    let total: usize = (0..TRIALS)
        .into_par_iter()
        .map(|i| {
            let mut rng = Rng::new(run_seed(12345, i));
            let mut grid = GridArray::new(SIZE, SIZE, DEPTH, &mut rng).unwrap();
            fill(&mut grid, &mut rng).unwrap().cells_filled
        })
        .sum();

    let mean = total as f64 / TRIALS as f64;
    let expected = (SIZE * SIZE) as f64 / 4.0;
    let ratio = mean / expected;
    assert!(
        (0.8..=1.2).contains(&ratio),
        "mean fill count {mean:.0} vs expected {expected:.0} (ratio {ratio:.3})"
    );
}
