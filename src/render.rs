//! Minimal textual rendering for debugging and CLI output.

use crate::grid::GridStore;

/// Filled cells as `X`, unfilled as `.`. Top row is the highest `y`.
pub fn render(grid: &dyn GridStore) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            out.push(if grid.is_filled(x, y) { 'X' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Zero-padded cell values, same orientation as [`render`].
pub fn render_numbers(grid: &dyn GridStore) -> String {
    let mut out = String::new();
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            if x > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:02}", grid.get(x, y)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{FILLED, GridArray, GridStore};
    use crate::rng::Rng;

    #[test]
    fn renders_top_row_last_y() {
        let mut rng = Rng::new(5);
        let mut grid = GridArray::new(3, 2, 4, &mut rng).unwrap();
        grid.set(0, 1, FILLED);
        grid.set(2, 0, FILLED);
        assert_eq!(render(&grid), "X..\n..X\n");
    }

    #[test]
    fn numbers_show_cell_values() {
        let mut rng = Rng::new(5);
        let mut grid = GridArray::new(2, 1, 9, &mut rng).unwrap();
        grid.set(0, 0, 7);
        grid.set(1, 0, FILLED);
        assert_eq!(render_numbers(&grid), "07 00\n");
    }
}
