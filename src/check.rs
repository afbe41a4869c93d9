//! Equivalence checker: cross-validates engine/representation variants that
//! were run with identical seeds. A development-time oracle, not a runtime
//! component.

use crate::error::{Error, Result};
use crate::grid::GridStore;

/// Compare every labelled grid against the first one. Returns a
/// human-readable line per disagreement; empty means all grids agree.
pub fn check_equivalent(grids: &[(&str, &dyn GridStore)]) -> Vec<String> {
    let mut mismatches = Vec::new();
    let Some((&(ref_label, reference), rest)) = grids.split_first() else {
        return mismatches;
    };
    for &(label, grid) in rest {
        if let Some(line) = describe_mismatch(ref_label, reference, label, grid) {
            mismatches.push(line);
        }
    }
    mismatches
}

/// Like [`check_equivalent`] but treats any disagreement as the
/// implementation bug it is.
pub fn ensure_equivalent(grids: &[(&str, &dyn GridStore)]) -> Result<()> {
    let mismatches = check_equivalent(grids);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(Error::InconsistentGrids(mismatches))
    }
}

fn describe_mismatch(
    ref_label: &str,
    reference: &dyn GridStore,
    label: &str,
    grid: &dyn GridStore,
) -> Option<String> {
    if reference.width() != grid.width() || reference.height() != grid.height() {
        return Some(format!(
            "{label} is {}x{} but {ref_label} is {}x{}",
            grid.width(),
            grid.height(),
            reference.width(),
            reference.height(),
        ));
    }
    let mut differing = 0usize;
    let mut first = None;
    for x in 0..reference.width() {
        for y in 0..reference.height() {
            if reference.get(x, y) != grid.get(x, y) {
                differing += 1;
                if first.is_none() {
                    first = Some((x, y));
                }
            }
        }
    }
    first.map(|(x, y)| {
        format!("{label} != {ref_label}: {differing} cells differ, first at ({x}, {y})")
    })
}
