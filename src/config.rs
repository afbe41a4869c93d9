//! Run parameters, loadable from JSON.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which grid representation a single run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    List,
    Array,
}

impl Default for GridKind {
    fn default() -> Self {
        GridKind::Array
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridKind::List => write!(f, "list"),
            GridKind::Array => write!(f, "array"),
        }
    }
}

impl FromStr for GridKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(GridKind::List),
            "array" => Ok(GridKind::Array),
            other => Err(format!("unknown grid kind {other:?}")),
        }
    }
}

/// Parameters for a single fill.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamsSingle {
    #[serde(default)]
    pub kind: GridKind,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// `None` means draw a seed from the clock (non-reproducible).
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_width() -> usize {
    15
}

fn default_height() -> usize {
    15
}

fn default_depth() -> u32 {
    10
}

impl Default for ParamsSingle {
    fn default() -> Self {
        Self {
            kind: GridKind::default(),
            width: default_width(),
            height: default_height(),
            depth: default_depth(),
            seed: None,
        }
    }
}

/// Parameters for a statistical sweep: `runs` fills for every
/// (size, depth) combination. Grids are square (size x size).
#[derive(Debug, Clone, Deserialize)]
pub struct SweepParams {
    pub sizes: Vec<usize>,
    pub depths: Vec<u32>,
    pub runs: usize,
    /// `None` means draw a seed from the clock; the resolved seed is
    /// recorded in the report either way.
    #[serde(default)]
    pub seed: Option<u64>,
}
