use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use invperc::check::check_equivalent;
use invperc::config::{GridKind, ParamsSingle, SweepParams};
use invperc::fill::{fill, fill_scan};
use invperc::grid::{GridArray, GridList, GridStore};
use invperc::render::render;
use invperc::rng::{Rng, entropy_seed};
use invperc::sweep::run_sweep;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("fill") => cmd_fill(&args[2..]),
        Some("sweep") => cmd_sweep(&args[2..]),
        Some("check") => cmd_check(&args[2..]),
        _ => {
            eprintln!("usage: invperc fill [width] [height] [depth] [seed] [kind]");
            eprintln!("       invperc sweep <params.json>");
            eprintln!("       invperc check [size] [depth] [seed]");
            bail!("expected a command: fill, sweep or check");
        }
    }
}

fn cmd_fill(args: &[String]) -> Result<()> {
    let width: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(15);
    let height: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(15);
    let depth: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(entropy_seed);
    let kind: GridKind = match args.get(4) {
        Some(s) => s.parse().map_err(anyhow::Error::msg)?,
        None => GridKind::default(),
    };

    let params = ParamsSingle {
        kind,
        width,
        height,
        depth,
        seed: Some(seed),
    };
    let (grid, outcome) = invperc::percolate(&params, seed)?;

    println!(
        "{} {} {} {} {} {}",
        kind, width, height, depth, seed, outcome.cells_filled
    );
    print!("{}", render(grid.as_ref()));
    Ok(())
}

fn cmd_sweep(args: &[String]) -> Result<()> {
    let path = args.first().context("usage: invperc sweep <params.json>")?;
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let params: SweepParams =
        serde_json::from_str(&text).with_context(|| format!("failed to parse {path}"))?;
    let report = run_sweep(&params)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Run every representation/engine variant on one seed and compare results.
fn cmd_check(args: &[String]) -> Result<()> {
    let size: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(15);
    let depth: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(entropy_seed);

    let mut rng = Rng::new(seed);
    let mut list_scan = GridList::new(size, size, depth, &mut rng)?;
    fill_scan(&mut list_scan, &mut rng)?;

    let mut rng = Rng::new(seed);
    let mut array_scan = GridArray::new(size, size, depth, &mut rng)?;
    fill_scan(&mut array_scan, &mut rng)?;

    let mut rng = Rng::new(seed);
    let mut array_lazy = GridArray::new(size, size, depth, &mut rng)?;
    fill(&mut array_lazy, &mut rng)?;

    let grids: Vec<(&str, &dyn GridStore)> = vec![
        ("list-scan", &list_scan),
        ("array-scan", &array_scan),
        ("array-lazy", &array_lazy),
    ];
    let mismatches = check_equivalent(&grids);
    if mismatches.is_empty() {
        println!("all grid variants agree (size={size}, depth={depth}, seed={seed})");
        Ok(())
    } else {
        for m in &mismatches {
            eprintln!("{m}");
        }
        bail!("{} variant(s) disagree", mismatches.len());
    }
}
