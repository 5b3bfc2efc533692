// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time a KD tree range query against a linear scan over a square grid of points.
//!
//! Both results are compared; the run fails if they differ.
//!
//! Run:
//! - `cargo run -p understory_demos --example timing --release`
//! - `RUST_LOG=debug cargo run -p understory_demos --example timing -- --grid 500`

use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_kdtree::{KdTree, LinearScan, Point2D, Rect};

/// Grid size and query rectangle for the timing run.
#[derive(Debug, Parser)]
#[command(about = "Compare KD tree range search with a linear scan")]
struct Args {
    /// Points per side of the square grid.
    #[arg(long, default_value_t = 1000)]
    grid: i64,
    /// Query rectangle lower x.
    #[arg(long, default_value_t = 500)]
    lower_x: i64,
    /// Query rectangle lower y.
    #[arg(long, default_value_t = 500)]
    lower_y: i64,
    /// Query rectangle upper x.
    #[arg(long, default_value_t = 504)]
    upper_x: i64,
    /// Query rectangle upper y.
    #[arg(long, default_value_t = 504)]
    upper_y: i64,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("grid size must be positive, got {0}")]
    EmptyGrid(i64),
    #[error("query rectangle {0:?} has lower > upper")]
    InvertedRect(Rect<Point2D<i64>>),
    #[error("kd tree returned {tree} points but the scan returned {scan}")]
    Mismatch { tree: usize, scan: usize },
}

fn main() -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if args.grid <= 0 {
        return Err(DemoError::EmptyGrid(args.grid));
    }
    let rect = Rect::from_coords(args.lower_x, args.lower_y, args.upper_x, args.upper_y);
    if !rect.is_well_formed() {
        return Err(DemoError::InvertedRect(rect));
    }

    let n = args.grid;
    let points: Vec<_> = (0..n)
        .flat_map(|x| (0..n).map(move |y| Point2D::new(x, y)))
        .collect();
    info!(points = points.len(), ?rect, "grid generated");

    let scan: LinearScan<_> = points.iter().copied().collect();
    let start = Instant::now();
    let mut naive = scan.range(rect);
    info!(elapsed = ?start.elapsed(), hits = naive.len(), "linear scan");

    let start = Instant::now();
    let mut tree = KdTree::new();
    tree.insert(points.iter().copied());
    info!(
        elapsed = ?start.elapsed(),
        nodes = tree.node_count(),
        depth = tree.depth(),
        "kd tree built"
    );

    let start = Instant::now();
    let mut fast = tree.range(rect);
    info!(elapsed = ?start.elapsed(), hits = fast.len(), "kd tree range");

    naive.sort();
    fast.sort();
    if naive != fast {
        warn!(?naive, ?fast, "results differ");
        return Err(DemoError::Mismatch {
            tree: fast.len(),
            scan: naive.len(),
        });
    }
    info!("results match");
    Ok(())
}
