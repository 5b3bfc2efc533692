// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KD tree basics.
//!
//! Insert a handful of points, run a range query, and show the duplicate counting.
//!
//! Run:
//! - `cargo run -p understory_demos --example basic_range`

use understory_kdtree::{KdTree, Point2D, Rect};

fn main() {
    let mut tree = KdTree::new();
    tree.insert([
        Point2D::new(7, 2),
        Point2D::new(5, 4),
        Point2D::new(9, 6),
        Point2D::new(4, 7),
        Point2D::new(8, 1),
        Point2D::new(2, 3),
    ]);
    println!("tree: {:?}", tree);

    let rect = Rect::from_coords(0, 0, 6, 6);
    let mut hits = tree.range(rect);
    hits.sort();
    println!("points in {:?}: {:?}", rect, hits);
    assert_eq!(hits, [Point2D::new(2, 3), Point2D::new(5, 4)]);

    // Re-inserting a stored point counts, but does not add a node.
    tree.insert([Point2D::new(5, 4)]);
    println!("len={} nodes={}", tree.len(), tree.node_count());

    // Kurbo geometry converts directly.
    let viewport: Rect<Point2D<f64>> = kurbo::Rect::new(0.0, 0.0, 10.0, 10.0).into();
    let mut ftree = KdTree::new();
    ftree.insert([kurbo::Point::new(1.0, 2.0).into(), Point2D::new(12.0, 3.0)]);
    println!("kurbo viewport hits: {:?}", ftree.range(viewport));
}
