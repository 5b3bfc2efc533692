// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory KD: an incremental 2D k-d tree for rectangular range queries.
//!
//! - Insert batches of points; the tree grows in arrival order, one node per distinct point.
//! - Query every point inside an axis-aligned rectangle, corners included.
//! - Compare against [`LinearScan`], the flat-vector baseline with the same surface.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Conversions from Kurbo types are available behind the `kurbo` feature.
//!
//! # Example
//!
//! ```rust
//! use understory_kdtree::{KdTree, Point2D, Rect};
//!
//! let mut tree = KdTree::new();
//! tree.insert([
//!     Point2D::new(7, 2),
//!     Point2D::new(5, 4),
//!     Point2D::new(9, 6),
//!     Point2D::new(4, 7),
//!     Point2D::new(8, 1),
//!     Point2D::new(2, 3),
//! ]);
//!
//! let mut hits = tree.range(Rect::from_coords(0, 0, 6, 6));
//! hits.sort();
//! assert_eq!(hits, [Point2D::new(2, 3), Point2D::new(5, 4)]);
//! ```
//!
//! ## How it splits
//!
//! A node at depth `d` splits on axis `d % 2`: x at even depths, y at odd depths.
//! Points strictly below the node on that axis go left, the rest (ties included) go right.
//! A range query skips the left subtree when the rectangle starts above the split value
//! and the right subtree when it ends below it.
//!
//! The tree is not rebalanced. Sorted input produces a deep tree; both insertion and
//! queries use an explicit stack, so that costs time, not call stack.
//!
//! ## Counting
//!
//! [`KdTree::len`] counts every point ever passed to [`KdTree::insert`], including exact
//! duplicates that were skipped structurally. [`KdTree::node_count`] counts the distinct
//! points actually stored.
//!
//! ```rust
//! use understory_kdtree::{KdTree, Point2D};
//!
//! let mut tree = KdTree::new();
//! tree.insert([Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0)]);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.node_count(), 1);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A NaN coordinate is never
//! inside a rectangle and NaN points are never deduplicated.
//!
//! ### Malformed rectangles
//!
//! Rectangles are not validated. An inverted rectangle (`lower > upper` on some axis) is
//! compared literally and matches nothing. See [`Rect::is_well_formed`].

#![no_std]

extern crate alloc;

pub mod scan;
pub mod tree;
pub mod types;

pub use scan::LinearScan;
pub use tree::{Iter, KdTree, KdTree2D};
pub use types::{KdPoint, Point2D, Rect};
