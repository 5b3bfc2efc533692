// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector with linear scans. The naive baseline the tree is measured and checked against.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use crate::types::{KdPoint, Rect};

/// Flat list of points answering range queries by testing every entry.
///
/// Unlike [`KdTree`](crate::KdTree) it keeps duplicates, so a point submitted
/// twice is reported twice.
#[derive(Clone)]
pub struct LinearScan<P> {
    points: Vec<P>,
}

impl<P> LinearScan<P> {
    /// Create an empty scan list.
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Stored points in insertion order.
    pub fn as_slice(&self) -> &[P] {
        &self.points
    }
}

impl<P: KdPoint> LinearScan<P> {
    /// Append a batch of points.
    pub fn insert<I: IntoIterator<Item = P>>(&mut self, points: I) {
        self.points.extend(points);
    }

    /// All stored points inside `rect`, in insertion order.
    pub fn range(&self, rect: Rect<P>) -> Vec<P> {
        let mut out = Vec::new();
        self.range_into(rect, &mut out);
        out
    }

    /// Like [`range`](Self::range), but appends to `out`.
    pub fn range_into(&self, rect: Rect<P>, out: &mut Vec<P>) {
        out.extend(self.points.iter().copied().filter(|p| rect.contains(*p)));
    }
}

impl<P> Default for LinearScan<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Debug for LinearScan<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearScan")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}

impl<P: KdPoint> FromIterator<P> for LinearScan<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
