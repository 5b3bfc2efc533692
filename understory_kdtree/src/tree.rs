// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental k-d tree with in-place insertion and pruned range search.
//!
//! A node at depth `d` splits on axis `d % DIM`. Points strictly below the
//! node's coordinate on that axis go left, everything else (including ties)
//! goes right. Range search relies on exactly that split rule to prune.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug};

use tracing::{debug, trace};

use crate::types::{KdPoint, Rect, le, lt};

struct Node<P> {
    location: P,
    left: Option<Box<Node<P>>>,
    right: Option<Box<Node<P>>>,
}

impl<P> Node<P> {
    const fn leaf(location: P) -> Self {
        Self {
            location,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced k-d tree built by incremental insertion.
///
/// Tree shape follows insertion order; there is no rebalancing. Both insertion
/// and queries walk the tree iteratively, so a degenerate (list-shaped) tree
/// costs time but never call stack.
pub struct KdTree<P> {
    root: Option<Box<Node<P>>>,
    // Points ever submitted to `insert`, duplicates included.
    len: usize,
    nodes: usize,
}

impl<P> KdTree<P> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            len: 0,
            nodes: 0,
        }
    }

    /// Number of points submitted through [`insert`](Self::insert), counting
    /// duplicates that did not create a node.
    ///
    /// Use [`node_count`](Self::node_count) for the number of distinct points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct points stored.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Height of the tree: 0 when empty, 1 for a lone root.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node<P>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, d)) = stack.pop() {
            max = max.max(d);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, d + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, d + 1));
            }
        }
        max
    }

    /// Remove every point and reset the submitted count.
    pub fn clear(&mut self) {
        // Unlink nodes one at a time so dropping a deep tree does not recurse.
        let mut stack: Vec<Box<Node<P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
        self.nodes = 0;
    }

    /// Iterate stored points in depth-first pre-order (node, left, right).
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<P: KdPoint> KdTree<P> {
    /// Insert a batch of points in order.
    ///
    /// A point equal to one already stored is skipped structurally, but still
    /// counts toward [`len`](Self::len).
    pub fn insert<I: IntoIterator<Item = P>>(&mut self, points: I) {
        let mut submitted = 0_usize;
        let mut added = 0_usize;
        for point in points {
            submitted += 1;
            if self.insert_one(point) {
                added += 1;
            }
        }
        self.len += submitted;
        self.nodes += added;
        debug!(
            submitted,
            added,
            duplicates = submitted - added,
            nodes = self.nodes,
            "kd-tree batch inserted"
        );
    }

    fn insert_one(&mut self, point: P) -> bool {
        let mut slot = &mut self.root;
        let mut depth = 0_usize;
        while let Some(node) = slot {
            if node.location == point {
                return false;
            }
            let axis = depth % P::DIM;
            slot = if lt(point.coord(axis), node.location.coord(axis)) {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::leaf(point)));
        true
    }

    /// Whether `point` is stored in the tree.
    pub fn contains(&self, point: P) -> bool {
        let mut cur = self.root.as_deref();
        let mut depth = 0_usize;
        while let Some(node) = cur {
            if node.location == point {
                return true;
            }
            let axis = depth % P::DIM;
            cur = if lt(point.coord(axis), node.location.coord(axis)) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            depth += 1;
        }
        false
    }

    /// All stored points inside `rect`, boundary included. Order is unspecified.
    pub fn range(&self, rect: Rect<P>) -> Vec<P> {
        let mut out = Vec::new();
        self.range_into(rect, &mut out);
        out
    }

    /// Like [`range`](Self::range), but appends to `out` so the buffer can be reused.
    pub fn range_into(&self, rect: Rect<P>, out: &mut Vec<P>) {
        let Some(root) = self.root.as_deref() else {
            return;
        };
        let start = out.len();
        let mut visited = 0_usize;
        let mut pruned = 0_usize;
        let mut stack = vec![(root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            visited += 1;
            let here = node.location;
            if rect.contains(here) {
                out.push(here);
            }
            let axis = depth % P::DIM;
            let split = here.coord(axis);
            // Right is pushed first so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                // Right holds coord >= split; skip it when the query ends below split.
                if le(split, rect.upper.coord(axis)) {
                    stack.push((right, depth + 1));
                } else {
                    pruned += 1;
                }
            }
            if let Some(left) = node.left.as_deref() {
                // Left holds coord < split; skip it when the query starts above split.
                if le(rect.lower.coord(axis), split) {
                    stack.push((left, depth + 1));
                } else {
                    pruned += 1;
                }
            }
        }
        trace!(
            ?rect,
            visited,
            pruned,
            hits = out.len() - start,
            "kd-tree range query"
        );
    }
}

impl<P> Default for KdTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Drop for KdTree<P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P> Debug for KdTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl<P: KdPoint> FromIterator<P> for KdTree<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert(iter);
        tree
    }
}

impl<P: KdPoint> Extend<P> for KdTree<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

impl<'a, P> IntoIterator for &'a KdTree<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`].
pub struct Iter<'a, P> {
    stack: Vec<&'a Node<P>>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.location)
    }
}

impl<P> Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// A planar k-d tree.
pub type KdTree2D<T> = KdTree<crate::types::Point2D<T>>;
