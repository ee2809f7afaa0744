//! KD-tree spatial index with pruned nearest-neighbor search
//!
//! Even depths split on x, odd depths on y. An equal coordinate on the
//! split axis always routes to the "big" child, both when inserting and
//! when choosing the good side of a query, so tree shape and query
//! traversal stay consistent.

use dragonfly_common::{Error, Result};
use tracing::debug;

use crate::point::Point;
use crate::PointSet;

struct Node {
    point: Point,
    small: Option<Box<Node>>,
    big: Option<Box<Node>>,
}

impl Node {
    fn leaf(point: Point) -> Box<Node> {
        Box::new(Node {
            point,
            small: None,
            big: None,
        })
    }
}

/// Balanced-on-average binary space partition over 2D points.
///
/// Built by repeated single-point insertion; points are never removed
/// and the tree is never rebalanced. Adversarial insertion orders (e.g.
/// pre-sorted points) degrade to a linear chain, so bulk callers should
/// insert in arrival order, which for map data is effectively random.
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl KdTree {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a tree from `points`, inserting in slice order.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let mut tree = Self::new();
        for point in points {
            tree.insert(*point)?;
        }
        debug!(points = tree.len, "built KD-tree");
        Ok(tree)
    }

    /// Insert a single point.
    ///
    /// Rejects non-finite coordinates: a NaN would make every axis
    /// comparison false and corrupt the partition invariant.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        if !point.is_finite() {
            return Err(Error::InvalidInput(format!(
                "point coordinates must be finite, got ({}, {})",
                point.x, point.y
            )));
        }
        Self::insert_below(&mut self.root, point, 0);
        self.len += 1;
        Ok(())
    }

    fn insert_below(slot: &mut Option<Box<Node>>, point: Point, depth: usize) {
        match slot {
            None => *slot = Some(Node::leaf(point)),
            Some(node) => {
                let (qc, nc) = split_coords(depth, &point, &node.point);
                if qc < nc {
                    Self::insert_below(&mut node.small, point, depth + 1);
                } else {
                    // ties go big
                    Self::insert_below(&mut node.big, point, depth + 1);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn nearest_below(node: &Node, query: &Point, depth: usize, mut best: Point) -> Point {
        if node.point.distance_squared(query) < best.distance_squared(query) {
            best = node.point;
        }

        let (qc, nc) = split_coords(depth, query, &node.point);
        let (good, bad) = if qc < nc {
            (&node.small, &node.big)
        } else {
            (&node.big, &node.small)
        };

        if let Some(child) = good {
            best = Self::nearest_below(child, query, depth + 1, best);
        }

        // The bad side can only hold a closer point if the splitting
        // plane itself is closer than the best candidate so far.
        let plane_distance_squared = (qc - nc) * (qc - nc);
        if plane_distance_squared < best.distance_squared(query) {
            if let Some(child) = bad {
                best = Self::nearest_below(child, query, depth + 1, best);
            }
        }

        best
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet for KdTree {
    /// Stored point with minimum Euclidean distance to `(x, y)`.
    ///
    /// Among equidistant candidates, returns whichever the traversal
    /// reaches first; deterministic for a fixed insertion order.
    fn nearest(&self, x: f64, y: f64) -> Result<Point> {
        let root = self.root.as_deref().ok_or(Error::EmptyIndex)?;
        let query = Point::new(x, y);
        Ok(Self::nearest_below(root, &query, 0, root.point))
    }
}

/// Comparison coordinates for `depth`: x at even depths, y at odd.
fn split_coords(depth: usize, query: &Point, node: &Point) -> (f64, f64) {
    if depth % 2 == 0 {
        (query.x, node.x)
    } else {
        (query.y, node.y)
    }
}
