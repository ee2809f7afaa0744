//! Map layer: vertex positions, coordinate snapping, routable graph
//!
//! Glue between the geometry crate and the solver: a [`RoutableMap`]
//! holds the road graph plus a position for each vertex, answers the
//! serving layer's "closest vertex to this click" query through the
//! KD-tree, and supplies the solver a straight-line distance heuristic.

use std::fmt::Debug;
use std::hash::Hash;

use dragonfly_common::{Error, Result};
use dragonfly_geometry::{KdTree, Point, PointSet};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::{AdjacencyGraph, AstarGraph, WeightedEdge};

/// A road graph whose vertices sit at known 2D positions.
///
/// Vertices are registered with [`add_vertex`](Self::add_vertex) before
/// the index is built; [`build_index`](Self::build_index) freezes the
/// point set into a KD-tree. Registering two vertices at the exact same
/// position keeps the last one: the position→vertex table is keyed by
/// the coordinates' bit patterns.
pub struct RoutableMap<V> {
    graph: AdjacencyGraph<V>,
    positions: FxHashMap<V, Point>,
    vertex_at: FxHashMap<(u64, u64), V>,
    index: Option<KdTree>,
}

fn position_key(point: &Point) -> (u64, u64) {
    (point.x.to_bits(), point.y.to_bits())
}

impl<V: Eq + Hash + Clone + Debug> RoutableMap<V> {
    pub fn new() -> Self {
        Self {
            graph: AdjacencyGraph::new(),
            positions: FxHashMap::default(),
            vertex_at: FxHashMap::default(),
            index: None,
        }
    }

    /// Register `vertex` at `position`. Invalidates any built index.
    pub fn add_vertex(&mut self, vertex: V, position: Point) -> Result<()> {
        if !position.is_finite() {
            return Err(Error::InvalidInput(format!(
                "position for {vertex:?} must be finite, got ({}, {})",
                position.x, position.y
            )));
        }
        self.positions.insert(vertex.clone(), position);
        self.vertex_at.insert(position_key(&position), vertex);
        self.index = None;
        Ok(())
    }

    /// Add a one-way road segment.
    pub fn add_road(&mut self, from: V, to: V, weight: f64) {
        self.graph.add_edge(from, to, weight);
    }

    /// Add a two-way road segment.
    pub fn add_two_way_road(&mut self, a: V, b: V, weight: f64) {
        self.graph.add_undirected_edge(a, b, weight);
    }

    /// Freeze the registered positions into the spatial index.
    pub fn build_index(&mut self) -> Result<()> {
        let points: Vec<Point> = self.positions.values().copied().collect();
        let index = KdTree::from_points(&points)?;
        debug!(vertices = index.len(), "built map spatial index");
        self.index = Some(index);
        Ok(())
    }

    /// The vertex whose position is nearest to `(x, y)`.
    ///
    /// Builds lazily if [`build_index`](Self::build_index) has not run
    /// since the last mutation. Fails with `EmptyIndex` when no vertex
    /// has a position.
    pub fn closest(&mut self, x: f64, y: f64) -> Result<V> {
        if self.index.is_none() {
            self.build_index()?;
        }
        let index = self.index.as_ref().ok_or(Error::EmptyIndex)?;
        let nearest = index.nearest(x, y)?;
        self.vertex_at
            .get(&position_key(&nearest))
            .cloned()
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "indexed position ({}, {}) has no registered vertex",
                    nearest.x, nearest.y
                ))
            })
    }

    pub fn position(&self, vertex: &V) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

impl<V: Eq + Hash + Clone + Debug> Default for RoutableMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone + Debug> AstarGraph<V> for RoutableMap<V> {
    fn neighbors(&self, v: &V) -> Vec<WeightedEdge<V>> {
        self.graph.neighbors(v)
    }

    /// Straight-line distance between the two positions; 0 when either
    /// vertex has no position, which keeps the estimate admissible.
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64 {
        match (self.positions.get(v), self.positions.get(goal)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => 0.0,
        }
    }
}
