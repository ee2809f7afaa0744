//! Graph capability consumed by the A* solver
//!
//! The solver never sees a concrete graph type; it pulls neighbor and
//! heuristic data through [`AstarGraph`], so any representation a caller
//! already has (adjacency maps, CSR arrays, generated mazes) plugs in by
//! implementing two methods.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A directed edge with a non-negative traversal cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// What the solver needs from a graph: outgoing edges and a goal
/// estimate.
pub trait AstarGraph<V> {
    /// Outgoing edges of `v`.
    fn neighbors(&self, v: &V) -> Vec<WeightedEdge<V>>;

    /// Estimated remaining cost from `v` to `goal`.
    ///
    /// Optimality of returned paths requires this never to overestimate
    /// the true remaining cost; the solver does not verify that.
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64;
}

/// Adjacency-map graph with no heuristic information.
///
/// `estimated_distance_to_goal` is constant 0, which degrades A* to
/// Dijkstra: still correct, just unguided. The map layer wraps this
/// with vertex positions to supply a real estimate.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyGraph<V> {
    outgoing: FxHashMap<V, Vec<WeightedEdge<V>>>,
}

impl<V: Eq + Hash + Clone> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self {
            outgoing: FxHashMap::default(),
        }
    }

    /// Add a directed edge.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.outgoing
            .entry(from.clone())
            .or_default()
            .push(WeightedEdge::new(from, to, weight));
    }

    /// Add a pair of directed edges, one each way.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }
}

impl<V: Eq + Hash + Clone> AstarGraph<V> for AdjacencyGraph<V> {
    fn neighbors(&self, v: &V) -> Vec<WeightedEdge<V>> {
        self.outgoing.get(v).cloned().unwrap_or_default()
    }

    fn estimated_distance_to_goal(&self, _v: &V, _goal: &V) -> f64 {
        0.0
    }
}
