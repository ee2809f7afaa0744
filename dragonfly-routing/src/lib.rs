//! Core routing algorithms for the dragonfly toolkit
//!
//! A* point-to-point search over a caller-supplied graph capability,
//! the extrinsic-priority min-heap that drives it, and the map layer
//! that snaps raw coordinates onto graph vertices. Everything here is
//! synchronous and single-shot: one `solve` call owns its own state and
//! runs to completion before returning.

pub mod astar;
pub mod graph;
pub mod map;
pub mod minpq;
pub mod service;

pub use astar::{AstarSolver, SolverOutcome};
pub use graph::{AdjacencyGraph, AstarGraph, WeightedEdge};
pub use map::RoutableMap;
pub use minpq::ArrayHeapMinPq;
