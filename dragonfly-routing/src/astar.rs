//! A* shortest-path solver
//!
//! One synchronous pass: `solve` runs the whole search before returning
//! and the result object is read-only afterwards. Unreachable goals and
//! blown time budgets are outcomes, not errors; callers branch on
//! [`SolverOutcome`] before trusting the solution fields.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use dragonfly_common::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::AstarGraph;
use crate::minpq::ArrayHeapMinPq;

/// Terminal classification of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverOutcome {
    /// A start→goal path was found within the time budget
    Solved,
    /// No path from start reaches the goal
    Unsolvable,
    /// A path exists but the search overran its budget; only the
    /// diagnostics are valid
    Timeout,
}

/// Result of one A* search.
pub struct AstarSolver<V> {
    outcome: SolverOutcome,
    solution: Vec<V>,
    solution_weight: f64,
    num_states_explored: usize,
    exploration_time: Duration,
}

impl<V: Eq + Hash + Clone + Debug> AstarSolver<V> {
    /// Run A* from `start` to `goal` over `graph`.
    ///
    /// The timeout is checked once, after the search loop exits; a graph
    /// large enough to keep the loop busy past the budget is classified
    /// `Timeout` only on completion. Errors surface only for structural
    /// misuse (a NaN from the heuristic); unreachable goals come back as
    /// `Unsolvable`, not `Err`.
    pub fn solve<G: AstarGraph<V>>(
        graph: &G,
        start: V,
        goal: V,
        timeout: Duration,
    ) -> Result<Self> {
        let timer = Instant::now();

        let mut dist_to: FxHashMap<V, f64> = FxHashMap::default();
        let mut edge_to: FxHashMap<V, V> = FxHashMap::default();
        let mut pq = ArrayHeapMinPq::new();

        dist_to.insert(start.clone(), 0.0);
        pq.insert(
            start.clone(),
            graph.estimated_distance_to_goal(&start, &goal),
        )?;

        let mut num_states_explored = 0usize;

        while !pq.is_empty() {
            let current = pq.extract_min()?;
            if current == goal {
                // The goal's own extraction is not an exploration
                break;
            }
            num_states_explored += 1;

            let dist_current = *dist_to.get(&current).unwrap_or(&f64::INFINITY);
            for edge in graph.neighbors(&current) {
                let candidate = dist_current + edge.weight;
                let best_known = *dist_to.get(&edge.to).unwrap_or(&f64::INFINITY);
                if candidate < best_known {
                    dist_to.insert(edge.to.clone(), candidate);
                    edge_to.insert(edge.to.clone(), current.clone());
                    let priority =
                        candidate + graph.estimated_distance_to_goal(&edge.to, &goal);
                    if pq.contains(&edge.to) {
                        pq.change_priority(&edge.to, priority)?;
                    } else {
                        pq.insert(edge.to.clone(), priority)?;
                    }
                }
            }
        }

        let exploration_time = timer.elapsed();

        let (outcome, solution, solution_weight) =
            match reconstruct_path(&edge_to, &start, &goal) {
                None => (SolverOutcome::Unsolvable, Vec::new(), 0.0),
                Some(_) if exploration_time > timeout => {
                    (SolverOutcome::Timeout, Vec::new(), 0.0)
                }
                Some(path) => {
                    let weight = *dist_to.get(&goal).unwrap_or(&f64::INFINITY);
                    (SolverOutcome::Solved, path, weight)
                }
            };

        debug!(
            ?outcome,
            num_states_explored,
            elapsed_us = exploration_time.as_micros() as u64,
            "search finished"
        );

        Ok(Self {
            outcome,
            solution,
            solution_weight,
            num_states_explored,
            exploration_time,
        })
    }

    pub fn outcome(&self) -> SolverOutcome {
        self.outcome
    }

    /// The start→goal vertex sequence, inclusive; empty unless `Solved`.
    pub fn solution(&self) -> &[V] {
        &self.solution
    }

    /// Total path weight; 0 unless `Solved`.
    pub fn solution_weight(&self) -> f64 {
        self.solution_weight
    }

    /// Number of vertices extracted and expanded during the search.
    pub fn num_states_explored(&self) -> usize {
        self.num_states_explored
    }

    /// Wall-clock duration of the search loop.
    pub fn exploration_time(&self) -> Duration {
        self.exploration_time
    }
}

/// Walk the predecessor chain backward from `goal` to `start`.
///
/// Returns `None` when the chain never reaches `start` (goal was never
/// relaxed). The chain cannot cycle: each link was recorded with a
/// strictly smaller best-known distance than its successor.
fn reconstruct_path<V: Eq + Hash + Clone>(
    edge_to: &FxHashMap<V, V>,
    start: &V,
    goal: &V,
) -> Option<Vec<V>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while current != start {
        current = edge_to.get(current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn diamond() -> AdjacencyGraph<&'static str> {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "D", 1.0);
        graph.add_edge("A", "C", 4.0);
        graph.add_edge("C", "D", 1.0);
        graph
    }

    #[test]
    fn takes_the_cheaper_branch() {
        let result =
            AstarSolver::solve(&diamond(), "A", "D", Duration::from_secs(10)).unwrap();
        assert_eq!(result.outcome(), SolverOutcome::Solved);
        assert_eq!(result.solution(), &["A", "B", "D"]);
        assert_eq!(result.solution_weight(), 2.0);
        assert!(result.num_states_explored() <= 4);
    }

    #[test]
    fn unreachable_goal_is_an_outcome_not_an_error() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("A", "C", 4.0);
        let result =
            AstarSolver::solve(&graph, "A", "D", Duration::from_secs(10)).unwrap();
        assert_eq!(result.outcome(), SolverOutcome::Unsolvable);
        assert!(result.solution().is_empty());
        assert_eq!(result.solution_weight(), 0.0);
    }

    #[test]
    fn start_equals_goal_solves_immediately() {
        let result =
            AstarSolver::solve(&diamond(), "A", "A", Duration::from_secs(10)).unwrap();
        assert_eq!(result.outcome(), SolverOutcome::Solved);
        assert_eq!(result.solution(), &["A"]);
        assert_eq!(result.solution_weight(), 0.0);
        assert_eq!(result.num_states_explored(), 0);
    }

    #[test]
    fn zero_budget_classifies_as_timeout() {
        let result = AstarSolver::solve(&diamond(), "A", "D", Duration::ZERO).unwrap();
        assert_eq!(result.outcome(), SolverOutcome::Timeout);
        // path and weight are not valid on timeout
        assert!(result.solution().is_empty());
        assert_eq!(result.solution_weight(), 0.0);
        // diagnostics still are
        assert!(result.exploration_time() > Duration::ZERO);
    }

    #[test]
    fn reruns_are_deterministic() {
        let a = AstarSolver::solve(&diamond(), "A", "D", Duration::from_secs(10)).unwrap();
        let b = AstarSolver::solve(&diamond(), "A", "D", Duration::from_secs(10)).unwrap();
        assert_eq!(a.outcome(), b.outcome());
        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.solution_weight(), b.solution_weight());
        assert_eq!(a.num_states_explored(), b.num_states_explored());
    }

    #[test]
    fn outcome_serializes_for_the_serving_layer() {
        let json = serde_json::to_string(&SolverOutcome::Unsolvable).unwrap();
        assert_eq!(json, "\"Unsolvable\"");
    }
}
