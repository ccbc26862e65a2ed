// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Iterative driver for the long simple path search.
//!
//! The engine owns the loop shared by every strategy. Each iteration restarts
//! an emptied path from a random vertex, collects the candidates the strategy
//! asks for, lets the strategy pick a move and applies it to the path. Monitors
//! observe every step and may abort the run; the strategy may stop it early
//! when the candidate set leaves nothing to do. The outcome bundles the final
//! path, the longest path seen, the statistics and the termination reason.

use crate::{
    candidates::CandidateSet,
    meta::metaheuristic::{Move, PathMetaheuristic},
    monitor::search_monitor::{PathSearchMonitor, SearchCommand},
    result::{PathSearchOutcome, PathSearchTerminationReason},
    stats::PathSearchStatistics,
};
use longpath_graph::{graph::Graph, path::Path};
use rand::RngCore;
use std::time::Instant;

/// Path search engine.
///
/// The `PathSearchEngine` keeps a reusable candidate buffer, so repeated
/// runs on graphs of similar size do not allocate in the loop.
#[derive(Debug, Clone, Default)]
pub struct PathSearchEngine {
    candidates: CandidateSet,
}

impl PathSearchEngine {
    /// Creates a new engine with minimal initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new engine whose candidate buffer holds `num_vertices`
    /// vertices without reallocating.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            candidates: CandidateSet::with_capacity(num_vertices),
        }
    }

    /// Runs a search on `graph` starting from a uniformly random vertex.
    ///
    /// An empty graph yields an empty path and the
    /// `PathSearchTerminationReason::EmptyGraph` reason without running any
    /// iteration.
    pub fn run<'g, M, SM, R>(
        &mut self,
        graph: &'g Graph,
        metaheuristic: &mut M,
        monitor: &mut SM,
        rng: &mut R,
    ) -> PathSearchOutcome<'g>
    where
        M: PathMetaheuristic + ?Sized,
        SM: PathSearchMonitor + ?Sized,
        R: RngCore,
    {
        match Path::random(graph, rng) {
            Some(path) => self.run_from(path, metaheuristic, monitor, rng),
            None => {
                tracing::debug!(
                    strategy = metaheuristic.name(),
                    "path search skipped on empty graph"
                );
                PathSearchOutcome::new(
                    PathSearchTerminationReason::EmptyGraph,
                    Path::empty(graph),
                    Vec::new(),
                    PathSearchStatistics::default(),
                )
            }
        }
    }

    /// Runs a search starting from `initial_path`.
    ///
    /// The loop, per iteration:
    /// - Monitors may request termination.
    /// - The iteration budget of the strategy is checked.
    /// - An empty path is restarted from a random vertex.
    /// - The strategy sees the candidates and may stop the run early.
    /// - The selected move is applied and counted.
    /// - The longest path seen so far is updated and monitors are notified.
    pub fn run_from<'g, M, SM, R>(
        &mut self,
        initial_path: Path<'g>,
        metaheuristic: &mut M,
        monitor: &mut SM,
        rng: &mut R,
    ) -> PathSearchOutcome<'g>
    where
        M: PathMetaheuristic + ?Sized,
        SM: PathSearchMonitor + ?Sized,
        R: RngCore,
    {
        let start_time = Instant::now();
        let mut stats = PathSearchStatistics::default();
        let mut path = initial_path;
        let graph = path.graph();
        let max_iterations = metaheuristic.max_iterations();
        let policy = metaheuristic.candidate_policy();

        debug_assert!(
            path.is_valid(),
            "called `PathSearchEngine::run_from()` with a path that is not a simple path on its graph: {}",
            path
        );

        tracing::debug!(
            strategy = metaheuristic.name(),
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            max_iterations,
            "path search started"
        );

        metaheuristic.on_start(graph);
        monitor.on_start(&path);

        stats.on_cost(path.cost());
        let mut longest = path.to_vec();

        let termination_reason = loop {
            if let SearchCommand::Terminate(reason) = monitor.search_command(&stats) {
                break PathSearchTerminationReason::Aborted(reason);
            }

            if stats.iterations >= max_iterations {
                break PathSearchTerminationReason::IterationLimit;
            }

            stats.on_iteration();

            if path.is_empty() {
                if !path.reinitialize(rng) {
                    break PathSearchTerminationReason::EmptyGraph;
                }
                stats.on_restart();
                monitor.on_restart(&path, &stats);
            }

            self.candidates.collect(&path, policy);
            if metaheuristic.should_terminate(&self.candidates) {
                break PathSearchTerminationReason::LocalOptimum;
            }

            match metaheuristic.select_move(&path, &self.candidates, rng) {
                Some(Move::Extend(vertex)) if path.extend(vertex, rng).is_some() => {
                    stats.on_extension()
                }
                Some(Move::Contract(vertex)) if path.contract(vertex).is_some() => {
                    stats.on_contraction()
                }
                Some(Move::Reject(_)) => stats.on_rejected_contraction(),
                _ => {}
            }

            debug_assert!(
                path.is_valid(),
                "called `PathSearchEngine::run_from()` and broke the simple path invariant in iteration {}: {}",
                stats.iterations,
                path
            );

            metaheuristic.on_iteration_end();

            if stats.on_cost(path.cost()) {
                longest = path.to_vec();
                monitor.on_best_path_updated(&path, &stats);
            }

            monitor.on_iteration(&path, &stats);
        };

        stats.set_final_cost(path.cost());
        stats.set_total_time(start_time.elapsed());
        monitor.on_end(&path, &stats);

        tracing::debug!(
            strategy = metaheuristic.name(),
            reason = %termination_reason,
            iterations = stats.iterations,
            final_cost = stats.final_cost,
            best_cost = stats.best_cost,
            "path search finished"
        );

        PathSearchOutcome::new(termination_reason, path, longest, stats)
    }
}
