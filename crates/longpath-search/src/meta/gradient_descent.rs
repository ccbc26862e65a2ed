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

//! Greedy path growth.
//!
//! Every iteration samples one of the vertices adjacent to an endpoint and
//! not yet on the path, and pushes it. The path never shrinks, so its length
//! is non-decreasing, and the run stops as soon as neither endpoint has a
//! free neighbor.

use crate::{
    candidates::{CandidatePolicy, CandidateSet},
    meta::metaheuristic::{Move, PathMetaheuristic, DEFAULT_MAX_ITERATIONS},
};
use longpath_graph::{graph::Graph, path::Path};
use rand::RngCore;

/// Greedy growth until the path is stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientDescent {
    max_iterations: u64,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl GradientDescent {
    /// Creates a gradient descent with the default iteration budget.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration budget.
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl PathMetaheuristic for GradientDescent {
    fn name(&self) -> &str {
        "GradientDescent"
    }

    #[inline]
    fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    #[inline]
    fn candidate_policy(&self) -> CandidatePolicy {
        CandidatePolicy::GrowthOnly
    }

    fn on_start(&mut self, _graph: &Graph) {}

    #[inline]
    fn should_terminate(&self, candidates: &CandidateSet) -> bool {
        candidates.is_empty()
    }

    #[inline]
    fn select_move(
        &mut self,
        _path: &Path<'_>,
        candidates: &CandidateSet,
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        candidates.sample(rng).map(Move::Extend)
    }

    fn on_iteration_end(&mut self) {}
}

impl std::fmt::Display for GradientDescent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GradientDescent(max_iterations: {})",
            self.max_iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longpath_graph::{generate::star_graph, vertex::FIRST_VERTEX};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_defaults() {
        let gd = GradientDescent::new();
        assert_eq!(gd.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(gd.candidate_policy(), CandidatePolicy::GrowthOnly);
        assert_eq!(
            format!("{}", gd.with_max_iterations(5)),
            "GradientDescent(max_iterations: 5)"
        );
    }

    #[test]
    fn test_always_extends_with_a_growth_candidate() {
        let graph = star_graph(5);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let mut candidates = CandidateSet::new();
        candidates.collect(&path, CandidatePolicy::GrowthOnly);

        let mut gd = GradientDescent::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            match gd.select_move(&path, &candidates, &mut rng) {
                Some(Move::Extend(v)) => assert!(candidates.contains(v)),
                other => panic!("unexpected move: {:?}", other),
            }
        }
        assert!(!gd.should_terminate(&candidates));
    }

    #[test]
    fn test_terminates_on_empty_candidates() {
        let gd = GradientDescent::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let candidates = CandidateSet::new();
        assert!(gd.should_terminate(&candidates));

        let graph = star_graph(1);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let mut gd = gd;
        assert_eq!(gd.select_move(&path, &candidates, &mut rng), None);
    }
}
