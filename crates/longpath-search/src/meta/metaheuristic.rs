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

//! Strategy interface for the path search engine.
//!
//! A `PathMetaheuristic` never touches the path directly. It inspects the
//! current path and the candidate set and returns a `Move`, which the engine
//! applies and accounts for in its statistics. This keeps the simple-path
//! invariant in one place and lets every strategy share the same monitors.

use crate::candidates::{CandidatePolicy, CandidateSet};
use longpath_graph::{graph::Graph, path::Path, vertex::Vertex};
use rand::RngCore;

/// The iteration budget a strategy runs with unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1000;

/// A move chosen by a strategy for the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Push the vertex onto an endpoint it is adjacent to.
    Extend(Vertex),
    /// Remove the vertex, which is an endpoint of the path.
    Contract(Vertex),
    /// A shrink proposal for the endpoint that was turned down.
    Reject(Vertex),
}

impl Move {
    /// Returns the vertex the move refers to.
    #[inline]
    pub fn vertex(&self) -> Vertex {
        match *self {
            Move::Extend(v) | Move::Contract(v) | Move::Reject(v) => v,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Extend(v) => write!(f, "Extend({})", v.get()),
            Move::Contract(v) => write!(f, "Contract({})", v.get()),
            Move::Reject(v) => write!(f, "Reject({})", v.get()),
        }
    }
}

/// A trait governing move selection and early termination of a path search.
///
/// The random source is passed as a trait object so that strategies stay
/// object safe and can be boxed into portfolios.
pub trait PathMetaheuristic: Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Returns the number of iterations after which the run stops.
    fn max_iterations(&self) -> u64;

    /// Returns which candidates the engine should collect for this strategy.
    fn candidate_policy(&self) -> CandidatePolicy;

    /// Called once before the first iteration.
    fn on_start(&mut self, graph: &Graph);

    /// Returns `true` if the run should stop given the collected candidates.
    fn should_terminate(&self, candidates: &CandidateSet) -> bool;

    /// Chooses the move for this iteration.
    ///
    /// Returns `None` if the strategy makes no move, which leaves the path
    /// unchanged for the iteration.
    fn select_move(
        &mut self,
        path: &Path<'_>,
        candidates: &CandidateSet,
        rng: &mut dyn RngCore,
    ) -> Option<Move>;

    /// Called after the move of an iteration has been applied.
    fn on_iteration_end(&mut self);
}

impl<M> PathMetaheuristic for Box<M>
where
    M: PathMetaheuristic + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn max_iterations(&self) -> u64 {
        (**self).max_iterations()
    }

    fn candidate_policy(&self) -> CandidatePolicy {
        (**self).candidate_policy()
    }

    fn on_start(&mut self, graph: &Graph) {
        (**self).on_start(graph)
    }

    fn should_terminate(&self, candidates: &CandidateSet) -> bool {
        (**self).should_terminate(candidates)
    }

    fn select_move(
        &mut self,
        path: &Path<'_>,
        candidates: &CandidateSet,
        rng: &mut dyn RngCore,
    ) -> Option<Move> {
        (**self).select_move(path, candidates, rng)
    }

    fn on_iteration_end(&mut self) {
        (**self).on_iteration_end()
    }
}

impl std::fmt::Debug for dyn PathMetaheuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathMetaheuristic {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn PathMetaheuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathMetaheuristic: {}", self.name())
    }
}
