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

use crate::stats::PathSearchStatistics;
use longpath_graph::{path::Path, vertex::Vertex};

/// Why a path search run ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSearchTerminationReason {
    /// The strategy's iteration budget was used up.
    IterationLimit,

    /// The strategy found no admissible move and stopped early.
    LocalOptimum,

    /// A monitor requested termination.
    /// The string contains information about the reason for abortion.
    Aborted(String),

    /// The graph has no vertices, so no path could be started.
    EmptyGraph,
}

impl std::fmt::Display for PathSearchTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSearchTerminationReason::IterationLimit => write!(f, "Iteration Limit Reached"),
            PathSearchTerminationReason::LocalOptimum => write!(f, "Local Optimum Reached"),
            PathSearchTerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
            PathSearchTerminationReason::EmptyGraph => write!(f, "Empty Graph"),
        }
    }
}

/// The result of one path search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearchOutcome<'g> {
    termination_reason: PathSearchTerminationReason,
    path: Path<'g>,
    longest: Vec<Vertex>,
    statistics: PathSearchStatistics,
}

impl<'g> PathSearchOutcome<'g> {
    /// Creates a new outcome.
    #[inline]
    pub fn new(
        termination_reason: PathSearchTerminationReason,
        path: Path<'g>,
        longest: Vec<Vertex>,
        statistics: PathSearchStatistics,
    ) -> Self {
        Self {
            termination_reason,
            path,
            longest,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &PathSearchTerminationReason {
        &self.termination_reason
    }

    /// Returns the path as it was when the run ended.
    #[inline]
    pub fn path(&self) -> &Path<'g> {
        &self.path
    }

    /// Consumes the outcome and returns the final path.
    #[inline]
    pub fn into_path(self) -> Path<'g> {
        self.path
    }

    /// Returns the final path length.
    #[inline]
    pub fn cost(&self) -> usize {
        self.path.cost()
    }

    /// Returns the vertices of the longest path seen during the run.
    /// With contractions enabled this can be longer than the final path.
    #[inline]
    pub fn longest(&self) -> &[Vertex] {
        &self.longest
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &PathSearchStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for PathSearchOutcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Termination: {}", self.termination_reason)?;
        writeln!(f, "Final {}", self.path)?;
        writeln!(f, "Longest Cost: {}", self.longest.len())?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_reason_display() {
        assert_eq!(
            format!("{}", PathSearchTerminationReason::IterationLimit),
            "Iteration Limit Reached"
        );
        assert_eq!(
            format!("{}", PathSearchTerminationReason::LocalOptimum),
            "Local Optimum Reached"
        );
        assert_eq!(
            format!("{}", PathSearchTerminationReason::Aborted("stop".into())),
            "Aborted: stop"
        );
        assert_eq!(
            format!("{}", PathSearchTerminationReason::EmptyGraph),
            "Empty Graph"
        );
    }
}
