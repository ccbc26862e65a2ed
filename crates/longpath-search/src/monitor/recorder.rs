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

//! Per-iteration cost recording.
//!
//! `TrialRecorder` keeps the path length after every completed iteration of a
//! run, in iteration order. It never clears itself: a caller that reuses one
//! recorder across trials calls `clear` between them, which lets a harness
//! keep the series of the last trial around for reporting.

use crate::{monitor::search_monitor::PathSearchMonitor, stats::PathSearchStatistics};
use longpath_graph::path::Path;

/// Append-only series of path costs, one sample per iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TrialRecorder {
    costs: Vec<usize>,
}

impl TrialRecorder {
    /// Creates an empty recorder.
    #[inline]
    pub fn new() -> Self {
        Self { costs: Vec::new() }
    }

    /// Creates an empty recorder with room for `iterations` samples.
    #[inline]
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            costs: Vec::with_capacity(iterations),
        }
    }

    /// Appends one sample.
    #[inline]
    pub fn record(&mut self, cost: usize) {
        self.costs.push(cost);
    }

    /// Removes all samples, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.costs.clear();
    }

    /// Returns the samples in iteration order.
    #[inline]
    pub fn costs(&self) -> &[usize] {
        &self.costs
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Returns the most recent sample.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.costs.last().copied()
    }

    /// Returns the largest sample.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.costs.iter().copied().max()
    }

    /// Returns `true` if no sample is smaller than its predecessor.
    pub fn is_non_decreasing(&self) -> bool {
        self.costs.windows(2).all(|w| w[0] <= w[1])
    }

    /// Consumes the recorder and returns the samples.
    #[inline]
    pub fn into_costs(self) -> Vec<usize> {
        self.costs
    }
}

impl std::fmt::Display for TrialRecorder {
    /// One `iteration cost` line per sample, iterations counted from zero.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cost) in self.costs.iter().enumerate() {
            writeln!(f, "{} {}", i, cost)?;
        }
        Ok(())
    }
}

impl PathSearchMonitor for TrialRecorder {
    fn name(&self) -> &str {
        "TrialRecorder"
    }

    fn on_start(&mut self, _initial_path: &Path<'_>) {}

    fn on_restart(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_iteration(&mut self, path: &Path<'_>, _statistics: &PathSearchStatistics) {
        self.record(path.cost());
    }

    fn on_best_path_updated(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_end(&mut self, _final_path: &Path<'_>, _statistics: &PathSearchStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_clear() {
        let mut recorder = TrialRecorder::with_capacity(4);
        assert!(recorder.is_empty());

        recorder.record(1);
        recorder.record(2);
        recorder.record(2);
        assert_eq!(recorder.costs(), &[1, 2, 2]);
        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.last(), Some(2));
        assert_eq!(recorder.max(), Some(2));
        assert!(recorder.is_non_decreasing());

        recorder.record(1);
        assert!(!recorder.is_non_decreasing());

        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.last(), None);
    }

    #[test]
    fn test_display_lists_iteration_and_cost() {
        let mut recorder = TrialRecorder::new();
        recorder.record(1);
        recorder.record(3);
        assert_eq!(format!("{}", recorder), "0 1\n1 3\n");
        assert_eq!(recorder.into_costs(), vec![1, 3]);
    }
}
