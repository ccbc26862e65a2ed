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

use std::time::Duration;

/// Counters collected over one path search run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSearchStatistics {
    /// Number of iterations started.
    pub iterations: u64,

    /// Number of vertices pushed onto an endpoint.
    pub extensions: u64,

    /// Number of accepted shrink proposals.
    pub contractions: u64,

    /// Number of rejected shrink proposals.
    pub rejected_contractions: u64,

    /// Number of times an emptied path was restarted from a fresh vertex.
    pub restarts: u64,

    /// Length of the longest path seen during the run.
    pub best_cost: usize,

    /// Length of the path when the run ended.
    pub final_cost: usize,

    /// Total time taken by the run.
    pub time_total: Duration,
}

impl Default for PathSearchStatistics {
    fn default() -> Self {
        Self {
            iterations: 0,
            extensions: 0,
            contractions: 0,
            rejected_contractions: 0,
            restarts: 0,
            best_cost: 0,
            final_cost: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl PathSearchStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    #[inline]
    pub fn on_extension(&mut self) {
        self.extensions = self.extensions.saturating_add(1);
    }

    #[inline]
    pub fn on_contraction(&mut self) {
        self.contractions = self.contractions.saturating_add(1);
    }

    #[inline]
    pub fn on_rejected_contraction(&mut self) {
        self.rejected_contractions = self.rejected_contractions.saturating_add(1);
    }

    #[inline]
    pub fn on_restart(&mut self) {
        self.restarts = self.restarts.saturating_add(1);
    }

    /// Raises `best_cost` to `cost`. Returns `true` if it grew.
    #[inline]
    pub fn on_cost(&mut self, cost: usize) -> bool {
        if cost > self.best_cost {
            self.best_cost = cost;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn set_final_cost(&mut self, cost: usize) {
        self.final_cost = cost;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Number of shrink proposals, accepted or not.
    #[inline]
    pub fn shrink_proposals(&self) -> u64 {
        self.contractions.saturating_add(self.rejected_contractions)
    }

    /// Fraction of shrink proposals that were accepted, if any were made.
    #[inline]
    pub fn contraction_acceptance_rate(&self) -> Option<f64> {
        match self.shrink_proposals() {
            0 => None,
            n => Some(self.contractions as f64 / n as f64),
        }
    }
}

impl std::fmt::Display for PathSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Longpath Search Statistics:")?;
        writeln!(f, "   Iterations:            {}", self.iterations)?;
        writeln!(f, "   Extensions:            {}", self.extensions)?;
        writeln!(f, "   Contractions:          {}", self.contractions)?;
        writeln!(
            f,
            "   Rejected Contractions: {}",
            self.rejected_contractions
        )?;
        writeln!(f, "   Shrink Proposals:      {}", self.shrink_proposals())?;
        match self.contraction_acceptance_rate() {
            Some(rate) => writeln!(f, "   Acceptance Rate:       {:.3}", rate)?,
            None => writeln!(f, "   Acceptance Rate:       n/a")?,
        }
        writeln!(f, "   Restarts:              {}", self.restarts)?;
        writeln!(f, "   Best Cost:             {}", self.best_cost)?;
        writeln!(f, "   Final Cost:            {}", self.final_cost)?;
        writeln!(f, "   Total Time:            {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = PathSearchStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_extension();
        stats.on_contraction();
        stats.on_rejected_contraction();
        stats.on_rejected_contraction();
        stats.on_restart();

        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.extensions, 1);
        assert_eq!(stats.shrink_proposals(), 3);
        assert_eq!(stats.restarts, 1);
        let rate = stats.contraction_acceptance_rate().unwrap();
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_rate_without_proposals() {
        assert_eq!(
            PathSearchStatistics::default().contraction_acceptance_rate(),
            None
        );
    }

    #[test]
    fn test_on_cost_tracks_maximum() {
        let mut stats = PathSearchStatistics::default();
        assert!(stats.on_cost(3));
        assert!(!stats.on_cost(3));
        assert!(!stats.on_cost(2));
        assert!(stats.on_cost(4));
        assert_eq!(stats.best_cost, 4);
    }

    #[test]
    fn test_saturating_iterations() {
        let mut stats = PathSearchStatistics {
            iterations: u64::MAX,
            ..Default::default()
        };
        stats.on_iteration();
        assert_eq!(stats.iterations, u64::MAX);
    }

    #[test]
    fn test_display_contains_counters() {
        let stats = PathSearchStatistics {
            iterations: 7,
            best_cost: 5,
            ..Default::default()
        };
        let text = format!("{}", stats);
        assert!(text.contains("Iterations:            7"));
        assert!(text.contains("Best Cost:             5"));
        assert!(text.contains("Acceptance Rate:       n/a"));
    }

    #[test]
    fn test_display_reports_acceptance_rate() {
        let stats = PathSearchStatistics {
            contractions: 1,
            rejected_contractions: 3,
            ..Default::default()
        };
        let text = format!("{}", stats);
        assert!(text.contains("Shrink Proposals:      4"));
        assert!(text.contains("Acceptance Rate:       0.250"));
    }
}
