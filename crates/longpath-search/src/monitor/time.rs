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

//! Wall-clock termination for path searches.
//!
//! `TimeLimitMonitor` stops a run once a configured duration has elapsed since
//! `on_start`. Clock reads are throttled with a step mask applied to the
//! iteration counter: the clock is only queried when the masked value is zero.
//! The default mask `0x00FF` checks roughly every 256 iterations, which is
//! plenty for a loop whose iterations cost a few neighbor scans each.

use crate::{
    monitor::search_monitor::{PathSearchMonitor, SearchCommand},
    stats::PathSearchStatistics,
};
use longpath_graph::path::Path;
use std::time::{Duration, Instant};

/// Terminates a path search after a fixed wall-clock duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
}

impl TimeLimitMonitor {
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x00FF;

    /// Creates a new `TimeLimitMonitor` with the specified time limit.
    pub fn new(time_limit: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
        }
    }

    /// Creates a new `TimeLimitMonitor` with a custom step clock check mask.
    /// Lower mask values check more often; higher values check less often.
    pub fn with_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask,
        }
    }

    /// Returns the configured limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl PathSearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_start(&mut self, _initial_path: &Path<'_>) {
        self.start_time = Instant::now();
    }

    fn on_restart(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_iteration(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_best_path_updated(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_end(&mut self, _final_path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn search_command(&mut self, statistics: &PathSearchStatistics) -> SearchCommand {
        if (statistics.iterations & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit exceeded".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longpath_graph::generate::path_graph;
    use longpath_graph::vertex::FIRST_VERTEX;

    #[test]
    fn test_zero_limit_terminates_on_masked_step() {
        let graph = path_graph(2);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let mut monitor = TimeLimitMonitor::with_mask(Duration::ZERO, 0x3);
        monitor.on_start(&path);

        let stats = |iterations| PathSearchStatistics {
            iterations,
            ..Default::default()
        };
        assert_eq!(monitor.search_command(&stats(1)), SearchCommand::Continue);
        assert_eq!(
            monitor.search_command(&stats(4)),
            SearchCommand::Terminate("time limit exceeded".to_string())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600));
        assert_eq!(monitor.time_limit(), Duration::from_secs(3600));
        assert_eq!(
            monitor.search_command(&PathSearchStatistics::default()),
            SearchCommand::Continue
        );
    }
}
