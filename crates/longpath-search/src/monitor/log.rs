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

use crate::{monitor::search_monitor::PathSearchMonitor, stats::PathSearchStatistics};
use longpath_graph::path::Path;
use std::time::{Duration, Instant};

/// Emits periodic progress events through `tracing`.
///
/// Progress lines are rate-limited by wall-clock time; the clock itself is
/// only read on iterations where `iterations & clock_check_mask == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    label: String,
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
}

impl LogMonitor {
    pub fn new<S>(label: S, log_interval: Duration, clock_check_mask: u64) -> Self
    where
        S: Into<String>,
    {
        Self {
            label: label.into(),
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
        }
    }

    /// A monitor logging at most once per second, checking the clock every
    /// 64 iterations.
    pub fn with_label<S>(label: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(label, Duration::from_secs(1), 0x3F)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::with_label("search")
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(label: {}, log_interval: {:?}, clock_check_mask: {})",
            self.label, self.log_interval, self.clock_check_mask
        )
    }
}

impl PathSearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial_path: &Path<'_>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        tracing::debug!(
            label = %self.label,
            cost = initial_path.cost(),
            "path search started"
        );
    }

    fn on_restart(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        tracing::trace!(
            label = %self.label,
            iteration = statistics.iterations,
            start = ?path.endpoints().map(|(front, _)| front),
            "path emptied, restarting"
        );
    }

    fn on_iteration(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        if (statistics.iterations & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            tracing::info!(
                label = %self.label,
                elapsed_secs = self.start_time.elapsed().as_secs_f32(),
                iteration = statistics.iterations,
                cost = path.cost(),
                best = statistics.best_cost,
                restarts = statistics.restarts,
                "path search progress"
            );
            self.last_log_time = Instant::now();
        }
    }

    fn on_best_path_updated(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        tracing::trace!(
            label = %self.label,
            iteration = statistics.iterations,
            cost = path.cost(),
            "new longest path"
        );
    }

    fn on_end(&mut self, final_path: &Path<'_>, statistics: &PathSearchStatistics) {
        tracing::debug!(
            label = %self.label,
            iterations = statistics.iterations,
            final_cost = final_path.cost(),
            best = statistics.best_cost,
            extensions = statistics.extensions,
            contractions = statistics.contractions,
            restarts = statistics.restarts,
            shrink_proposals = statistics.shrink_proposals(),
            acceptance_rate = ?statistics.contraction_acceptance_rate(),
            "path search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longpath_graph::{generate::path_graph, vertex::FIRST_VERTEX};

    #[test]
    fn test_hooks_do_not_panic_without_subscriber() {
        let graph = path_graph(2);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let stats = PathSearchStatistics::default();

        let mut monitor = LogMonitor::new("test", Duration::ZERO, 0);
        monitor.on_start(&path);
        monitor.on_restart(&path, &stats);
        monitor.on_iteration(&path, &stats);
        monitor.on_best_path_updated(&path, &stats);
        monitor.on_end(&path, &stats);
        assert_eq!(monitor.label(), "test");
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::with_label("metropolis");
        assert_eq!(
            format!("{}", monitor),
            "LogMonitor(label: metropolis, log_interval: 1s, clock_check_mask: 63)"
        );
    }
}
