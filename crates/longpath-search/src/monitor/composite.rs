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

use crate::{
    monitor::search_monitor::{PathSearchMonitor, SearchCommand},
    stats::PathSearchStatistics,
};
use longpath_graph::path::Path;

/// Fans every hook out to a list of monitors, in insertion order.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn PathSearchMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: PathSearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_boxed_monitor(&mut self, monitor: Box<dyn PathSearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn monitors(&self) -> &[Box<dyn PathSearchMonitor + 'a>] {
        &self.monitors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<'a> PathSearchMonitor for CompositeMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_start(&mut self, initial_path: &Path<'_>) {
        for m in &mut self.monitors {
            m.on_start(initial_path);
        }
    }

    fn on_restart(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        for m in &mut self.monitors {
            m.on_restart(path, statistics);
        }
    }

    fn on_iteration(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        for m in &mut self.monitors {
            m.on_iteration(path, statistics);
        }
    }

    fn on_best_path_updated(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        for m in &mut self.monitors {
            m.on_best_path_updated(path, statistics);
        }
    }

    fn on_end(&mut self, final_path: &Path<'_>, statistics: &PathSearchStatistics) {
        for m in &mut self.monitors {
            m.on_end(final_path, statistics);
        }
    }

    fn search_command(&mut self, statistics: &PathSearchStatistics) -> SearchCommand {
        for m in &mut self.monitors {
            match m.search_command(statistics) {
                SearchCommand::Continue => continue,
                // First request wins.
                SearchCommand::Terminate(msg) => return SearchCommand::Terminate(msg),
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::recorder::TrialRecorder;
    use longpath_graph::{generate::path_graph, vertex::FIRST_VERTEX};

    struct StopAfter {
        name: &'static str,
        limit: u64,
    }

    fn stop_after(name: &'static str, limit: u64) -> StopAfter {
        StopAfter { name, limit }
    }

    impl PathSearchMonitor for StopAfter {
        fn name(&self) -> &str {
            self.name
        }
        fn on_start(&mut self, _initial_path: &Path<'_>) {}
        fn on_restart(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}
        fn on_iteration(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}
        fn on_best_path_updated(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}
        fn on_end(&mut self, _final_path: &Path<'_>, _statistics: &PathSearchStatistics) {}
        fn search_command(&mut self, statistics: &PathSearchStatistics) -> SearchCommand {
            if statistics.iterations >= self.limit {
                SearchCommand::Terminate(format!("{} stopped", self.name))
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeMonitor::new();
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&PathSearchStatistics::default()),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(stop_after("late", 10));
        composite.add_monitor(stop_after("early", 2));
        composite.add_monitor(stop_after("also", 2));
        assert_eq!(composite.len(), 3);

        let stats = PathSearchStatistics {
            iterations: 5,
            ..Default::default()
        };
        assert_eq!(
            composite.search_command(&stats),
            SearchCommand::Terminate("early stopped".to_string())
        );
    }

    #[test]
    fn test_hooks_reach_borrowed_monitors() {
        let graph = path_graph(3);
        let path = Path::from_vertex(&graph, FIRST_VERTEX);
        let mut recorder = TrialRecorder::new();
        {
            let mut composite = CompositeMonitor::new();
            composite.add_monitor(&mut recorder);
            composite.add_boxed_monitor(Box::new(stop_after("x", 1)));

            let stats = PathSearchStatistics::default();
            composite.on_start(&path);
            composite.on_iteration(&path, &stats);
            composite.on_iteration(&path, &stats);
            composite.on_end(&path, &stats);
            assert_eq!(format!("{:?}", composite), "[\"TrialRecorder\", \"x\"]");
        }
        assert_eq!(recorder.costs(), &[1, 1]);
    }
}
