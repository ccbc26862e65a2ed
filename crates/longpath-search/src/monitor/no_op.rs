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

/// A monitor that observes nothing and never stops the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl PathSearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_start(&mut self, _initial_path: &Path<'_>) {}

    fn on_restart(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_iteration(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_best_path_updated(&mut self, _path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn on_end(&mut self, _final_path: &Path<'_>, _statistics: &PathSearchStatistics) {}

    fn search_command(&mut self, _statistics: &PathSearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}
