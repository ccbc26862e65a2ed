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

//! Monitor interface for path searches.
//!
//! A `PathSearchMonitor` observes a run through lifecycle hooks (start,
//! restart, iteration, new longest path, end) and may ask the engine to stop
//! early through `search_command`. Monitors never mutate the path; they see it
//! by shared reference after each step.

use crate::stats::PathSearchStatistics;
use longpath_graph::path::Path;

/// The engine's next step as requested by a monitor.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

pub trait PathSearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once before the first iteration.
    fn on_start(&mut self, initial_path: &Path<'_>);

    /// Called when an emptied path has been replaced by a fresh start vertex.
    fn on_restart(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics);

    /// Called at the end of every completed iteration.
    fn on_iteration(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics);

    /// Called when the path grows beyond the longest path seen so far.
    fn on_best_path_updated(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics);

    /// Called once after the last iteration.
    fn on_end(&mut self, final_path: &Path<'_>, statistics: &PathSearchStatistics);

    /// Determines the command for the next iteration.
    fn search_command(&mut self, _statistics: &PathSearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<M> PathSearchMonitor for &mut M
where
    M: PathSearchMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_start(&mut self, initial_path: &Path<'_>) {
        (**self).on_start(initial_path)
    }

    fn on_restart(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        (**self).on_restart(path, statistics)
    }

    fn on_iteration(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        (**self).on_iteration(path, statistics)
    }

    fn on_best_path_updated(&mut self, path: &Path<'_>, statistics: &PathSearchStatistics) {
        (**self).on_best_path_updated(path, statistics)
    }

    fn on_end(&mut self, final_path: &Path<'_>, statistics: &PathSearchStatistics) {
        (**self).on_end(final_path, statistics)
    }

    fn search_command(&mut self, statistics: &PathSearchStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }
}

impl<'a> std::fmt::Debug for dyn PathSearchMonitor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathSearchMonitor {{ name: {} }}", self.name())
    }
}

impl<'a> std::fmt::Display for dyn PathSearchMonitor + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PathSearchMonitor: {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_default_is_continue() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_search_command_display() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("time limit exceeded".into())),
            "Terminate: time limit exceeded"
        );
    }
}
