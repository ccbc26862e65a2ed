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

//! Plain-text rendering of a `TrialReport`.
//!
//! The layout is line oriented so it can be piped into plotting tools:
//!
//! ```text
//! Using rand seed: 42
//! 0 21.5 23.1 9.8
//! --------------------
//! 0 2
//! 1 3
//! ...
//! ```
//!
//! The first block holds one `round avg1 avg2 avg3` line per graph, with the
//! averages in `StrategyKind::ALL` order. Each following block, introduced by
//! a separator, is the `iteration cost` series of the last trial of one
//! strategy.

use crate::trial::TrialReport;
use std::fmt::{self, Display, Formatter};

const SEPARATOR: &str = "--------------------";

/// Renders the seed line and the per-round averages.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    report: &'a TrialReport,
}

/// Renders the summary followed by the cost series of every strategy.
#[derive(Debug, Clone, Copy)]
pub struct FullReport<'a> {
    report: &'a TrialReport,
}

impl TrialReport {
    /// Returns a view rendering only the averages.
    #[inline]
    pub fn summary(&self) -> Summary<'_> {
        Summary { report: self }
    }

    /// Returns a view rendering the averages and the cost series.
    #[inline]
    pub fn full(&self) -> FullReport<'_> {
        FullReport { report: self }
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using rand seed: {}", self.report.seed())?;
        for round in self.report.rounds() {
            write!(f, "{}", round.round())?;
            for strategy in round.strategies() {
                write!(f, " {}", strategy.average_cost())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for FullReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report.summary())?;
        for (_, series) in self.report.last_series() {
            writeln!(f, "{}", SEPARATOR)?;
            writeln!(f, "{}", series)?;
        }
        Ok(())
    }
}

impl Display for TrialReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GraphKind, TrialConfigBuilder};
    use crate::trial::TrialHarness;

    fn star_report() -> crate::trial::TrialReport {
        let config = TrialConfigBuilder::new()
            .with_graph(GraphKind::Star)
            .with_vertices(4)
            .with_trials(2)
            .with_iterations(3)
            .build()
            .unwrap();
        TrialHarness::new(config).unwrap().run(9)
    }

    #[test]
    fn test_summary_lines() {
        let report = star_report();
        let text = format!("{}", report.summary());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Using rand seed: 9");
        let fields: Vec<_> = lines[1].split(' ').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "0");
        assert_eq!(fields[3], "3");
    }

    #[test]
    fn test_full_report_has_three_series() {
        let report = star_report();
        let text = format!("{}", report);

        assert!(text.starts_with("Using rand seed: 9\n"));
        assert_eq!(text.matches("--------------------\n").count(), 3);

        // Three iterations per Metropolis series, two for the descent on a star.
        let blocks: Vec<_> = text.split("--------------------\n").skip(1).collect();
        assert_eq!(blocks[0].lines().filter(|l| !l.is_empty()).count(), 3);
        assert_eq!(blocks[1].lines().filter(|l| !l.is_empty()).count(), 3);
        assert_eq!(blocks[2], "0 2\n1 3\n\n");
    }
}
