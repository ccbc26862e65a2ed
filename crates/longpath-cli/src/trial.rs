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

//! Repeated trials comparing the search strategies.
//!
//! Each round generates one graph and runs `trials` searches per strategy on
//! it. The three strategies of a round run on scoped threads sharing the
//! read-only graph. Every strategy owns a ChaCha stream derived from the seed,
//! and the graphs come from a stream of their own, so a report is a pure
//! function of the configuration and the seed regardless of scheduling.

use crate::config::{GraphKind, TrialConfig, TrialConfigError};
use longpath_graph::{
    generate::{random_graph, star_graph},
    graph::Graph,
};
use longpath_search::{
    engine::PathSearchEngine,
    meta::{
        gradient_descent::GradientDescent, metaheuristic::PathMetaheuristic, metropolis::Metropolis,
    },
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, recorder::TrialRecorder,
        time::TimeLimitMonitor,
    },
    result::PathSearchTerminationReason,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const GRAPH_STREAM: u64 = 0;

/// A strategy compared by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Metropolis with square root annealing.
    AnnealedMetropolis,
    /// Metropolis at a constant temperature.
    ConstantMetropolis,
    /// Greedy growth.
    GradientDescent,
}

impl StrategyKind {
    /// The strategies in report order.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::AnnealedMetropolis,
        StrategyKind::ConstantMetropolis,
        StrategyKind::GradientDescent,
    ];

    /// Returns a short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::AnnealedMetropolis => "metropolis-fire",
            StrategyKind::ConstantMetropolis => "metropolis",
            StrategyKind::GradientDescent => "gradient-descent",
        }
    }

    /// Creates a fresh strategy instance for one search.
    pub fn build(&self, config: &TrialConfig) -> Box<dyn PathMetaheuristic> {
        match self {
            StrategyKind::AnnealedMetropolis => Box::new(
                Metropolis::annealing(config.k, config.temperature)
                    .with_acceptance(config.acceptance_rule())
                    .with_max_iterations(config.iterations),
            ),
            StrategyKind::ConstantMetropolis => Box::new(
                Metropolis::constant(config.k, config.temperature)
                    .with_acceptance(config.acceptance_rule())
                    .with_max_iterations(config.iterations),
            ),
            StrategyKind::GradientDescent => {
                Box::new(GradientDescent::new().with_max_iterations(config.iterations))
            }
        }
    }

    #[inline]
    fn stream(&self) -> u64 {
        match self {
            StrategyKind::AnnealedMetropolis => 1,
            StrategyKind::ConstantMetropolis => 2,
            StrategyKind::GradientDescent => 3,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregated results of one strategy within a round.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    kind: StrategyKind,
    total_cost: usize,
    best_cost: usize,
    aborted: usize,
    trials: usize,
    last_series: TrialRecorder,
}

impl StrategySummary {
    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Mean final cost over the trials.
    #[inline]
    pub fn average_cost(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_cost as f64 / self.trials as f64
    }

    /// Longest path length seen in any trial.
    #[inline]
    pub fn best_cost(&self) -> usize {
        self.best_cost
    }

    /// Number of trials stopped by the time limit.
    #[inline]
    pub fn aborted(&self) -> usize {
        self.aborted
    }

    /// Cost series of the last trial.
    #[inline]
    pub fn last_series(&self) -> &TrialRecorder {
        &self.last_series
    }
}

/// Results of one generated graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    round: usize,
    num_vertices: usize,
    num_edges: usize,
    strategies: Vec<StrategySummary>,
}

impl RoundSummary {
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Per-strategy results in `StrategyKind::ALL` order.
    #[inline]
    pub fn strategies(&self) -> &[StrategySummary] {
        &self.strategies
    }
}

/// Results of a whole harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    seed: u64,
    rounds: Vec<RoundSummary>,
}

impl TrialReport {
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    /// Cost series of the last trial of the last round, per strategy.
    pub fn last_series(&self) -> impl Iterator<Item = (StrategyKind, &TrialRecorder)> + '_ {
        self.rounds
            .last()
            .into_iter()
            .flat_map(|round| round.strategies.iter())
            .map(|s| (s.kind, &s.last_series))
    }
}

/// Runs the configured trials.
#[derive(Debug, Clone)]
pub struct TrialHarness {
    config: TrialConfig,
}

impl TrialHarness {
    /// Creates a harness for a validated configuration.
    pub fn new(config: TrialConfig) -> Result<Self, TrialConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs every round with generators derived from `seed`.
    pub fn run(&self, seed: u64) -> TrialReport {
        let mut graph_rng = stream_rng(seed, GRAPH_STREAM);
        let mut strategy_rngs = StrategyKind::ALL.map(|kind| stream_rng(seed, kind.stream()));

        tracing::info!(seed, config = %self.config, "trial run started");

        let mut rounds = Vec::with_capacity(self.config.rounds);
        for round in 0..self.config.rounds {
            let graph = self.generate_graph(&mut graph_rng);
            let strategies = self.run_round(&graph, &mut strategy_rngs);

            tracing::info!(
                round,
                vertices = graph.num_vertices(),
                edges = graph.num_edges(),
                averages = ?strategies.iter().map(StrategySummary::average_cost).collect::<Vec<_>>(),
                "round finished"
            );

            rounds.push(RoundSummary {
                round,
                num_vertices: graph.num_vertices(),
                num_edges: graph.num_edges(),
                strategies,
            });
        }

        TrialReport { seed, rounds }
    }

    fn generate_graph(&self, rng: &mut ChaCha8Rng) -> Graph {
        match self.config.graph {
            GraphKind::Random => {
                random_graph(self.config.vertices, self.config.edge_probability, rng)
            }
            GraphKind::Star => star_graph(self.config.vertices),
        }
    }

    fn run_round(&self, graph: &Graph, rngs: &mut [ChaCha8Rng; 3]) -> Vec<StrategySummary> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = StrategyKind::ALL
                .iter()
                .zip(rngs.iter_mut())
                .map(|(&kind, rng)| scope.spawn(move || self.run_strategy(kind, graph, rng)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        })
    }

    fn run_strategy(
        &self,
        kind: StrategyKind,
        graph: &Graph,
        rng: &mut ChaCha8Rng,
    ) -> StrategySummary {
        let mut engine = PathSearchEngine::preallocated(graph.num_vertices());
        let capacity = usize::try_from(self.config.iterations)
            .unwrap_or(usize::MAX)
            .min(1 << 16);
        let mut recorder = TrialRecorder::with_capacity(capacity);
        let mut summary = StrategySummary {
            kind,
            total_cost: 0,
            best_cost: 0,
            aborted: 0,
            trials: self.config.trials,
            last_series: TrialRecorder::new(),
        };

        for _ in 0..self.config.trials {
            recorder.clear();
            let mut strategy = kind.build(&self.config);

            let outcome = {
                let mut monitor = CompositeMonitor::with_capacity(3);
                monitor.add_monitor(&mut recorder);
                monitor.add_monitor(LogMonitor::with_label(kind.label()));
                if let Some(limit) = self.config.time_limit() {
                    monitor.add_monitor(TimeLimitMonitor::new(limit));
                }
                engine.run(graph, &mut strategy, &mut monitor, rng)
            };

            if matches!(
                outcome.termination_reason(),
                PathSearchTerminationReason::Aborted(_)
            ) {
                summary.aborted += 1;
            }
            summary.total_cost += outcome.cost();
            summary.best_cost = summary.best_cost.max(outcome.statistics().best_cost);
        }

        summary.last_series = recorder;
        summary
    }
}

#[inline]
fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Seed used when none is given: the current UNIX time in seconds.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrialConfigBuilder;

    fn small_config() -> TrialConfig {
        TrialConfigBuilder::new()
            .with_rounds(2)
            .with_trials(5)
            .with_vertices(30)
            .with_edge_probability(0.15)
            .with_iterations(200)
            .build()
            .unwrap()
    }

    #[test]
    fn test_report_shape() {
        let harness = TrialHarness::new(small_config()).unwrap();
        let report = harness.run(42);

        assert_eq!(report.seed(), 42);
        assert_eq!(report.rounds().len(), 2);
        for (i, round) in report.rounds().iter().enumerate() {
            assert_eq!(round.round(), i);
            assert_eq!(round.num_vertices(), 30);
            let kinds: Vec<_> = round.strategies().iter().map(|s| s.kind()).collect();
            assert_eq!(kinds, StrategyKind::ALL.to_vec());
            for summary in round.strategies() {
                assert!(summary.average_cost() <= summary.best_cost() as f64);
                assert_eq!(summary.aborted(), 0);
            }
        }

        let series: Vec<_> = report.last_series().collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].1.len(), 200);
        assert_eq!(series[1].1.len(), 200);
        assert!(series[2].1.is_non_decreasing());

        // Greedy growth never empties its path.
        for round in report.rounds() {
            assert!(round.strategies()[2].average_cost() >= 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let harness = TrialHarness::new(small_config()).unwrap();
        assert_eq!(harness.run(7), harness.run(7));
    }

    #[test]
    fn test_star_rounds_reach_three() {
        let config = TrialConfigBuilder::new()
            .with_graph(GraphKind::Star)
            .with_vertices(10)
            .with_trials(4)
            .build()
            .unwrap();
        let report = TrialHarness::new(config).unwrap().run(1);

        let descent = &report.rounds()[0].strategies()[2];
        assert_eq!(descent.kind(), StrategyKind::GradientDescent);
        assert_eq!(descent.average_cost(), 3.0);
        assert_eq!(descent.best_cost(), 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TrialConfig {
            trials: 0,
            ..TrialConfig::default()
        };
        assert!(matches!(
            TrialHarness::new(config),
            Err(TrialConfigError::ZeroTrials)
        ));
    }

    #[test]
    fn test_zero_time_limit_aborts_every_trial() {
        let config = TrialConfigBuilder::from(small_config())
            .with_rounds(1)
            .with_time_limit_ms(0)
            .build()
            .unwrap();
        let report = TrialHarness::new(config).unwrap().run(3);
        for summary in report.rounds()[0].strategies() {
            assert_eq!(summary.aborted(), 5);
            assert_eq!(summary.average_cost(), 1.0);
        }
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(StrategyKind::AnnealedMetropolis.label(), "metropolis-fire");
        assert_eq!(
            StrategyKind::GradientDescent
                .build(&TrialConfig::default())
                .name(),
            "GradientDescent"
        );
    }
}
