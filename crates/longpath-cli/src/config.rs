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

//! Trial configuration.
//!
//! A `TrialConfig` describes the graphs to generate and the strategy
//! parameters shared by every trial. It can be read from a TOML file, in which
//! every key is optional and falls back to the defaults below, and refined
//! through `TrialConfigBuilder`, which is how command-line overrides are
//! applied.
//!
//! ```toml
//! rounds = 1
//! trials = 100
//! vertices = 100
//! edge_probability = 0.1
//! graph = "random"
//! iterations = 1000
//! k = 1.0
//! temperature = 1000.0
//! acceptance = "exponential"
//! time_limit_ms = 50
//! ```

use longpath_search::meta::metropolis::AcceptanceRule;
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

/// The graph family generated for each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Uniform random graph `G(n, p)`.
    #[default]
    Random,
    /// Star with `n - 1` leaves.
    Star,
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphKind::Random => write!(f, "random"),
            GraphKind::Star => write!(f, "star"),
        }
    }
}

/// Serializable mirror of `AcceptanceRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AcceptanceKind {
    #[default]
    Exponential,
    Truncated,
}

impl Display for AcceptanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceptanceKind::Exponential => write!(f, "exponential"),
            AcceptanceKind::Truncated => write!(f, "truncated"),
        }
    }
}

impl From<AcceptanceKind> for AcceptanceRule {
    fn from(kind: AcceptanceKind) -> Self {
        match kind {
            AcceptanceKind::Exponential => AcceptanceRule::Exponential,
            AcceptanceKind::Truncated => AcceptanceRule::Truncated,
        }
    }
}

/// Parameters of a trial run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrialConfig {
    /// Number of graphs to generate; each graph is one round.
    pub rounds: usize,
    /// Number of trials per strategy and round.
    pub trials: usize,
    /// Number of vertices of each generated graph.
    pub vertices: usize,
    /// Edge probability of random graphs.
    pub edge_probability: f64,
    /// Graph family.
    pub graph: GraphKind,
    /// Iteration budget of each search.
    pub iterations: u64,
    /// Metropolis constant `k`.
    pub k: f64,
    /// Initial Metropolis temperature.
    pub temperature: f64,
    /// Metropolis acceptance rule.
    pub acceptance: AcceptanceKind,
    /// Optional wall-clock limit for a single search, in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            trials: 100,
            vertices: 100,
            edge_probability: 0.1,
            graph: GraphKind::Random,
            iterations: 1000,
            k: 1.0,
            temperature: 1000.0,
            acceptance: AcceptanceKind::Exponential,
            time_limit_ms: None,
        }
    }
}

impl TrialConfig {
    /// Parses a configuration from TOML and validates it.
    pub fn from_toml_str(contents: &str) -> Result<Self, TrialConfigError> {
        let config: TrialConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file and validates it.
    pub fn from_path<P>(path: P) -> Result<Self, TrialConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded trial config");
        Ok(config)
    }

    /// Checks every parameter the harness relies on.
    pub fn validate(&self) -> Result<(), TrialConfigError> {
        if self.rounds == 0 {
            return Err(TrialConfigError::ZeroRounds);
        }
        if self.trials == 0 {
            return Err(TrialConfigError::ZeroTrials);
        }
        if self.vertices == 0 {
            return Err(TrialConfigError::ZeroVertices);
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(TrialConfigError::InvalidEdgeProbability(
                self.edge_probability,
            ));
        }
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(TrialConfigError::InvalidConstant(self.k));
        }
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(TrialConfigError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }

    /// Returns the per-search time limit, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Returns the acceptance rule for the Metropolis strategies.
    #[inline]
    pub fn acceptance_rule(&self) -> AcceptanceRule {
        self.acceptance.into()
    }
}

impl Display for TrialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrialConfig(rounds: {}, trials: {}, graph: {}, vertices: {}, edge_probability: {}, iterations: {}, k: {}, temperature: {}, acceptance: {}, time_limit_ms: ",
            self.rounds,
            self.trials,
            self.graph,
            self.vertices,
            self.edge_probability,
            self.iterations,
            self.k,
            self.temperature,
            self.acceptance
        )?;
        match self.time_limit_ms {
            Some(ms) => write!(f, "{ms})"),
            None => write!(f, "none)"),
        }
    }
}

/// Errors produced while loading or validating a `TrialConfig`.
#[derive(Debug)]
pub enum TrialConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration file is not valid TOML for a `TrialConfig`.
    Parse(toml::de::Error),
    /// No graph rounds were requested.
    ZeroRounds,
    /// No trials were requested.
    ZeroTrials,
    /// The generated graphs would have no vertices.
    ZeroVertices,
    /// The edge probability is outside `[0, 1]`.
    InvalidEdgeProbability(f64),
    /// The Metropolis constant is not finite and positive.
    InvalidConstant(f64),
    /// The initial temperature is not finite and positive.
    InvalidTemperature(f64),
}

impl Display for TrialConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::ZeroRounds => write!(f, "The number of rounds must be positive"),
            Self::ZeroTrials => write!(f, "The number of trials must be positive"),
            Self::ZeroVertices => write!(f, "The number of vertices must be positive"),
            Self::InvalidEdgeProbability(p) => {
                write!(f, "Edge probability {p} is not within [0, 1]")
            }
            Self::InvalidConstant(k) => write!(f, "Constant k = {k} must be finite and positive"),
            Self::InvalidTemperature(t) => {
                write!(f, "Temperature {t} must be finite and positive")
            }
        }
    }
}

impl std::error::Error for TrialConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrialConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for TrialConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Builder for `TrialConfig`, starting from the defaults or an existing
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct TrialConfigBuilder {
    config: TrialConfig,
}

impl From<TrialConfig> for TrialConfigBuilder {
    fn from(config: TrialConfig) -> Self {
        Self { config }
    }
}

impl TrialConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.config.rounds = rounds;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.config.vertices = vertices;
        self
    }

    pub fn with_edge_probability(mut self, edge_probability: f64) -> Self {
        self.config.edge_probability = edge_probability;
        self
    }

    pub fn with_graph(mut self, graph: GraphKind) -> Self {
        self.config.graph = graph;
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.config.k = k;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn with_acceptance(mut self, acceptance: AcceptanceKind) -> Self {
        self.config.acceptance = acceptance;
        self
    }

    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.config.time_limit_ms = Some(time_limit_ms);
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<TrialConfig, TrialConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
