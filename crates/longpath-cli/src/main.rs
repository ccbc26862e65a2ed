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

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use longpath_cli::config::{AcceptanceKind, GraphKind, TrialConfig, TrialConfigBuilder};
use longpath_cli::trial::{seed_from_clock, TrialHarness};
use tracing_subscriber::EnvFilter;

/// longpath: compare Metropolis and gradient descent searches for long simple paths.
#[derive(Parser)]
#[command(name = "longpath", version, about)]
struct Cli {
    /// Seed of the random generators. Defaults to the current UNIX time.
    seed: Option<u64>,
    /// Path to a trial config TOML file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the number of generated graphs.
    #[arg(long)]
    rounds: Option<usize>,
    /// Override the number of trials per strategy and graph.
    #[arg(long)]
    trials: Option<usize>,
    /// Override the number of vertices per graph.
    #[arg(long)]
    vertices: Option<usize>,
    /// Override the edge probability of random graphs.
    #[arg(long)]
    edge_probability: Option<f64>,
    /// Override the graph family.
    #[arg(long, value_enum)]
    graph: Option<GraphKind>,
    /// Override the iteration budget of each search.
    #[arg(long)]
    iterations: Option<u64>,
    /// Override the Metropolis constant k.
    #[arg(long)]
    k: Option<f64>,
    /// Override the initial Metropolis temperature.
    #[arg(long)]
    temperature: Option<f64>,
    /// Override the Metropolis acceptance rule.
    #[arg(long, value_enum)]
    acceptance: Option<AcceptanceKind>,
    /// Stop every single search after this many milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Print only the averages, without the cost series.
    #[arg(long)]
    summary_only: bool,
}

impl Cli {
    /// Applies the command-line overrides on top of `base`.
    fn apply(&self, base: TrialConfig) -> anyhow::Result<TrialConfig> {
        let mut builder = TrialConfigBuilder::from(base);
        if let Some(n) = self.rounds {
            builder = builder.with_rounds(n);
        }
        if let Some(n) = self.trials {
            builder = builder.with_trials(n);
        }
        if let Some(n) = self.vertices {
            builder = builder.with_vertices(n);
        }
        if let Some(p) = self.edge_probability {
            builder = builder.with_edge_probability(p);
        }
        if let Some(graph) = self.graph {
            builder = builder.with_graph(graph);
        }
        if let Some(n) = self.iterations {
            builder = builder.with_iterations(n);
        }
        if let Some(k) = self.k {
            builder = builder.with_k(k);
        }
        if let Some(t) = self.temperature {
            builder = builder.with_temperature(t);
        }
        if let Some(acceptance) = self.acceptance {
            builder = builder.with_acceptance(acceptance);
        }
        if let Some(ms) = self.time_limit_ms {
            builder = builder.with_time_limit_ms(ms);
        }
        Ok(builder.build()?)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => TrialConfig::from_path(path)
            .with_context(|| format!("failed to load trial config {}", path.display()))?,
        None => TrialConfig::default(),
    };
    let config = cli.apply(base).context("invalid trial configuration")?;
    let seed = cli.seed.unwrap_or_else(seed_from_clock);

    let harness = TrialHarness::new(config)?;
    let report = harness.run(seed);

    if cli.summary_only {
        print!("{}", report.summary());
    } else {
        print!("{}", report.full());
    }
    Ok(())
}
