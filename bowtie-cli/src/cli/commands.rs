//! Command implementations and argument parsing for the `bowtie` CLI.

use std::io::{self, Write};

use bowtie_core::{
    BowtieError, GraphSampler, GraphSamplerBuilder, GraphStatistics, SamplingCounters,
    TypeDistribution,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "bowtie", about = "Generate random directed graphs with a bow-tie structure.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample a graph and report its statistics.
    Sample(SampleCommand),
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone)]
pub struct SampleCommand {
    /// Number of nodes to create.
    #[arg(long, default_value_t = GraphSamplerBuilder::DEFAULT_NODE_COUNT)]
    pub nodes: usize,

    /// Fraction of the n(n - 1) possible directed edges to sample.
    #[arg(long, default_value_t = GraphSamplerBuilder::DEFAULT_CONNECTIVITY_DENSITY)]
    pub density: f64,

    /// Probability of reciprocating an existing core edge on each iteration.
    #[arg(long, default_value_t = GraphSamplerBuilder::DEFAULT_RECIPROCITY_RATE)]
    pub reciprocity: f64,

    /// Seed for a reproducible graph; entropy-seeded when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Node type table such as `GSCC=0.78,GOUT=0.12,GIN=0.08,DC=0.02`.
    #[arg(long)]
    pub weights: Option<TypeDistribution>,

    /// Log every rejected sample.
    #[arg(long)]
    pub verbose: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Sampler construction or sampling failed.
    #[error(transparent)]
    Core(#[from] BowtieError),
}

/// Outcome of a `sample` run.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    /// Seed the run used, if one was supplied.
    pub seed: Option<u64>,
    /// Size, reciprocity, and type shares of the sampled graph.
    pub statistics: GraphStatistics,
    /// How the accepted edges were obtained.
    pub counters: SamplingCounters,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are rejected or sampling fails.
///
/// # Examples
/// ```
/// use bowtie_cli::cli::{Cli, Command, SampleCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Sample(SampleCommand {
///         nodes: 40,
///         density: 0.02,
///         reciprocity: 0.15,
///         seed: Some(7),
///         weights: None,
///         verbose: false,
///     }),
/// };
/// let summary = run_cli(cli).expect("sampling must succeed");
/// assert_eq!(summary.statistics.node_count(), 40);
/// assert_eq!(summary.statistics.edge_count(), 31);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<SampleSummary, CliError> {
    match cli.command {
        Command::Sample(sample) => {
            Span::current().record("command", field::display("sample"));
            run_sample(sample)
        }
    }
}

#[instrument(
    name = "cli.sample",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        density = command.density,
        reciprocity = command.reciprocity,
        seeded = command.seed.is_some(),
        weights = field::Empty,
    ),
)]
pub(super) fn run_sample(command: SampleCommand) -> Result<SampleSummary, CliError> {
    let SampleCommand {
        nodes,
        density,
        reciprocity,
        seed,
        weights,
        verbose,
    } = command;

    let mut builder = GraphSampler::builder()
        .with_node_count(nodes)
        .with_connectivity_density(density)
        .with_reciprocity_rate(reciprocity)
        .with_verbose(verbose);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    if let Some(weights) = weights {
        Span::current().record("weights", field::display(&weights));
        builder = builder.with_type_distribution(weights);
    }

    let mut sampler = builder.build()?;
    sampler.sample_edges()?;
    let statistics = sampler.statistics();
    info!(
        nodes = statistics.node_count(),
        edges = statistics.edge_count(),
        reciprocity = %statistics.reciprocity(),
        "sample completed"
    );
    Ok(SampleSummary {
        seed,
        statistics,
        counters: sampler.counters(),
    })
}

/// Renders `summary` to `writer` as a plain-text report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use bowtie_cli::cli::{SampleSummary, render_summary};
/// use bowtie_core::{GraphStatistics, Node, NodeType, SamplingCounters};
///
/// let nodes = [Node::new("0", NodeType::Gscc), Node::new("1", NodeType::Dc)];
/// let summary = SampleSummary {
///     seed: None,
///     statistics: GraphStatistics::compute(&nodes, &[]),
///     counters: SamplingCounters::default(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer).expect("writing to a Vec cannot fail");
/// assert_eq!(
///     String::from_utf8(buffer).expect("report is UTF-8"),
///     "nodes: 2\nedges: 0\nreciprocity: 0.00%\ntype distribution:\nGSCC:50.00%\nDC:50.00%\n",
/// );
/// ```
pub fn render_summary(summary: &SampleSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = &summary.statistics;
    writeln!(writer, "nodes: {}", stats.node_count())?;
    writeln!(writer, "edges: {}", stats.edge_count())?;
    writeln!(writer, "reciprocity: {}", stats.reciprocity())?;
    writeln!(writer, "type distribution:")?;
    let report = stats.type_distribution();
    if !report.entries().is_empty() {
        writeln!(writer, "{report}")?;
    }
    Ok(())
}
