/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface.
//!
//! The `digraph-scc` binary generates a random graph, computes its strongly
//! connected components using both [Kosaraju's algorithm](crate::algo::sccs::kosaraju)
//! and the reference implementation, prints the graph, the components and the
//! timings, and fails if the two implementations disagree.

use crate::compare::{compare_random, Comparison};
use crate::graphs::random::UniformArcs;
use crate::graphs::reverse::{Materialized, OnDemand, ReverseAdjacency};
use anyhow::{anyhow, bail, ensure, Result};
use clap::{Args, Parser, ValueEnum};
use dsi_progress_logger::{progress_logger, ProgressLog};
use std::io::Write;
use std::time::{Duration, SystemTime};

pub mod render;

/// The number of vertices used when no positional argument is given.
pub const DEFAULT_NUM_VERTICES: usize = 10;
/// The number of edges used when no positional argument is given.
pub const DEFAULT_NUM_EDGES: usize = 20;

/// Parses the value of `--log-interval`.
///
/// The value is a sequence of numbers, each followed by a unit: `d` (days),
/// `h` (hours), `m` (minutes) or `s` (seconds). A trailing number without a
/// unit is a number of milliseconds, so `2500` and `2s500` are the same
/// interval. Whitespace is ignored.
fn parse_duration(value: &str) -> Result<Duration> {
    ensure!(
        !value.trim().is_empty(),
        "Empty log interval: use `0` to log at every update"
    );
    let mut duration = Duration::ZERO;
    let mut digits = String::new();
    for c in value.chars().filter(|c| !c.is_whitespace()) {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let secs_per_unit = match c {
            'd' => 24 * 60 * 60,
            'h' => 60 * 60,
            'm' => 60,
            's' => 1,
            _ => bail!("Invalid unit '{}' in log interval {}", c, value),
        };
        let amount = digits
            .parse::<u64>()
            .map_err(|e| anyhow!("Missing amount before '{}' in {}: {}", c, value, e))?;
        duration += Duration::from_secs(amount * secs_per_unit);
        digits.clear();
    }
    if !digits.is_empty() {
        duration += Duration::from_millis(digits.parse()?);
    }
    Ok(duration)
}

/// Parses the number of vertices of the random graph.
///
/// This function is meant to be used with `#[arg(..., value_parser =
/// num_vertices_parser)]`.
pub fn num_vertices_parser(arg: &str) -> Result<usize> {
    let num_vertices = arg.parse::<usize>()?;
    ensure!(num_vertices > 1, "Number of vertices must be greater than 1");
    Ok(num_vertices)
}

/// Parses the number of edges of the random graph.
///
/// This function is meant to be used with `#[arg(..., value_parser =
/// num_edges_parser)]`.
pub fn num_edges_parser(arg: &str) -> Result<usize> {
    let num_edges = arg.parse::<usize>()?;
    ensure!(num_edges > 0, "Number of edges must be greater than 0");
    Ok(num_edges)
}

/// Initializes `env_logger`, reading the filter from `RUST_LOG` (default
/// `info`).
///
/// Each line starts with the wall-clock time and the time elapsed since this
/// call, rounded to milliseconds, so that the duration of the two passes and
/// of the reference computation can be read directly from the log.
pub fn init_env_logger() -> Result<()> {
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
    use jiff::{Span, SpanRound, Timestamp, Unit};

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let rounding = SpanRound::new()
        .largest(Unit::Day)
        .smallest(Unit::Millisecond)
        .days_are_24_hours();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let now = Timestamp::try_from(SystemTime::now()).map_err(std::io::Error::other)?;
            let elapsed = start.elapsed();
            let uptime = Span::new()
                .seconds(elapsed.as_secs() as i64)
                .milliseconds(elapsed.subsec_millis() as i64)
                .round(rounding)
                .map_err(std::io::Error::other)?;
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {} {style}{}{style:#} {} - {}",
                now.strftime("%F %T%.3f"),
                printer.span_to_string(&uptime),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
pub fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.6} seconds", elapsed % 60.0));
    result
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
/// How in-neighbors are found during the second pass of Kosaraju's algorithm.
pub enum Reverse {
    /// Keep a list of in-neighbors for each vertex.
    #[default]
    Materialized,
    /// Scan the whole graph at each request (quadratic).
    OnDemand,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often Kosaraju's passes log their progress (default 10s), as a
    /// sequence of amounts with units "d", "h", "m" or "s", optionally
    /// followed by milliseconds: for example, "1m30s" or "1500".
    pub log_interval: Option<Duration>,
}

#[derive(Args, Debug)]
pub struct CliArgs {
    #[arg(requires = "num_edges", value_parser = num_vertices_parser)]
    /// The number of vertices of the random graph (at least 2; default 10).
    pub num_vertices: Option<usize>,

    #[arg(value_parser = num_edges_parser)]
    /// The number of edges of the random graph (at least 1; default 20).
    pub num_edges: Option<usize>,

    #[arg(short, long)]
    /// The seed of the pseudorandom number generator. If not specified, a
    /// random seed is used and logged.
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Reverse::Materialized)]
    /// How in-neighbors are found.
    pub reverse: Reverse,

    #[arg(short, long)]
    /// Do not print the graph.
    pub quiet_graph: bool,
}

impl CliArgs {
    /// Returns the number of vertices and edges, using defaults if they were
    /// not specified.
    pub fn size(&self) -> (usize, usize) {
        match (self.num_vertices, self.num_edges) {
            (Some(num_vertices), Some(num_edges)) => (num_vertices, num_edges),
            _ => (DEFAULT_NUM_VERTICES, DEFAULT_NUM_EDGES),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "digraph-scc", version)]
/// Computes the strongly connected components of a random directed graph
/// using Kosaraju's algorithm and compares the result and the running time
/// with those of petgraph.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[clap(flatten)]
    pub global_args: GlobalArgs,
    #[clap(flatten)]
    pub args: CliArgs,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    main(cli.global_args, cli.args)?;

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    match args.reverse {
        Reverse::Materialized => run::<Materialized>(global_args, args),
        Reverse::OnDemand => {
            log::warn!("In-neighbors are computed on demand: the running time will be quadratic");
            run::<OnDemand>(global_args, args)
        }
    }
}

pub fn run<R: ReverseAdjacency>(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let (num_vertices, num_edges) = args.size();
    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            log::info!("Using random seed {}", seed);
            seed
        }
    };
    let arcs = UniformArcs::new(num_vertices, num_edges, seed)?;

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let comparison: Comparison<R> = compare_random(&arcs, &mut pl)?;
    log::info!(
        "Found {} strongly connected components",
        comparison.sccs.num_components()
    );

    let mut stdout = std::io::stdout().lock();
    render::write_report(&mut stdout, &comparison, !args.quiet_graph)?;
    stdout.flush()?;

    ensure!(
        comparison.agree(),
        "The components differ from those computed by the reference implementation (seed {})",
        seed
    );
    Ok(())
}
