//! Command-line configuration for the demonstration driver.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::dijkstra::SettlePolicy;
use crate::sorting::SortAlgorithm;
use crate::sweep::SweepConfig;

#[derive(Debug, Parser)]
#[command(
    name = "dijkstra-sorting",
    about = "Dijkstra decrease-key sweeps and classic comparison sorts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count decrease-key operations on random complete graphs of 2^k vertices
    Dijkstra(DijkstraArgs),
    /// Sort a list of items with one of the classic algorithms
    Sort(SortArgs),
}

#[derive(Debug, Args)]
pub struct DijkstraArgs {
    /// Smallest graph is 2^start vertices
    #[arg(long, default_value_t = 4)]
    pub start: u32,

    /// Sweep stops before 2^end vertices
    #[arg(long, default_value_t = 10)]
    pub end: u32,

    /// Source vertex for every run
    #[arg(long, default_value_t = 0)]
    pub source: usize,

    /// Seed the graph generator for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the shortest path to this vertex on the largest graph
    #[arg(long = "path-to")]
    pub path_to: Option<usize>,

    /// Which vertices are marked visited during a run
    #[arg(long, value_enum, default_value_t = SettleArg::SourceOnly)]
    pub settle: SettleArg,

    /// Write the sweep as a Links Notation report
    #[arg(long)]
    pub lino: Option<PathBuf>,

    /// Write the sweep as a Markdown report
    #[arg(long)]
    pub markdown: Option<PathBuf>,
}

impl DijkstraArgs {
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            start_exponent: self.start,
            end_exponent: self.end,
            source: self.source,
            seed: self.seed,
            policy: self.settle.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettleArg {
    SourceOnly,
    OnExtract,
}

impl From<SettleArg> for SettlePolicy {
    fn from(arg: SettleArg) -> Self {
        match arg {
            SettleArg::SourceOnly => SettlePolicy::SourceOnly,
            SettleArg::OnExtract => SettlePolicy::OnExtract,
        }
    }
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// bubble, selection, insertion, merge or quick
    #[arg(long, short)]
    pub algorithm: Option<SortAlgorithm>,

    /// Compare items as integers instead of strings
    #[arg(long)]
    pub numeric: bool,

    /// Items to sort; with none given, the built-in demo runs
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra_defaults_match_sweep_defaults() {
        let cli = Cli::parse_from(["dijkstra-sorting", "dijkstra"]);
        match cli.command {
            Command::Dijkstra(args) => {
                assert_eq!(args.sweep_config(), SweepConfig::default());
                assert!(args.lino.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_dijkstra_flags() {
        let cli = Cli::parse_from([
            "dijkstra-sorting",
            "dijkstra",
            "--start",
            "2",
            "--end",
            "5",
            "--seed",
            "9",
            "--settle",
            "on-extract",
            "--path-to",
            "3",
        ]);
        let Command::Dijkstra(args) = cli.command else {
            panic!("expected dijkstra subcommand");
        };
        let config = args.sweep_config();
        assert_eq!(config.start_exponent, 2);
        assert_eq!(config.end_exponent, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.policy, SettlePolicy::OnExtract);
        assert_eq!(args.path_to, Some(3));
    }

    #[test]
    fn test_sort_args() {
        let cli = Cli::parse_from(["dijkstra-sorting", "sort", "-a", "merge", "--numeric", "3", "1", "2"]);
        let Command::Sort(args) = cli.command else {
            panic!("expected sort subcommand");
        };
        assert_eq!(args.algorithm, Some(SortAlgorithm::Merge));
        assert!(args.numeric);
        assert_eq!(args.items, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let parsed = Cli::try_parse_from(["dijkstra-sorting", "sort", "-a", "heap"]);
        assert!(parsed.is_err());
    }
}
