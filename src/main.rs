//! Dijkstra decrease-key sweep and sorting demonstrations.
//!
//! `dijkstra` generates random complete graphs of 2^k vertices, runs
//! Dijkstra's algorithm from one source on each, and prints the number of
//! decrease-key operations per size (one per line) so the growth against
//! |V| can be studied. `sort` sorts a list with one of five classic
//! algorithms and prints the result.
//!
//! Logs go to stderr and are controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dijkstra_sorting::config::{Cli, Command, DijkstraArgs, SortArgs};
use dijkstra_sorting::dijkstra::Path;
use dijkstra_sorting::sorting::{SortAlgorithm, Sorter};
use dijkstra_sorting::sweep::run_sweep_with;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dijkstra_sorting=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dijkstra(args) => run_dijkstra(&args),
        Command::Sort(args) => run_sort(&args),
    }
}

fn run_dijkstra(args: &DijkstraArgs) -> Result<()> {
    let config = args.sweep_config();
    info!(
        start = config.start_exponent,
        end = config.end_exponent,
        source = config.source,
        seed = ?config.seed,
        "starting decrease-key sweep"
    );

    let mut last_path: Option<dijkstra_sorting::Result<Path>> = None;
    let report = run_sweep_with(&config, |measured| {
        println!("{}", measured.run.decrease_key_count());
        if let Some(dest) = args.path_to {
            last_path = Some(measured.run.path_to(dest));
        }
    })?;

    if let Some(path) = last_path {
        let path = path.context("could not reconstruct path on the largest graph")?;
        println!("{}", path);
    }

    if let Some(ref lino) = args.lino {
        report
            .save_lino(lino)
            .with_context(|| format!("writing {}", lino.display()))?;
        info!(path = %lino.display(), "Links Notation report written");
    }
    if let Some(ref markdown) = args.markdown {
        report
            .save_markdown(markdown)
            .with_context(|| format!("writing {}", markdown.display()))?;
        info!(path = %markdown.display(), "Markdown report written");
    }

    Ok(())
}

fn run_sort(args: &SortArgs) -> Result<()> {
    if args.items.is_empty() {
        // {4,3,2,1} by quick sort, four names by insertion sort
        let mut numbers = Sorter::new(vec![4, 3, 2, 1]);
        numbers.sort(args.algorithm.unwrap_or(SortAlgorithm::Quick));
        let mut names = Sorter::new(vec!["sanjana", "mitul", "balamurugan", "jayapriya"]);
        names.sort(args.algorithm.unwrap_or(SortAlgorithm::Insertion));
        println!("{}", numbers);
        println!("{}", names);
        return Ok(());
    }

    let algorithm = args.algorithm.unwrap_or(SortAlgorithm::Quick);
    info!(%algorithm, items = args.items.len(), "sorting");

    if args.numeric {
        let numbers = args
            .items
            .iter()
            .map(|item| {
                item.parse::<i64>()
                    .with_context(|| format!("'{}' is not an integer", item))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut sorter = Sorter::new(numbers);
        sorter.sort(algorithm);
        println!("{}", sorter);
    } else {
        let mut sorter = Sorter::from_slice(&args.items);
        sorter.sort(algorithm);
        println!("{}", sorter);
    }

    Ok(())
}
