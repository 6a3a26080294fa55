use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bk_index::query_parser::Command;
use bk_index::query_parser::command::HELP;
use bk_index::{BkTree, Insertion, Removal, word_list};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bk-index", about = "Fuzzy word lookup over a BK-tree", version)]
struct Cli {
    /// Word list to load before reading commands (plain text or .bz2)
    #[arg(long = "words", short = 'w')]
    words: Vec<PathBuf>,

    /// Print the loaded tree as JSON and exit
    #[arg(long)]
    export: bool,

    /// Enable debug logging (honours RUST_LOG)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        EnvFilter::new("off")
    } else if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> bk_index::Result<()> {
    let mut tree = BkTree::new();
    for path in &cli.words {
        tree.extend(word_list::load(path)?);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.export {
        return execute(&mut tree, Command::Export, &mut out).map(|_| ());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => {
                if !execute(&mut tree, command, &mut out)? {
                    break;
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
        out.flush()?;
    }
    Ok(())
}

/// Runs one command against the tree. Returns `false` once the user asks to quit.
fn execute(
    tree: &mut BkTree,
    command: Command,
    out: &mut impl Write,
) -> bk_index::Result<bool> {
    match command {
        Command::Add(word) => {
            let message = match tree.insert(word.as_str()) {
                Insertion::Created => "added",
                Insertion::Reactivated => "reactivated",
                Insertion::AlreadyPresent => "already indexed",
            };
            writeln!(out, "{message}: {word}")?;
        }
        Command::Remove(word) => {
            let message = match tree.remove(&word) {
                Removal::Tombstoned => "removed",
                Removal::AlreadyTombstoned => "already removed",
                Removal::NotFound => "not indexed",
            };
            writeln!(out, "{message}: {word}")?;
        }
        Command::Search { word, max_distance } => {
            let mut matches = tree.search(&word, max_distance);
            matches.sort_by(|a, b| {
                a.distance
                    .cmp(&b.distance)
                    .then_with(|| a.word.cmp(&b.word))
            });
            if matches.is_empty() {
                writeln!(out, "no matches for {word:?} within {max_distance}")?;
            }
            for m in matches {
                writeln!(out, "{} (distance: {})", m.word, m.distance)?;
            }
        }
        Command::Export => {
            serde_json::to_writer_pretty(&mut *out, &tree.snapshot())?;
            writeln!(out)?;
        }
        Command::Stats => {
            writeln!(
                out,
                "words: {}, nodes: {}, tombstoned: {}",
                tree.len(),
                tree.node_count(),
                tree.tombstoned_count()
            )?;
        }
        Command::Compact => {
            let reclaimed = tree.compact();
            writeln!(out, "reclaimed {reclaimed} nodes")?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
