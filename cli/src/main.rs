//! Solve a text maze and print the solution.
//!
//! Run: cargo run -- maze.txt
//!      cat maze.txt | cargo run -- --color

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mazer::{SearchMode, Solver, SolverConfig};
use mazer_crossterm::StyledPrinter;

/// Solve a text maze with breadth-first search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file; reads stdin when omitted or "-"
    maze: Option<PathBuf>,

    /// JSON solver configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start marker character
    #[arg(long)]
    start: Option<char>,

    /// End marker character
    #[arg(long)]
    end: Option<char>,

    /// Character drawn on the solution path
    #[arg(long)]
    path: Option<char>,

    /// Fail on duplicate start or end markers
    #[arg(long)]
    strict: bool,

    /// Stop searching once the end is reached
    #[arg(long)]
    early_exit: bool,

    /// Colour the output
    #[arg(long)]
    color: bool,

    /// Print path length and explored cell count to stderr
    #[arg(long)]
    stats: bool,
}

impl Args {
    /// Build the solver configuration: defaults, then the config file, then flags.
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SolverConfig::default(),
        };
        if let Some(ch) = self.start {
            config.markers = config.markers.with_start(ch);
        }
        if let Some(ch) = self.end {
            config.markers = config.markers.with_end(ch);
        }
        if let Some(ch) = self.path {
            config.markers = config.markers.with_path(ch);
        }
        if self.strict {
            config.strict_markers = true;
        }
        if self.early_exit {
            config.search = SearchMode::StopAtEnd;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SolverConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn read_maze(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("Failed to read maze {}", p.display()))
        }
        _ => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .context("Failed to read maze from stdin")?;
            Ok(s)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.solver_config()?;
    let text = read_maze(args.maze.as_deref())?;

    let mut solver = Solver::new(&text, config)?;
    let grid = solver.solution_grid()?;

    if let Some(solution) = solver.solution() {
        info!(
            "solved in {} steps, {} cells explored",
            solution.steps(),
            solution.visited().len()
        );
        if args.stats {
            eprintln!(
                "steps: {}\nexplored: {}",
                solution.steps(),
                solution.visited().len()
            );
        }
    }

    if args.color {
        StyledPrinter::new()
            .print(&grid, solver.maze().markers())
            .context("Failed to write solution")?;
    } else {
        println!("{}", mazer::render::to_text(&grid));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
