//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `list`: List the available categories and problems
//! - `run`: Run a problem's demonstration
//! - `inspect`: Build an ad-hoc graph from the command line and analyze it
//!
//! # Example
//!
//! ```bash
//! kata list
//! kata run datastructures graph
//! kata inspect --edge A-B:1 --edge A-C:2 --edge C-E:1 --start A --to E
//! kata inspect --directed --edge A-B --edge B-A --json
//! ```

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog;
use crate::inspect::{self, EdgeSpec};

/// Kata - interview practice problems
///
/// Runs the demonstration for a problem in the catalog.
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List available categories and problems
    List,

    /// Run the demonstration for a problem
    Run(RunArgs),

    /// Build a string-labelled graph and print its analysis
    Inspect(InspectArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Problem category (e.g., "datastructures")
    pub category: String,

    /// Problem name within the category (e.g., "graph")
    pub problem: String,
}

/// Arguments for the `inspect` command
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Treat edges as one-way
    #[arg(short, long)]
    pub directed: bool,

    /// Vertex to add, even if no edge touches it (repeatable)
    #[arg(short, long = "vertex")]
    pub vertices: Vec<String>,

    /// Edge as FROM-TO or FROM-TO:WEIGHT (repeatable)
    ///
    /// Endpoints are added as vertices automatically.
    #[arg(short, long = "edge", value_parser = inspect::parse_edge)]
    pub edges: Vec<EdgeSpec>,

    /// Vertex to start traversals and path search from (defaults to the first vertex)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Compute the shortest path from the start to this vertex
    #[arg(short, long)]
    pub to: Option<String>,

    /// Output in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Execute the parsed command, writing results to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        match &self.command {
            Commands::List => catalog::list(out),
            Commands::Run(args) => catalog::run(&args.category, &args.problem, out),
            Commands::Inspect(args) => inspect::run(args, out),
        }
    }
}
