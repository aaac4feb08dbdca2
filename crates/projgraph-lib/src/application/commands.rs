//! Command execution handlers
//!
//! Handlers write user-facing lines to the supplied writer; diagnostics go
//! through tracing.

use crate::application::cli::{AnalyzeArgs, Commands};
use crate::graph::{RootGraph, analyze};
use crate::output::{OutputResponse, create_provider};
use crate::progress_span;
use anyhow::{Context, Result};
use console::style;
use std::io::Write;
use tracing::{info, warn};

/// Execute a parsed command, printing to stdout
pub fn execute_command(command: Option<Commands>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command_with_output(command, &mut out)
}

/// Execute a parsed command against an explicit writer (for testing)
pub fn execute_command_with_output(command: Option<Commands>, out: &mut dyn Write) -> Result<()> {
    match command {
        None => {
            writeln!(out, "projgraph - project dependency graphs for MSBuild solutions")?;
            writeln!(out, "{}", style("Run 'projgraph --help' for usage information").dim())?;
            Ok(())
        }
        Some(Commands::Version) => handle_version(out),
        Some(Commands::Analyze(args)) => handle_analyze(&args, out).map(|_| ()),
    }
}

fn handle_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "projgraph {}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

pub fn handle_analyze(args: &AnalyzeArgs, out: &mut dyn Write) -> Result<OutputResponse> {
    let graph = analyze(&args.to_request())
        .with_context(|| format!("Failed to analyze {}", args.root_file.display()))?;

    let unresolved = count_unresolved(&graph);
    if unresolved > 0 {
        warn!(unresolved, "Some links could not be matched to a project");
    }

    let provider = create_provider(args.output_type, args.output_settings())
        .context("Failed to create output provider")?;

    let response = {
        let _span = progress_span!("render", total = graph.repository.len()).entered();
        provider
            .create(&graph, &args.output_folder)
            .with_context(|| format!("Failed to write output to {}", args.output_folder.display()))?
    };

    info!(
        files = response.files.len(),
        path = %response.path.display(),
        "Output written"
    );

    writeln!(
        out,
        "{} {} projects from {}",
        style("✓").green(),
        graph.repository.len(),
        graph.name
    )?;
    if unresolved > 0 {
        writeln!(out, "{} {} unresolved links", style("!").yellow(), unresolved)?;
    }
    writeln!(out, "  {}", response.path.display())?;
    Ok(response)
}

fn count_unresolved(graph: &RootGraph) -> usize {
    graph
        .repository
        .iter()
        .map(|node| node.children().placeholders().count())
        .sum()
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
