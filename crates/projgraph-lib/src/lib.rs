//! # projgraph Library
//!
//! Project dependency graphs for MSBuild solutions and projects.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared enums
//! - [`logger`] - Structured logging with progress tracking
//! - [`descriptor`] - `.sln` manifest and project descriptor parsing
//! - [`graph`] - Discovery, reconciliation and merging of project graphs
//! - [`output`] - yUML based renderers for a finished graph
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! use projgraph_lib::graph::{AnalysisRequest, analyze};
//!
//! let graph = analyze(&AnalysisRequest::new("All.sln")).unwrap();
//! for project in graph.repository.sorted_by_file_name() {
//!     println!("{} -> {} children", project.name(), project.children().len());
//! }
//! ```

pub mod application;
pub mod descriptor;
pub mod graph;
pub mod logger;
pub mod output;
pub mod primitives;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{AnalysisRequest, GraphError, RootGraph, analyze};
pub use logger::Logger;
pub use output::{OutputError, OutputProvider, OutputSettings, create_provider};
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, OutputType};

// Private imports for the main function
use anyhow::Result;
use application::{EnvironmentConfig, load_env_files};
use clap::Parser;

pub fn main() -> Result<()> {
    // .env files first so clap's env fallbacks can see them
    load_env_files()?;

    let cli = Cli::parse();
    let env = EnvironmentConfig::load()?;
    let config = AppConfig::resolve(&cli, &env)?;

    let terminal_colors = console::Term::stderr().features().colors_supported();
    let logger_config = config.to_logger_config(terminal_colors);
    console::set_colors_enabled(logger_config.color);
    Logger::init(logger_config)?;

    execute_command(cli.command)
}
