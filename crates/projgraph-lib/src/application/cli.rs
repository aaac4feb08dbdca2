use crate::graph::AnalysisRequest;
use crate::output::{DEFAULT_YUML_URL, OutputSettings};
use crate::primitives::OutputType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

pub const DEFAULT_OUTPUT_FOLDER: &str = "ProjectDependenciesOutput";

/// projgraph CLI - project dependency graphs for MSBuild solutions
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "projgraph")]
#[command(about = "Map the project references of a .sln, .csproj or .vcxproj")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Build the dependency graph of a root file and render it
    Analyze(AnalyzeArgs),

    /// Show version information
    Version,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct AnalyzeArgs {
    /// Solution or project file to start from
    #[arg(value_name = "ROOT_FILE")]
    pub root_file: PathBuf,

    /// Further roots whose projects may stand in for unresolved libraries
    #[arg(long, value_name = "FILE")]
    pub merge_with: Vec<PathBuf>,

    /// Record third-party assembly references
    #[arg(long)]
    pub include_external: bool,

    /// Maximum reference depth (advisory)
    #[arg(long, value_name = "N")]
    pub level_to_dig: Option<usize>,

    #[arg(long, value_enum, default_value = "yuml-reference-list")]
    pub output_type: OutputType,

    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_FOLDER)]
    pub output_folder: PathBuf,

    /// Also write one artifact per project
    #[arg(long)]
    pub output_each_item: bool,

    /// yUML service used for image rendering
    #[arg(long, value_name = "URL", default_value = DEFAULT_YUML_URL)]
    pub yuml_url: String,
}

impl AnalyzeArgs {
    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            root_file: self.root_file.clone(),
            merge_with: self.merge_with.clone(),
            include_external_references: self.include_external,
            search_depth: self.level_to_dig,
        }
    }

    /// HTML output always renders every project
    pub fn output_settings(&self) -> OutputSettings {
        OutputSettings {
            output_each_item: self.output_each_item || self.output_type == OutputType::HtmlDocument,
            yuml_url: self.yuml_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
