//! Isolated environment for end-to-end analysis runs
//!
//! Owns a temp directory holding the sources and an output folder, and runs
//! the same command handler the binary uses.

use anyhow::Result;
use projgraph_lib::application::AnalyzeArgs;
use projgraph_lib::application::commands::handle_analyze;
use projgraph_lib::output::{DEFAULT_YUML_URL, OutputResponse};
use projgraph_lib::primitives::OutputType;
use projgraph_lib::testing::TempDirFixture;
use std::path::{Path, PathBuf};

use crate::fixtures::Layout;

pub struct TestEnvironment {
    pub fixture: TempDirFixture,
    pub output_folder: PathBuf,
    /// Text the command printed
    pub printed: String,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let fixture = TempDirFixture::new().map_err(|e| anyhow::anyhow!("{e}"))?;
        let output_folder = fixture.file("output");
        Ok(Self {
            fixture,
            output_folder,
            printed: String::new(),
        })
    }

    pub fn with_layout(layout: Layout) -> Result<(Self, PathBuf)> {
        let env = Self::new()?;
        let root = layout.write(&env.fixture)?;
        Ok((env, root))
    }

    /// Arguments for analyzing `root_file` into this environment's output folder
    pub fn args(&self, root_file: &Path, output_type: OutputType) -> AnalyzeArgs {
        AnalyzeArgs {
            root_file: root_file.to_path_buf(),
            merge_with: Vec::new(),
            include_external: false,
            level_to_dig: None,
            output_type,
            output_folder: self.output_folder.clone(),
            output_each_item: false,
            yuml_url: DEFAULT_YUML_URL.to_string(),
        }
    }

    pub fn run(&mut self, args: &AnalyzeArgs) -> Result<OutputResponse> {
        let mut out = Vec::new();
        let response = handle_analyze(args, &mut out)?;
        self.printed = String::from_utf8(out)?;
        Ok(response)
    }

    pub fn output(&self, file_name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.output_folder.join(file_name))?)
    }

    pub fn output_exists(&self, file_name: &str) -> bool {
        self.output_folder.join(file_name).is_file()
    }
}
