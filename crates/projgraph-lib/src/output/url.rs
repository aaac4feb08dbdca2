use super::client::diagram_url;
use super::translator::DiagramTranslator;
use super::{OutputError, OutputProvider, OutputResponse, root_file_name, write_output};
use crate::graph::RootGraph;
use std::path::Path;
use tracing::info;

/// Writes a single URL that renders the whole-graph diagram when opened
#[derive(Debug, Clone)]
pub struct YumlUrl {
    yuml_url: String,
}

impl YumlUrl {
    pub fn new(yuml_url: impl Into<String>) -> Self {
        Self {
            yuml_url: yuml_url.into(),
        }
    }
}

impl OutputProvider for YumlUrl {
    fn create(&self, root: &RootGraph, output_folder: &Path) -> Result<OutputResponse, OutputError> {
        let diagram = DiagramTranslator::new(root).whole_graph();
        let path = output_folder.join(format!("{}.url.yuml", root_file_name(root)));
        write_output(&path, diagram_url(&self.yuml_url, &diagram))?;

        info!(path = %path.display(), "Diagram URL written");
        Ok(OutputResponse::single(path))
    }
}
