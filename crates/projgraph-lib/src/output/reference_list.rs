use super::translator::DiagramTranslator;
use super::{OutputError, OutputProvider, OutputResponse, root_file_name, write_output};
use crate::graph::RootGraph;
use std::path::Path;
use tracing::info;

/// Writes the diagram text itself, one statement per line
#[derive(Debug, Clone, Default)]
pub struct YumlReferenceList {
    output_each_item: bool,
}

impl YumlReferenceList {
    pub fn new(output_each_item: bool) -> Self {
        Self { output_each_item }
    }
}

impl OutputProvider for YumlReferenceList {
    fn create(&self, root: &RootGraph, output_folder: &Path) -> Result<OutputResponse, OutputError> {
        let translator = DiagramTranslator::new(root);

        let path = output_folder.join(format!("{}.yuml", root_file_name(root)));
        write_output(&path, translator.whole_graph().to_multiline())?;
        let mut response = OutputResponse::single(path);

        if self.output_each_item {
            for node in root.repository.sorted_by_file_name() {
                let item = output_folder.join(format!("{}.yuml", node.file_name()));
                write_output(&item, translator.dependencies(node.id()).to_multiline())?;
                response.files.push(item);
            }
        }

        info!(files = response.files.len(), path = %response.path.display(), "Reference list written");
        Ok(response)
    }
}
