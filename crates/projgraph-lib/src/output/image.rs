use super::client::DiagramRenderer;
use super::translator::DiagramTranslator;
use super::{OutputError, OutputProvider, OutputResponse, root_file_name, write_output};
use crate::graph::RootGraph;
use std::path::Path;
use tracing::info;

/// Renders the whole-graph diagram to `<root>.svg`
pub struct YumlImage<R> {
    renderer: R,
}

impl<R: DiagramRenderer> YumlImage<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }
}

impl<R: DiagramRenderer> OutputProvider for YumlImage<R> {
    fn create(&self, root: &RootGraph, output_folder: &Path) -> Result<OutputResponse, OutputError> {
        let diagram = DiagramTranslator::new(root).whole_graph();
        let svg = self.renderer.render_svg(&diagram)?;

        let path = output_folder.join(format!("{}.svg", root_file_name(root)));
        write_output(&path, svg)?;

        info!(path = %path.display(), "Diagram image written");
        Ok(OutputResponse::single(path))
    }
}
