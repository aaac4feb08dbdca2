use super::client::DiagramRenderer;
use super::translator::DiagramTranslator;
use super::yuml::YumlDiagram;
use super::{OutputError, OutputProvider, OutputResponse, root_file_name, write_output};
use crate::graph::{LinkSet, ProjectRepository, RootGraph};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const TEMPLATE: &str = "references";

#[derive(Debug, Serialize)]
struct PageContext {
    root_file: String,
    root_image: Option<String>,
    projects: Vec<ProjectSection>,
}

#[derive(Debug, Serialize)]
struct ProjectSection {
    id: String,
    file_name: String,
    image: Option<String>,
    references: Vec<LinkItem>,
    parent_image: Option<String>,
    referenced_by: Vec<LinkItem>,
}

/// A list entry; `anchor` is set when the target has its own section
#[derive(Debug, Serialize)]
struct LinkItem {
    anchor: Option<String>,
    file_name: String,
}

/// Single-page `references.html` with a section per project. Always
/// renders per-project diagrams.
pub struct HtmlDocument<R> {
    renderer: R,
    handlebars: Handlebars<'static>,
}

impl<R: DiagramRenderer> HtmlDocument<R> {
    pub fn new(renderer: R) -> Result<Self, OutputError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(TEMPLATE, include_str!("../../templates/references.html.hbs"))
            .map_err(|e| OutputError::Template {
                message: format!("Failed to register template '{TEMPLATE}': {e}"),
            })?;
        Ok(Self { renderer, handlebars })
    }

    /// Render `diagram` into `folder/file_name` unless the file is already
    /// there. Empty diagrams produce no image.
    fn fetch_image(
        &self,
        diagram: &YumlDiagram,
        folder: &Path,
        file_name: String,
        written: &mut Vec<PathBuf>,
    ) -> Result<Option<String>, OutputError> {
        if diagram.is_empty() {
            return Ok(None);
        }
        let path = folder.join(&file_name);
        if path.exists() {
            debug!(path = %path.display(), "Image already present, skipping");
        } else {
            write_output(&path, self.renderer.render_svg(diagram)?)?;
            written.push(path);
        }
        Ok(Some(file_name))
    }
}

impl<R: DiagramRenderer> OutputProvider for HtmlDocument<R> {
    fn create(&self, root: &RootGraph, output_folder: &Path) -> Result<OutputResponse, OutputError> {
        let translator = DiagramTranslator::new(root);
        let mut images = Vec::new();

        let root_file = root_file_name(root);
        let root_image = self.fetch_image(
            &translator.whole_graph(),
            output_folder,
            format!("{root_file}.svg"),
            &mut images,
        )?;

        let mut projects = Vec::new();
        for node in root.repository.sorted_by_file_name() {
            debug!(project = %node.path().display(), "Generating HTML section");
            let file_name = node.file_name();
            let image = self.fetch_image(
                &translator.dependencies(node.id()),
                output_folder,
                format!("{file_name}.svg"),
                &mut images,
            )?;
            let parent_image = self.fetch_image(
                &translator.parents(node.id()),
                output_folder,
                format!("{file_name}_parents.svg"),
                &mut images,
            )?;
            projects.push(ProjectSection {
                id: node.id().to_string(),
                file_name,
                image,
                references: link_items(node.children(), &root.repository),
                parent_image,
                referenced_by: link_items(node.parents(), &root.repository),
            });
        }

        let page = PageContext {
            root_file,
            root_image,
            projects,
        };
        let html = self
            .handlebars
            .render(TEMPLATE, &page)
            .map_err(|e| OutputError::Template {
                message: format!("Failed to render template '{TEMPLATE}': {e}"),
            })?;

        let path = output_folder.join("references.html");
        write_output(&path, html)?;

        let mut response = OutputResponse::single(path);
        response.files.extend(images);
        info!(files = response.files.len(), path = %response.path.display(), "HTML document written");
        Ok(response)
    }
}

fn link_items(links: &LinkSet, repository: &ProjectRepository) -> Vec<LinkItem> {
    let mut items: Vec<LinkItem> = links
        .iter()
        .map(|link| LinkItem {
            anchor: link
                .id()
                .filter(|id| repository.contains(id))
                .map(|id| id.to_string()),
            file_name: link.file_name(),
        })
        .collect();
    items.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    items
}

#[cfg(test)]
mod tests {
    include!("html.test.rs");
}
