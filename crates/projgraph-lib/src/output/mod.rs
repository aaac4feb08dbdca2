//! Renderers for a finished project graph
//!
//! Every renderer works from the same yUML class diagrams: the whole-graph
//! diagram plus per-project dependency and parent diagrams. Files land in
//! the output folder, which is created on demand.

pub mod client;
pub mod html;
pub mod image;
pub mod reference_list;
pub mod translator;
pub mod url;
pub mod yuml;

pub use client::{DEFAULT_YUML_URL, DiagramRenderer, YumlClient};
pub use html::HtmlDocument;
pub use image::YumlImage;
pub use reference_list::YumlReferenceList;
pub use translator::DiagramTranslator;
pub use url::YumlUrl;
pub use yuml::{Association, YumlClass, YumlDiagram};

use crate::graph::RootGraph;
use crate::primitives::OutputType;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template rendering error: {message}")]
    Template { message: String },

    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

/// Knobs shared by every provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Also emit one artifact per project
    pub output_each_item: bool,
    /// Root of the yUML service
    pub yuml_url: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_each_item: false,
            yuml_url: DEFAULT_YUML_URL.to_string(),
        }
    }
}

/// What a provider produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputResponse {
    /// The main artifact
    pub path: PathBuf,
    /// Every file written, main artifact first
    pub files: Vec<PathBuf>,
}

impl OutputResponse {
    pub fn single(path: PathBuf) -> Self {
        Self {
            files: vec![path.clone()],
            path,
        }
    }
}

pub trait OutputProvider {
    fn create(&self, root: &RootGraph, output_folder: &Path) -> Result<OutputResponse, OutputError>;
}

pub fn create_provider(
    output_type: OutputType,
    settings: OutputSettings,
) -> Result<Box<dyn OutputProvider>, OutputError> {
    info!(?output_type, "Creating output provider");
    let provider: Box<dyn OutputProvider> = match output_type {
        OutputType::YumlReferenceList => Box::new(YumlReferenceList::new(settings.output_each_item)),
        OutputType::YumlUrl => Box::new(YumlUrl::new(settings.yuml_url)),
        OutputType::YumlImage => Box::new(YumlImage::new(YumlClient::new(&settings.yuml_url)?)),
        OutputType::HtmlDocument => Box::new(HtmlDocument::new(YumlClient::new(&settings.yuml_url)?)?),
    };
    Ok(provider)
}

/// File name of the root descriptor, used as the stem of root artifacts
pub(crate) fn root_file_name(root: &RootGraph) -> String {
    root.root_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.name.clone())
}

pub(crate) fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
