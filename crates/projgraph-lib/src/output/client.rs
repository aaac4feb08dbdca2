use super::OutputError;
use super::yuml::YumlDiagram;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, trace};

/// Characters left bare in a form-encoded body
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Path the diagram text is posted to, relative to the service root
pub const CLASS_DIAGRAM_PATH: &str = "/diagram/nofunky/class";

pub const DEFAULT_YUML_URL: &str = "https://yuml.me";

/// Turns a diagram into SVG bytes
pub trait DiagramRenderer {
    fn render_svg(&self, diagram: &YumlDiagram) -> Result<Vec<u8>, OutputError>;
}

/// Renders through a yUML server: the posted diagram text answers with the
/// name of the generated image, which is then fetched.
#[derive(Debug, Clone)]
pub struct YumlClient {
    base_url: String,
    http: Client,
}

impl YumlClient {
    pub fn new(base_url: &str) -> Result<Self, OutputError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("projgraph/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit the diagram and return the URL of the generated image
    pub fn generate(&self, diagram: &YumlDiagram) -> Result<String, OutputError> {
        let url = format!("{}{}", self.base_url, CLASS_DIAGRAM_PATH);
        let body = form_body(diagram);
        trace!(url = %url, body = %body, "Posting diagram");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(OutputError::InvalidResponse {
                url,
                reason: format!("status {status}"),
            });
        }

        let image = response.text()?;
        let image = image.trim().trim_start_matches('/');
        if image.is_empty() {
            return Err(OutputError::InvalidResponse {
                url,
                reason: "empty image name".to_string(),
            });
        }

        let image_url = format!("{}/{}", self.base_url, image);
        debug!(image_url = %image_url, "Diagram generated on server");
        Ok(image_url)
    }

    pub fn download(&self, image_url: &str) -> Result<Vec<u8>, OutputError> {
        let response = self.http.get(image_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OutputError::InvalidResponse {
                url: image_url.to_string(),
                reason: format!("status {status}"),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

impl DiagramRenderer for YumlClient {
    fn render_svg(&self, diagram: &YumlDiagram) -> Result<Vec<u8>, OutputError> {
        let image_url = self.generate(diagram)?;
        self.download(&image_url)
    }
}

pub fn form_body(diagram: &YumlDiagram) -> String {
    format!("dsl_text={}", utf8_percent_encode(&diagram.to_dsl(), FORM))
}

/// Class-diagram URL embedding the diagram text
pub fn diagram_url(base_url: &str, diagram: &YumlDiagram) -> String {
    let statements: Vec<String> = diagram
        .declarations()
        .chain(diagram.relationships())
        .map(|statement| utf8_percent_encode(statement, FORM).to_string())
        .collect();
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        CLASS_DIAGRAM_PATH,
        statements.join(",")
    )
}

#[cfg(test)]
mod tests {
    include!("client.test.rs");
}
