//! Solution manifest (`.sln`) parsing
//!
//! Only the project table is read:
//!
//! ```text
//! Microsoft Visual Studio Solution File, Format Version 12.00
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "src\App\App.csproj", "{6A5D...}"
//! EndProject
//! ```

use super::{DescriptorError, paths, parse_identity, read_text};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use uuid::Uuid;

const HEADER: &str = "Microsoft Visual Studio Solution File";

/// One project listed by a solution manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    /// Absolute, normalised descriptor path
    pub path: PathBuf,
    pub id: Uuid,
}

/// Read and parse a manifest from disk
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>, DescriptorError> {
    let text = read_text(path)?;
    parse_manifest(path, &text)
}

pub fn parse_manifest(path: &Path, text: &str) -> Result<Vec<ManifestEntry>, DescriptorError> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let header = lines.by_ref().find(|(_, line)| !line.is_empty());
    match header {
        Some((_, line)) if line.starts_with(HEADER) => {}
        Some((number, _)) => return Err(manifest_error(path, number, "missing solution file header")),
        None => return Err(manifest_error(path, 1, "empty solution file")),
    }

    let mut entries = Vec::new();
    for (number, line) in lines {
        let Some(rest) = line.strip_prefix("Project(") else {
            continue;
        };

        let (name, raw_path, raw_id) = project_line(rest)
            .ok_or_else(|| manifest_error(path, number, "malformed Project line"))?;

        if !raw_path.to_ascii_lowercase().ends_with("proj") {
            trace!(line = number, entry = raw_path, "Skipping non-project manifest entry");
            continue;
        }

        let id = parse_identity(path, raw_id).map_err(|_| {
            manifest_error(path, number, &format!("invalid project GUID '{raw_id}'"))
        })?;

        entries.push(ManifestEntry {
            name: name.to_string(),
            path: paths::resolve(base_dir, raw_path),
            id,
        });
    }

    debug!(
        manifest = %path.display(),
        projects = entries.len(),
        "Parsed solution manifest"
    );
    Ok(entries)
}

/// `"{type}") = "Name", "path", "{guid}"` -> (name, path, guid)
fn project_line(rest: &str) -> Option<(&str, &str, &str)> {
    let (_type_id, rest) = quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(')')?;
    let rest = rest.trim_start().strip_prefix('=')?;

    let (name, rest) = quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (raw_path, rest) = quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (raw_id, rest) = quoted(rest)?;

    rest.trim().is_empty().then_some((name, raw_path, raw_id))
}

/// Leading `"..."` token and whatever follows it
fn quoted(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start().strip_prefix('"')?;
    let end = input.find('"')?;
    Some((&input[..end], &input[end + 1..]))
}

fn manifest_error(path: &Path, line: usize, reason: &str) -> DescriptorError {
    DescriptorError::Manifest {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    include!("solution.test.rs");
}
