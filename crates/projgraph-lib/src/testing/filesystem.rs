//! Temporary solution trees on disk

use super::xml::{ProjectXml, solution_text};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

/// Temporary directory fixture with automatic cleanup
pub struct TempDirFixture {
    pub temp_dir: TempDir,
}

impl TempDirFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the fixture
    pub fn file(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Write content, creating parent directories as needed
    pub fn write_file(
        &self,
        relative: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let full_path = self.file(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    pub fn write_project(
        &self,
        relative: &str,
        project: &ProjectXml,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_file(relative, &project.render())
    }

    /// Write a manifest listing `(name, relative path, identity)` entries
    pub fn write_solution(
        &self,
        relative: &str,
        entries: &[(&str, &str, Uuid)],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_file(relative, &solution_text(entries))
    }

    pub fn read_file(&self, relative: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(self.file(relative))?)
    }

    pub fn file_exists(&self, relative: &str) -> bool {
        self.file(relative).exists()
    }
}

#[cfg(test)]
mod tests {
    include!("filesystem.test.rs");
}
