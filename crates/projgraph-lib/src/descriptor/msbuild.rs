//! MSBuild project file parsing (`.csproj`, `.vcxproj`, other `*proj`)
//!
//! Elements are matched by local name so that both the 2003 MSBuild
//! namespace and namespace-less SDK-style files are understood.

use super::{
    DeclaredReference, Descriptor, DescriptorError, ExternalReference, paths, parse_identity,
};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;
use tracing::trace;

const ROOT: &str = "Project";

/// Pending `<ProjectReference>` while its children are read
#[derive(Debug, Default)]
struct PendingProjectReference {
    include: Option<String>,
    project: Option<String>,
}

/// Pending `<Reference>` while its children are read
#[derive(Debug, Default)]
struct PendingReference {
    include: Option<String>,
    version: Option<String>,
}

struct DescriptorBuilder<'a> {
    path: &'a Path,
    base_dir: &'a Path,
    descriptor: Descriptor,
    raw_identity: Option<String>,
    project_name: Option<String>,
    root_namespace: Option<String>,
    assembly_name: Option<String>,
    project_reference: Option<PendingProjectReference>,
    reference: Option<PendingReference>,
}

/// Parse a descriptor from its text. `path` locates relative references and
/// labels errors.
pub fn parse_descriptor(path: &Path, text: &str) -> Result<Descriptor, DescriptorError> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut builder = DescriptorBuilder::new(path, base_dir);

    let mut reader = Reader::from_str(text);
    let mut stack: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| parse_error(path, e))?;

        match event {
            Event::Start(start) => {
                let name = local_name(path, &start)?;
                check_root(path, &stack, &name, &mut seen_root)?;
                stack.push(name);
                builder.open(&stack, &start)?;
                buffer.clear();
            }
            Event::Empty(start) => {
                let name = local_name(path, &start)?;
                check_root(path, &stack, &name, &mut seen_root)?;
                stack.push(name);
                builder.open(&stack, &start)?;
                builder.close(&stack, "")?;
                stack.pop();
                buffer.clear();
            }
            Event::Text(content) => {
                let raw = std::str::from_utf8(&content).map_err(|e| parse_error(path, e))?;
                buffer.push_str(raw);
            }
            Event::CData(content) => {
                let raw = std::str::from_utf8(&content).map_err(|e| parse_error(path, e))?;
                buffer.push_str(raw);
            }
            Event::GeneralRef(entity) => {
                match entity.resolve_char_ref().map_err(|e| parse_error(path, e))? {
                    Some(ch) => buffer.push(ch),
                    None => {
                        let name = entity.decode().map_err(|e| parse_error(path, e))?;
                        let value = resolve_predefined_entity(&name).ok_or_else(|| {
                            DescriptorError::Parse {
                                path: path.to_path_buf(),
                                reason: format!("unknown entity &{name};"),
                            }
                        })?;
                        buffer.push_str(value);
                    }
                }
            }
            Event::End(_) => {
                builder.close(&stack, buffer.trim())?;
                stack.pop();
                buffer.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(DescriptorError::Parse {
            path: path.to_path_buf(),
            reason: format!("no <{ROOT}> element"),
        });
    }
    if !stack.is_empty() {
        return Err(DescriptorError::Parse {
            path: path.to_path_buf(),
            reason: format!("unexpected end of document inside <{}>", stack.join("/")),
        });
    }

    builder.finish()
}

impl<'a> DescriptorBuilder<'a> {
    fn new(path: &'a Path, base_dir: &'a Path) -> Self {
        Self {
            path,
            base_dir,
            descriptor: Descriptor::default(),
            raw_identity: None,
            project_name: None,
            root_namespace: None,
            assembly_name: None,
            project_reference: None,
            reference: None,
        }
    }

    fn open(&mut self, stack: &[String], start: &BytesStart<'_>) -> Result<(), DescriptorError> {
        match element_path(stack).as_slice() {
            [ROOT, "ItemGroup", "ProjectReference"] => {
                self.project_reference = Some(PendingProjectReference {
                    include: attribute(self.path, start, "Include")?,
                    project: None,
                });
            }
            [ROOT, "ItemGroup", "Reference"] => {
                self.reference = Some(PendingReference {
                    include: attribute(self.path, start, "Include")?,
                    version: attribute(self.path, start, "Version")?,
                });
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, stack: &[String], text: &str) -> Result<(), DescriptorError> {
        match element_path(stack).as_slice() {
            [ROOT, "PropertyGroup", property] => self.property(property, text),
            [ROOT, "ItemDefinitionGroup", "ClCompile", "LanguageStandard"] => {
                set_once(&mut self.descriptor.metadata.language_standard, text);
            }
            [ROOT, "ItemDefinitionGroup", "Link", "AdditionalDependencies" | "DelayLoadDLLs"] => {
                self.libraries(text);
            }
            [ROOT, "ItemGroup", "ProjectReference", "Project"] => {
                if let Some(pending) = self.project_reference.as_mut() {
                    set_once(&mut pending.project, text);
                }
            }
            [ROOT, "ItemGroup", "ProjectReference"] => {
                if let Some(pending) = self.project_reference.take() {
                    self.project_reference(pending)?;
                }
            }
            [ROOT, "ItemGroup", "Reference", "Version"] => {
                if let Some(pending) = self.reference.as_mut() {
                    set_once(&mut pending.version, text);
                }
            }
            [ROOT, "ItemGroup", "Reference"] => {
                if let Some(pending) = self.reference.take() {
                    self.external_reference(pending);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn property(&mut self, property: &str, text: &str) {
        let metadata = &mut self.descriptor.metadata;
        match property {
            "ProjectGuid" => set_once(&mut self.raw_identity, text),
            "AssemblyName" => set_once(&mut self.assembly_name, text),
            "ProjectName" => set_once(&mut self.project_name, text),
            "RootNamespace" => set_once(&mut self.root_namespace, text),
            "TargetFrameworkVersion" | "TargetFramework" => {
                set_once(&mut metadata.framework, text)
            }
            "ConfigurationType" => set_once(&mut metadata.configuration_type, text),
            "Keyword" if text.eq_ignore_ascii_case("ManagedCProj") => {
                metadata.is_managed_interop = true;
            }
            "CLRSupport" if !text.is_empty() && !text.eq_ignore_ascii_case("false") => {
                metadata.is_managed_interop = true;
            }
            "UseOfMfc"
                if text.eq_ignore_ascii_case("Dynamic") || text.eq_ignore_ascii_case("Static") =>
            {
                metadata.uses_mfc = true;
            }
            _ => {}
        }
    }

    fn libraries(&mut self, text: &str) {
        for raw in text.split(';').map(str::trim) {
            if raw.is_empty() || (raw.starts_with("%(") && raw.ends_with(')')) {
                continue;
            }
            if !self.descriptor.libraries.iter().any(|known| known == raw) {
                self.descriptor.libraries.push(raw.to_string());
            }
        }
    }

    fn project_reference(&mut self, pending: PendingProjectReference) -> Result<(), DescriptorError> {
        let Some(include) = pending.include.filter(|s| !s.trim().is_empty()) else {
            trace!(path = %self.path.display(), "Skipping ProjectReference without Include");
            return Ok(());
        };

        let id = pending
            .project
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_identity(self.path, raw))
            .transpose()?;

        let target = paths::resolve(self.base_dir, &include);
        if !self
            .descriptor
            .project_references
            .iter()
            .any(|known| known.path == target)
        {
            self.descriptor
                .project_references
                .push(DeclaredReference { path: target, id });
        }
        Ok(())
    }

    fn external_reference(&mut self, pending: PendingReference) {
        let Some(include) = pending.include else {
            return;
        };

        // Strong names: "Name, Version=1.2.3.4, Culture=neutral, ..."
        let mut parts = include.split(',').map(str::trim);
        let assembly_name = parts.next().unwrap_or_default().to_string();
        let strong_name_version = parts
            .find_map(|part| part.strip_prefix("Version="))
            .map(str::to_string);

        if assembly_name.is_empty()
            || assembly_name.starts_with("System")
            || assembly_name.starts_with("Microsoft.")
        {
            return;
        }

        let reference = ExternalReference {
            assembly_name,
            version: pending.version.or(strong_name_version),
        };
        if !self.descriptor.external_references.contains(&reference) {
            self.descriptor.external_references.push(reference);
        }
    }

    fn finish(mut self) -> Result<Descriptor, DescriptorError> {
        self.descriptor.identity = self
            .raw_identity
            .as_deref()
            .map(|raw| parse_identity(self.path, raw))
            .transpose()?;

        // Managed projects name themselves by assembly, native ones by
        // project name, then root namespace.
        self.descriptor.name = self
            .assembly_name
            .or(self.project_name)
            .or(self.root_namespace);

        Ok(self.descriptor)
    }
}

fn element_path(stack: &[String]) -> Vec<&str> {
    stack.iter().map(String::as_str).collect()
}

fn set_once(slot: &mut Option<String>, text: &str) {
    if slot.is_none() && !text.is_empty() {
        *slot = Some(text.to_string());
    }
}

fn check_root(
    path: &Path,
    stack: &[String],
    name: &str,
    seen_root: &mut bool,
) -> Result<(), DescriptorError> {
    if stack.is_empty() {
        if *seen_root || name != ROOT {
            return Err(DescriptorError::Parse {
                path: path.to_path_buf(),
                reason: format!("unexpected root element <{name}>, expected <{ROOT}>"),
            });
        }
        *seen_root = true;
    }
    Ok(())
}

fn local_name(path: &Path, start: &BytesStart<'_>) -> Result<String, DescriptorError> {
    let name = start.local_name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(|e| parse_error(path, e))
}

fn attribute(
    path: &Path,
    start: &BytesStart<'_>,
    wanted: &str,
) -> Result<Option<String>, DescriptorError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| parse_error(path, e))?;
        if attr.key.local_name().as_ref() != wanted.as_bytes() {
            continue;
        }
        let raw = std::str::from_utf8(&attr.value).map_err(|e| parse_error(path, e))?;
        let value = quick_xml::escape::unescape(raw).map_err(|e| parse_error(path, e))?;
        return Ok(Some(value.into_owned()));
    }
    Ok(None)
}

fn parse_error(path: &Path, error: impl std::fmt::Display) -> DescriptorError {
    DescriptorError::Parse {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    include!("msbuild.test.rs");
}
