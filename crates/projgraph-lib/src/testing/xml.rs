//! Descriptor and manifest text builders

use std::fmt::Write;
use uuid::Uuid;

const CSHARP_PROJECT_TYPE: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

/// Builder for an MSBuild descriptor in the 2003 namespace
#[derive(Debug, Clone, Default)]
pub struct ProjectXml {
    guid: Option<Uuid>,
    name: Option<String>,
    framework: Option<String>,
    configuration_type: Option<String>,
    references: Vec<(String, Option<Uuid>)>,
    libraries: Vec<String>,
    assemblies: Vec<String>,
}

impl ProjectXml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guid(mut self, id: Uuid) -> Self {
        self.guid = Some(id);
        self
    }

    /// Written as both `AssemblyName` and `ProjectName`
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn framework(mut self, framework: &str) -> Self {
        self.framework = Some(framework.to_string());
        self
    }

    pub fn configuration_type(mut self, value: &str) -> Self {
        self.configuration_type = Some(value.to_string());
        self
    }

    pub fn reference(mut self, include: &str, id: Option<Uuid>) -> Self {
        self.references.push((include.to_string(), id));
        self
    }

    pub fn library(mut self, raw: &str) -> Self {
        self.libraries.push(raw.to_string());
        self
    }

    pub fn assembly(mut self, include: &str) -> Self {
        self.assemblies.push(include.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Project ToolsVersion=\"15.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n  <PropertyGroup>\n",
        );
        if let Some(id) = self.guid {
            let _ = writeln!(out, "    <ProjectGuid>{{{}}}</ProjectGuid>", id.hyphenated());
        }
        if let Some(name) = &self.name {
            let _ = writeln!(out, "    <AssemblyName>{name}</AssemblyName>");
            let _ = writeln!(out, "    <ProjectName>{name}</ProjectName>");
        }
        if let Some(framework) = &self.framework {
            let _ = writeln!(out, "    <TargetFrameworkVersion>{framework}</TargetFrameworkVersion>");
        }
        if let Some(kind) = &self.configuration_type {
            let _ = writeln!(out, "    <ConfigurationType>{kind}</ConfigurationType>");
        }
        out.push_str("  </PropertyGroup>\n");

        if !self.libraries.is_empty() {
            let _ = writeln!(
                out,
                "  <ItemDefinitionGroup>\n    <Link>\n      <AdditionalDependencies>{};%(AdditionalDependencies)</AdditionalDependencies>\n    </Link>\n  </ItemDefinitionGroup>",
                self.libraries.join(";")
            );
        }

        if !self.assemblies.is_empty() {
            out.push_str("  <ItemGroup>\n");
            for include in &self.assemblies {
                let _ = writeln!(out, "    <Reference Include=\"{include}\" />");
            }
            out.push_str("  </ItemGroup>\n");
        }

        if !self.references.is_empty() {
            out.push_str("  <ItemGroup>\n");
            for (include, id) in &self.references {
                match id {
                    Some(id) => {
                        let _ = writeln!(
                            out,
                            "    <ProjectReference Include=\"{include}\">\n      <Project>{{{}}}</Project>\n    </ProjectReference>",
                            id.hyphenated()
                        );
                    }
                    None => {
                        let _ = writeln!(out, "    <ProjectReference Include=\"{include}\" />");
                    }
                }
            }
            out.push_str("  </ItemGroup>\n");
        }

        out.push_str("</Project>\n");
        out
    }
}

/// Manifest text listing `(name, relative path, identity)` entries
pub fn solution_text(entries: &[(&str, &str, Uuid)]) -> String {
    let mut out = String::from(
        "\nMicrosoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio Version 17\n",
    );
    for (name, path, id) in entries {
        let _ = writeln!(
            out,
            "Project(\"{{{CSHARP_PROJECT_TYPE}}}\") = \"{name}\", \"{path}\", \"{{{}}}\"\nEndProject",
            id.hyphenated().to_string().to_uppercase()
        );
    }
    out.push_str("Global\nEndGlobal\n");
    out
}
