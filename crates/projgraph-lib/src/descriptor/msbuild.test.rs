use super::*;
use std::path::PathBuf;
use uuid::Uuid;

const MANAGED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <ProjectGuid>{6A5D6B0E-0D4B-4C8B-9E61-3C2F4B1A7D10}</ProjectGuid>
    <AssemblyName>Contoso.App</AssemblyName>
    <TargetFrameworkVersion>v4.8</TargetFrameworkVersion>
  </PropertyGroup>
  <ItemGroup>
    <Reference Include="System.Core" />
    <Reference Include="Microsoft.CSharp" />
    <Reference Include="Newtonsoft.Json, Version=12.0.0.0, Culture=neutral, PublicKeyToken=30ad4fe6b2a6aeed">
      <HintPath>..\packages\Newtonsoft.Json.dll</HintPath>
    </Reference>
    <Reference Include="Dapper">
      <Version>2.0.4</Version>
    </Reference>
  </ItemGroup>
  <ItemGroup>
    <ProjectReference Include="..\Core\Core.csproj">
      <Project>{0F2C7A11-5B8E-4C3D-A1E2-7D9F6B4C8A21}</Project>
      <Name>Core</Name>
    </ProjectReference>
    <ProjectReference Include="..\Util\Util.csproj" />
  </ItemGroup>
</Project>
"#;

const NATIVE: &str = r#"<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup Label="Globals">
    <ProjectGuid>{9B1E4D3C-2A7F-4E6B-8C5D-1F0A3B2C4D5E}</ProjectGuid>
    <Keyword>ManagedCProj</Keyword>
    <RootNamespace>Engine</RootNamespace>
  </PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|Win32'" Label="Configuration">
    <ConfigurationType>DynamicLibrary</ConfigurationType>
    <UseOfMfc>Dynamic</UseOfMfc>
  </PropertyGroup>
  <PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|Win32'" Label="Configuration">
    <ConfigurationType>StaticLibrary</ConfigurationType>
  </PropertyGroup>
  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Debug|Win32'">
    <ClCompile>
      <LanguageStandard>stdcpp17</LanguageStandard>
    </ClCompile>
    <Link>
      <AdditionalDependencies>Foo.lib;kernel32.lib;%(AdditionalDependencies)</AdditionalDependencies>
      <DelayLoadDLLs>Bar.dll;%(DelayLoadDLLs)</DelayLoadDLLs>
    </Link>
  </ItemDefinitionGroup>
  <ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Release|Win32'">
    <Link>
      <AdditionalDependencies>Foo.lib;;kernel32.lib</AdditionalDependencies>
    </Link>
  </ItemDefinitionGroup>
</Project>
"#;

fn parse(name: &str, text: &str) -> Result<Descriptor, DescriptorError> {
    parse_descriptor(&PathBuf::from("/repo/src/App").join(name), text)
}

#[test]
fn test_managed_descriptor_identity_and_name() {
    let descriptor = parse("App.csproj", MANAGED).unwrap();
    assert_eq!(
        descriptor.identity,
        Some(Uuid::parse_str("6a5d6b0e-0d4b-4c8b-9e61-3c2f4b1a7d10").unwrap())
    );
    assert_eq!(descriptor.name.as_deref(), Some("Contoso.App"));
    assert_eq!(descriptor.metadata.framework.as_deref(), Some("v4.8"));
}

#[test]
fn test_project_references_resolve_against_descriptor_directory() {
    let descriptor = parse("App.csproj", MANAGED).unwrap();
    assert_eq!(
        descriptor.project_references,
        vec![
            DeclaredReference {
                path: PathBuf::from("/repo/src/Core/Core.csproj"),
                id: Some(Uuid::parse_str("0f2c7a11-5b8e-4c3d-a1e2-7d9f6b4c8a21").unwrap()),
            },
            DeclaredReference {
                path: PathBuf::from("/repo/src/Util/Util.csproj"),
                id: None,
            },
        ]
    );
}

#[test]
fn test_external_references_skip_framework_assemblies() {
    let descriptor = parse("App.csproj", MANAGED).unwrap();
    assert_eq!(
        descriptor.external_references,
        vec![
            ExternalReference {
                assembly_name: "Newtonsoft.Json".to_string(),
                version: Some("12.0.0.0".to_string()),
            },
            ExternalReference {
                assembly_name: "Dapper".to_string(),
                version: Some("2.0.4".to_string()),
            },
        ]
    );
}

#[test]
fn test_native_metadata() {
    let descriptor = parse("Engine.vcxproj", NATIVE).unwrap();
    let metadata = &descriptor.metadata;
    assert_eq!(descriptor.name.as_deref(), Some("Engine"));
    assert_eq!(metadata.configuration_type.as_deref(), Some("DynamicLibrary"));
    assert_eq!(metadata.language_standard.as_deref(), Some("stdcpp17"));
    assert!(metadata.uses_mfc);
    assert!(metadata.is_managed_interop);
}

#[test]
fn test_libraries_split_and_deduplicated() {
    let descriptor = parse("Engine.vcxproj", NATIVE).unwrap();
    assert_eq!(
        descriptor.libraries,
        vec!["Foo.lib", "kernel32.lib", "Bar.dll"]
    );
}

#[test]
fn test_sdk_style_without_namespace() {
    let text = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
  <ItemGroup>
    <ProjectReference Include="../Lib/Lib.csproj" />
  </ItemGroup>
</Project>"#;
    let descriptor = parse("App.csproj", text).unwrap();
    assert_eq!(descriptor.identity, None);
    assert_eq!(descriptor.name, None);
    assert_eq!(descriptor.metadata.framework.as_deref(), Some("net8.0"));
    assert_eq!(
        descriptor.project_references[0].path,
        PathBuf::from("/repo/src/Lib/Lib.csproj")
    );
}

#[test]
fn test_entities_in_text_are_decoded() {
    let text = r#"<Project><PropertyGroup><AssemblyName>A&amp;B&#x43;</AssemblyName></PropertyGroup></Project>"#;
    let descriptor = parse("A.csproj", text).unwrap();
    assert_eq!(descriptor.name.as_deref(), Some("A&BC"));

    let text = r#"<Project><PropertyGroup><AssemblyName>&lt;Lib&gt;&#68;</AssemblyName></PropertyGroup></Project>"#;
    let descriptor = parse("A.csproj", text).unwrap();
    assert_eq!(descriptor.name.as_deref(), Some("<Lib>D"));
}

#[test]
fn test_bad_entities_are_parse_errors() {
    for body in ["&nbsp;", "&#x+41;", "&#-65;"] {
        let text = format!(
            "<Project><PropertyGroup><AssemblyName>{body}</AssemblyName></PropertyGroup></Project>"
        );
        let err = parse("A.csproj", &text).unwrap_err();
        assert!(matches!(err, DescriptorError::Parse { .. }), "{body}: {err:?}");
    }
}

#[test]
fn test_invalid_identity_is_rejected() {
    let text = r#"<Project><PropertyGroup><ProjectGuid>{zzz}</ProjectGuid></PropertyGroup></Project>"#;
    let err = parse("A.csproj", text).unwrap_err();
    assert!(matches!(err, DescriptorError::InvalidIdentity { .. }));
}

#[test]
fn test_wrong_root_element_is_parse_error() {
    let err = parse("A.csproj", "<Solution></Solution>").unwrap_err();
    assert!(matches!(err, DescriptorError::Parse { .. }));
}

#[test]
fn test_empty_document_is_parse_error() {
    let err = parse("A.csproj", "").unwrap_err();
    assert!(matches!(err, DescriptorError::Parse { .. }));
}

#[test]
fn test_mismatched_tags_are_parse_error() {
    let err = parse("A.csproj", "<Project><PropertyGroup></Project>").unwrap_err();
    assert!(matches!(err, DescriptorError::Parse { .. }));
}
