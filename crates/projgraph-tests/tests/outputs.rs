//! Rendering finished graphs through the command handler

use anyhow::Result;
use mockito::{Matcher, Server};
use projgraph_lib::primitives::OutputType;
use projgraph_tests::{Layout, TestEnvironment};

#[test]
fn reference_list_per_project() -> Result<()> {
    let (mut env, root) = TestEnvironment::with_layout(Layout::Diamond)?;
    let mut args = env.args(&root, OutputType::YumlReferenceList);
    args.output_each_item = true;

    let response = env.run(&args)?;

    assert_eq!(response.files.len(), 5);
    let whole = env.output("Diamond.sln.yuml")?;
    assert!(whole.contains("[App|.Net Version: v4.8;]"));
    assert!(whole.contains("[Left]->[Base]"));
    assert!(whole.contains("[Right]->[Base]"));

    let left = env.output("Left.csproj.yuml")?;
    assert!(left.contains("[Left]->[Base]"));
    assert!(!left.contains("[App]"));
    assert!(env.printed.contains("4 projects from Diamond.sln"));
    Ok(())
}

#[test]
fn url_output_contains_every_relationship() -> Result<()> {
    let (mut env, root) = TestEnvironment::with_layout(Layout::Cycle)?;
    env.run(&env.args(&root, OutputType::YumlUrl))?;

    let url = env.output("One.vcxproj.url.yuml")?;
    for edge in ["%5BOne%5D-%3E%5BTwo%5D", "%5BTwo%5D-%3E%5BThree%5D", "%5BThree%5D-%3E%5BOne%5D"] {
        assert!(url.contains(edge), "{edge} not in {url}");
    }
    Ok(())
}

#[test]
fn image_output_against_yuml_server() -> Result<()> {
    let (mut env, root) = TestEnvironment::with_layout(Layout::NativeLibraries)?;
    let mut server = Server::new();
    let post = server
        .mock("POST", "/diagram/nofunky/class")
        .match_body(Matcher::Regex("^dsl_text=".to_string()))
        .with_body("native.svg")
        .expect(1)
        .create();
    let get = server
        .mock("GET", "/native.svg")
        .with_body("<svg>native</svg>")
        .expect(1)
        .create();

    let mut args = env.args(&root, OutputType::YumlImage);
    args.yuml_url = server.url();
    env.run(&args)?;

    assert_eq!(env.output("Native.sln.svg")?, "<svg>native</svg>");
    post.assert();
    get.assert();
    Ok(())
}

#[test]
fn html_document_renders_every_project() -> Result<()> {
    let (mut env, root) = TestEnvironment::with_layout(Layout::Diamond)?;
    let mut server = Server::new();
    let _post = server
        .mock("POST", "/diagram/nofunky/class")
        .with_body("diagram.svg")
        .create();
    let _get = server
        .mock("GET", "/diagram.svg")
        .with_body("<svg/>")
        .create();

    let mut args = env.args(&root, OutputType::HtmlDocument);
    args.yuml_url = server.url();
    let response = env.run(&args)?;

    assert_eq!(response.path, env.output_folder.join("references.html"));
    let html = env.output("references.html")?;
    for project in ["App.csproj", "Left.csproj", "Right.csproj", "Base.csproj"] {
        assert!(html.contains(&format!("<summary>{project}</summary>")), "{project}");
    }
    assert!(env.output_exists("Diamond.sln.svg"));
    assert!(env.output_exists("App.csproj.svg"));
    assert!(env.output_exists("Base.csproj_parents.svg"));
    assert!(!env.output_exists("Base.csproj.svg"));
    Ok(())
}

#[test]
fn yuml_failure_surfaces_as_error() -> Result<()> {
    let (mut env, root) = TestEnvironment::with_layout(Layout::Diamond)?;
    let mut server = Server::new();
    let _post = server
        .mock("POST", "/diagram/nofunky/class")
        .with_status(503)
        .create();

    let mut args = env.args(&root, OutputType::YumlImage);
    args.yuml_url = server.url();
    let err = env.run(&args).unwrap_err();

    assert!(format!("{err:#}").contains("503"));
    Ok(())
}
