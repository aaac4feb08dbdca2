use super::*;
use crate::primitives::ColorIntent;
use clap::CommandFactory;

fn analyze(args: &[&str]) -> AnalyzeArgs {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Some(Commands::Analyze(args)) => args,
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_analyze_defaults() {
    let args = analyze(&["projgraph", "analyze", "All.sln"]);
    assert_eq!(args.root_file, PathBuf::from("All.sln"));
    assert!(args.merge_with.is_empty());
    assert!(!args.include_external);
    assert_eq!(args.level_to_dig, None);
    assert_eq!(args.output_type, OutputType::YumlReferenceList);
    assert_eq!(args.output_folder, PathBuf::from(DEFAULT_OUTPUT_FOLDER));
    assert_eq!(args.yuml_url, "https://yuml.me");
}

#[test]
fn test_analyze_full_arguments() {
    let args = analyze(&[
        "projgraph",
        "--color",
        "never",
        "analyze",
        "App.vcxproj",
        "--merge-with",
        "Other.sln",
        "--merge-with",
        "Third.vcxproj",
        "--include-external",
        "--level-to-dig",
        "3",
        "--output-type",
        "yuml-url",
        "--output-folder",
        "out",
    ]);

    assert_eq!(args.merge_with.len(), 2);
    let request = args.to_request();
    assert!(request.include_external_references);
    assert_eq!(request.search_depth, Some(3));
    assert_eq!(args.output_type, OutputType::YumlUrl);
    assert!(!args.output_settings().output_each_item);
}

#[test]
fn test_html_forces_each_item() {
    let args = analyze(&["projgraph", "analyze", "a.sln", "--output-type", "html-document"]);
    assert!(args.output_settings().output_each_item);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["projgraph", "version", "--color", "always"]).unwrap();
    assert_eq!(cli.config.color, ColorIntent::Always);
    assert_eq!(cli.command, Some(Commands::Version));
}

#[test]
fn test_analyze_requires_root_file() {
    assert!(Cli::try_parse_from(["projgraph", "analyze"]).is_err());
}
