//! Unit tests for CLI argument parsing and the offline route commands.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use loregraph::CliError;
use loregraph::cli::{Cli, Commands, cmd_route, cmd_routes};

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "loregraph",
        "--url",
        "http://kg.local/api",
        "--timeout-ms",
        "2500",
        "--compact",
        "works",
    ])
    .unwrap();

    assert_eq!(cli.url.as_deref(), Some("http://kg.local/api"));
    assert_eq!(cli.timeout_ms, Some(2500));
    assert!(cli.compact);
    assert_eq!(cli.command, Some(Commands::Works));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["loregraph", "node", "12", "-C", "kg.toml"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Node { id: 12 }));
    assert_eq!(cli.config.unwrap().to_string_lossy(), "kg.toml");
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["loregraph"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_graph_work_is_optional() {
    let cli = Cli::try_parse_from(["loregraph", "graph"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Graph { work: None }));

    let cli = Cli::try_parse_from(["loregraph", "graph", "红楼梦"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Graph {
            work: Some("红楼梦".to_string())
        })
    );
}

#[test]
fn test_analyze_requires_content_or_file() {
    assert!(Cli::try_parse_from(["loregraph", "analyze", "-t", "T"]).is_err());

    let cli = Cli::try_parse_from(["loregraph", "analyze", "-t", "T", "-c", "C"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Analyze {
            title: "T".to_string(),
            content: Some("C".to_string()),
            file: None,
        })
    );
}

#[test]
fn test_analyze_content_and_file_conflict() {
    let result = Cli::try_parse_from([
        "loregraph",
        "analyze",
        "-t",
        "T",
        "-c",
        "C",
        "-f",
        "chapter.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_characters_filters() {
    let cli =
        Cli::try_parse_from(["loregraph", "characters", "--work", "3", "--name", "宋江"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Characters {
            work: Some(3),
            name: Some("宋江".to_string()),
        })
    );
}

#[test]
fn test_upload_requires_file() {
    assert!(Cli::try_parse_from(["loregraph", "upload"]).is_err());

    let cli = Cli::try_parse_from(["loregraph", "upload", "-f", "第二回.docx"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Upload {
            file: "第二回.docx".into()
        })
    );
}

#[test]
fn test_work_graph_takes_numeric_id() {
    let cli = Cli::try_parse_from(["loregraph", "work-graph", "4"]).unwrap();
    assert_eq!(cli.command, Some(Commands::WorkGraph { id: 4 }));
    assert!(Cli::try_parse_from(["loregraph", "work-graph", "红楼梦"]).is_err());
}

#[test]
fn test_non_numeric_id_is_rejected() {
    assert!(Cli::try_parse_from(["loregraph", "article", "seven"]).is_err());
}

// =============================================================================
// ROUTE COMMAND TESTS
// =============================================================================

#[test]
fn test_route_command_resolves_view() {
    let output = cmd_route("/knowledge-graph").unwrap();
    assert_eq!(output["view"], "KnowledgeGraph");
    assert_eq!(output["layout"], serde_json::Value::Null);
    assert_eq!(output["lazy"], true);
}

#[test]
fn test_route_command_rejects_unknown_path() {
    let err = cmd_route("/nowhere").unwrap_err();
    assert!(matches!(err, CliError::UnknownRoute(ref p) if p == "/nowhere"));
}

#[test]
fn test_routes_command_lists_table_in_order() {
    let output = cmd_routes().unwrap();
    let names: Vec<&str> = output
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Home",
            "ArticleAnalysis",
            "WorkAnalysis",
            "CharacterDetails",
            "Events",
            "Factions",
            "KnowledgeGraph",
        ]
    );
}
