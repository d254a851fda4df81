//! Tests for the error handling system.

use attack_path_core::errors::error_code;
use attack_path_core::errors::*;

#[test]
fn test_graph_errors_have_distinct_codes() {
    let duplicate = GraphError::DuplicateNode { id: "A".into() };
    let unknown = GraphError::unknown("B");
    let self_loop = GraphError::SelfLoop { id: "C".into() };

    assert_eq!(duplicate.error_code(), error_code::DUPLICATE_NODE);
    assert_eq!(unknown.error_code(), error_code::UNKNOWN_NODE);
    assert_eq!(self_loop.error_code(), error_code::SELF_LOOP);
    assert_eq!(
        GraphError::NoCriticalAsset.error_code(),
        error_code::NO_CRITICAL_ASSET
    );
    assert_eq!(
        GraphError::AmbiguousCriticalAsset { ids: vec!["X".into(), "Y".into()] }.error_code(),
        error_code::AMBIGUOUS_CRITICAL_ASSET
    );
}

#[test]
fn test_coded_string_format() {
    let err = GraphError::unknown("Database_SQL");
    assert_eq!(err.coded_string(), "[UNKNOWN_NODE] Unknown node: Database_SQL");
}

#[test]
fn test_from_conversions_into_pipeline_error() {
    let pipeline: PipelineError = GraphError::SelfLoop { id: "A".into() }.into();
    assert!(matches!(pipeline, PipelineError::Graph(GraphError::SelfLoop { .. })));

    let pipeline: PipelineError = ConfigError::FileNotFound { path: "/tmp".into() }.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));

    let pipeline: PipelineError = RenderError::UnsupportedFormat("png".into()).into();
    assert!(matches!(pipeline, PipelineError::Render(_)));

    let scenario: ScenarioError = GraphError::unknown("Z").into();
    let pipeline: PipelineError = scenario.into();
    assert!(matches!(pipeline, PipelineError::Scenario(ScenarioError::Graph(_))));
}

#[test]
fn test_pipeline_error_keeps_inner_code() {
    let pipeline: PipelineError = GraphError::DuplicateNode { id: "A".into() }.into();
    assert_eq!(pipeline.error_code(), error_code::DUPLICATE_NODE);

    let scenario: ScenarioError = GraphError::SelfLoop { id: "A".into() }.into();
    assert_eq!(scenario.error_code(), error_code::SELF_LOOP);

    let parse = ScenarioError::ParseError { path: "net.toml".into(), message: "bad".into() };
    let pipeline: PipelineError = parse.into();
    assert_eq!(pipeline.error_code(), error_code::SCENARIO_ERROR);
}

#[test]
fn test_error_messages_name_the_node() {
    let err = GraphError::SelfLoop { id: "WebServer".into() };
    assert!(err.to_string().contains("WebServer"));

    let err = GraphError::DuplicateNode { id: "Internet".into() };
    assert!(err.to_string().contains("Internet"));
}
