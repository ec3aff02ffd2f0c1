//! Integration tests for tool execution and MCP dispatch.

use curricula::server::CurriculaServer;
use curricula::services::CourseCatalog;
use curricula::tools::*;
use curricula::Config;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Arc<Config> {
    Arc::new(Config::new(server.uri(), "test-token"))
}

fn test_catalog(server: &MockServer) -> CourseCatalog {
    CourseCatalog::new(test_config(server)).unwrap()
}

async fn mount_empty_fallback(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// Mounts the bounded-lookup response for one exact course code.
async fn mount_course(server: &MockServer, code: &str, course: serde_json::Value) {
    Mock::given(method("GET"))
        .and(query_param("q", code))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([course])))
        .mount(server)
        .await;
}

// ============================================================================
// search_courses
// ============================================================================

#[tokio::test]
async fn test_search_output_summarizes_and_truncates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "mech"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "code": "LE/MECH2100", "subjectCode": "LE/MECH",
             "title": "Intro", "creditHours": 3, "description": "d".repeat(300)}
        ])))
        .mount(&server)
        .await;
    mount_empty_fallback(&server).await;

    let catalog = test_catalog(&server);
    let input = SearchInput {
        subject_code: Some("LE/MECH".to_string()),
        ..Default::default()
    };
    let output = execute_search(&catalog, input).await.unwrap();

    assert_eq!(output.total_results, 1);
    let course = &output.courses[0];
    assert_eq!(course.code.as_deref(), Some("LE/MECH2100"));
    assert_eq!(course.credit_hours, Some(json!(3)));
    assert_eq!(course.description.len(), 153);
    assert!(course.description.ends_with("..."));
}

// ============================================================================
// get_course_details
// ============================================================================

#[tokio::test]
async fn test_details_returns_full_record() {
    let server = MockServer::start().await;
    mount_course(
        &server,
        "LE/MECH2100",
        json!({"id": 1, "code": "LE/MECH2100", "title": "Intro", "custom": {"nested": true}}),
    )
    .await;

    let catalog = test_catalog(&server);
    let input = DetailsInput {
        course_code: "LE/MECH2100".to_string(),
    };
    let course = execute_details(&catalog, input).await.unwrap();

    // the raw record passes through untouched, unknown fields included
    assert_eq!(course.get("custom"), Some(&json!({"nested": true})));
}

#[tokio::test]
async fn test_details_not_found_is_descriptive() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let catalog = test_catalog(&server);
    let input = DetailsInput {
        course_code: "LE/MECH9999".to_string(),
    };
    let err = execute_details(&catalog, input).await.unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.to_string(), "Course LE/MECH9999 not found");
}

// ============================================================================
// analyze_course_completeness / compare_courses
// ============================================================================

#[tokio::test]
async fn test_completeness_through_lookup() {
    let server = MockServer::start().await;
    mount_course(
        &server,
        "LE/MECH2100",
        json!({
            "code": "LE/MECH2100",
            "title": "Intro",
            "subjectCode": "LE/MECH",
            "courseNumber": "2100"
        }),
    )
    .await;

    let catalog = test_catalog(&server);
    let input = CompletenessInput {
        course_code: "LE/MECH2100".to_string(),
    };
    let report = execute_completeness(&catalog, input).await.unwrap();

    // 4 of 7 fields present
    assert_eq!(report.completed_fields, 4);
    assert_eq!(report.completeness_percentage, 57.1);
    assert_eq!(
        report.missing_fields,
        vec!["description", "creditHours", "prerequisites", "outcomes"]
    );
}

#[tokio::test]
async fn test_compare_resolves_both_and_truncates() {
    let server = MockServer::start().await;
    mount_course(
        &server,
        "LE/MECH2100",
        json!({"code": "LE/MECH2100", "title": "Statics",
               "description": "x".repeat(250), "outcomes": [{"text": "a"}]}),
    )
    .await;
    mount_course(
        &server,
        "LE/MECH2200",
        json!({"code": "LE/MECH2200", "title": "Dynamics", "description": "short"}),
    )
    .await;

    let catalog = test_catalog(&server);
    let input = CompareInput {
        course_code1: "LE/MECH2100".to_string(),
        course_code2: "LE/MECH2200".to_string(),
    };
    let report = execute_compare(&catalog, input).await.unwrap();

    assert_eq!(report.course1.outcomes_count, 1);
    assert_eq!(report.course1.description.len(), 203);
    assert!(report.course1.description.ends_with("..."));
    assert_eq!(report.course2.description, "short");
}

#[tokio::test]
async fn test_compare_short_circuits_on_first_missing_code() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let catalog = test_catalog(&server);
    let input = CompareInput {
        course_code1: "LE/MECH1111".to_string(),
        course_code2: "LE/MECH2222".to_string(),
    };
    let err = execute_compare(&catalog, input).await.unwrap_err();

    assert_eq!(err.to_string(), "Course LE/MECH1111 not found");
}

// ============================================================================
// get_statistics
// ============================================================================

#[tokio::test]
async fn test_statistics_over_unfiltered_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "mech"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "code": "LE/MECH2100", "subjectCode": "LE/MECH",
             "outcomes": [{"text": "a"}], "prerequisites": ["LE/MECH1000"]},
            {"id": 2, "code": "LE/MECH2200", "subjectCode": "LE/MECH"}
        ])))
        .mount(&server)
        .await;
    mount_empty_fallback(&server).await;

    let catalog = test_catalog(&server);
    let stats = execute_stats(&catalog, StatsInput::default()).await.unwrap();

    assert_eq!(stats.total_courses, 2);
    assert_eq!(stats.courses_with_outcomes, 1);
    assert_eq!(stats.courses_with_prerequisites, 1);
    assert_eq!(stats.subject_code_breakdown.get("LE/MECH"), Some(&2));
}

// ============================================================================
// MCP dispatch
// ============================================================================

#[tokio::test]
async fn test_dispatch_unknown_tool_is_text_payload() {
    let server = MockServer::start().await;
    let mcp = CurriculaServer::new(test_config(&server)).unwrap();

    let result = mcp.dispatch("frobnicate", None).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    let payload = serde_json::to_value(&result).unwrap().to_string();
    assert!(payload.contains("Unknown tool: frobnicate"));
}

#[tokio::test]
async fn test_dispatch_malformed_arguments_is_tool_error() {
    let server = MockServer::start().await;
    let mcp = CurriculaServer::new(test_config(&server)).unwrap();

    let args = json!({"hasPrerequisites": "yes"});
    let arguments = args.as_object().cloned();
    let result = mcp.dispatch("search_courses", arguments).await.unwrap();

    assert_eq!(result.is_error, Some(true));
    let payload = serde_json::to_value(&result).unwrap().to_string();
    assert!(payload.contains("Invalid arguments"));
}

#[tokio::test]
async fn test_dispatch_runs_tool_end_to_end() {
    let server = MockServer::start().await;
    mount_course(
        &server,
        "LE/EECS2021",
        json!({"code": "LE/EECS2021", "title": "Computer Organization"}),
    )
    .await;

    let mcp = CurriculaServer::new(test_config(&server)).unwrap();
    let args = json!({"courseCode": "LE/EECS2021"});
    let result = mcp
        .dispatch("get_course_details", args.as_object().cloned())
        .await
        .unwrap();

    assert_ne!(result.is_error, Some(true));
    let payload = serde_json::to_value(&result).unwrap().to_string();
    assert!(payload.contains("Computer Organization"));
}

#[tokio::test]
async fn test_dispatch_not_found_payload_never_raises() {
    let server = MockServer::start().await;
    mount_empty_fallback(&server).await;

    let mcp = CurriculaServer::new(test_config(&server)).unwrap();
    let args = json!({"courseCode": "LE/MECH9999"});
    let result = mcp
        .dispatch("get_course_details", args.as_object().cloned())
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let payload = serde_json::to_value(&result).unwrap().to_string();
    assert!(payload.contains("Course LE/MECH9999 not found"));
}
