use fairway_finder::clear_all_caches;
use fairway_finder::config::{ApiShape, Config};
use fairway_finder::data_fetcher::api::{
    course_detail, create_http_client_with_timeout, fetch_course_detail, search_courses,
};
use fairway_finder::data_fetcher::models::CourseId;
use fairway_finder::data_fetcher::projector::{project_holes, project_summaries, project_tees};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(domain: &str, shape: ApiShape) -> Config {
    Config {
        api_domain: domain.to_string(),
        api_key: "integration-test-key".to_string(),
        api_shape: shape,
        log_file_path: None,
        http_timeout_seconds: 5,
    }
}

fn test_client() -> reqwest::Client {
    create_http_client_with_timeout(5).expect("Failed to build test HTTP client")
}

/// Full user flow against the v1 shape: search, pick a course whose search
/// entry already embeds detail, and project its tables without a second call.
#[tokio::test]
#[serial]
async fn test_search_select_detail_flow_with_embedded_detail() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("search_query", "Oxmoor"))
        .and(header("authorization", "Key integration-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"courses": [
            {"id": 1, "club_name": "Prairie Green", "course_name": "Links"},
            {
                "id": 2,
                "club_name": "Oxmoor",
                "course_name": "Ridge",
                "city": "Louisville",
                "tees": {"male": [{"name": "Blue", "yardage": 6500}], "female": []},
                "holes": [{"number": 1, "par": 4}, {"number": 2, "par": 3}]
            }
        ]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::V1);

    let payload = search_courses(&client, &config, "Oxmoor").await.unwrap();
    let summaries = project_summaries(&payload);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].label, "Oxmoor — Ridge");

    // The selected entry embeds detail, so no detail endpoint is mounted and
    // none is needed.
    let selected = &summaries[1];
    let detail = course_detail(&client, &config, &selected.id, Some(&payload))
        .await
        .unwrap();

    let tees = project_tees(&detail);
    assert_eq!(tees.rows.len(), 1);
    assert_eq!(tees.rows[0].group.as_deref(), Some("male"));

    let holes = project_holes(&detail);
    assert_eq!(holes.len(), 2);
    assert_eq!(holes[0].fields.get("number"), Some(&json!(1)));

    clear_all_caches().await;
}

/// Full user flow against the courses shape: the search result carries only
/// summaries, so the detail fetch goes to the network exactly once and the
/// repeat is served from the memoized copy.
#[tokio::test]
#[serial]
async fn test_search_select_detail_flow_over_network() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("search", "Pebble"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Pebble Beach"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/courses/7"))
        .and(header("authorization", "Key integration-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Pebble Beach",
            "teeBoxes": [{"name": "Championship", "yardage": 6800}],
            "holes": [{"number": 1, "par": 4}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::Courses);

    let payload = search_courses(&client, &config, "Pebble").await.unwrap();
    let summaries = project_summaries(&payload);
    assert_eq!(summaries.len(), 1);

    let id = summaries[0].id.clone();
    let first = course_detail(&client, &config, &id, Some(&payload))
        .await
        .unwrap();
    let second = course_detail(&client, &config, &id, Some(&payload))
        .await
        .unwrap();

    // expect(1) on the detail mock verifies the repeat came from the cache
    assert_eq!(first, second);

    let tees = project_tees(&first);
    assert!(tees.rows.iter().all(|row| row.group.is_none()));

    clear_all_caches().await;
}

/// Two identical searches inside the memoization window issue one call.
#[tokio::test]
#[serial]
async fn test_repeated_search_issues_one_network_call() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::Courses);

    let first = search_courses(&client, &config, "Prairie Green").await.unwrap();
    let second = search_courses(&client, &config, "Prairie Green").await.unwrap();
    assert_eq!(first, second);

    clear_all_caches().await;
}

/// A 404 on the primary v1 detail endpoint falls back to the secondary URL
/// shape and surfaces the secondary's body with no error.
#[tokio::test]
#[serial]
async fn test_detail_endpoint_fallback_yields_secondary_body() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/v1/course"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/courses/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "Fallback Course",
            "holes": [{"number": 1, "par": 5}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::V1);

    let detail = fetch_course_detail(&client, &config, &CourseId::Number(42))
        .await
        .unwrap();
    assert_eq!(detail.get("name"), Some(&json!("Fallback Course")));

    clear_all_caches().await;
}

/// "No results" is an empty success, distinguishable from a failed request.
#[tokio::test]
#[serial]
async fn test_empty_success_is_not_a_failure() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("search", "Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::Courses);

    let payload = search_courses(&client, &config, "Nowhere").await.unwrap();
    assert!(project_summaries(&payload).is_empty());

    clear_all_caches().await;
}

/// A rejected search is classified as a rejection, not a transport failure,
/// and carries a body excerpt for diagnostics.
#[tokio::test]
#[serial]
async fn test_rejected_search_classification() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream maintenance window"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::Courses);

    let error = search_courses(&client, &config, "Oxmoor").await.unwrap_err();
    assert!(error.is_rejected_request());
    assert!(!error.is_transport_failure());
    assert!(error.to_string().contains("upstream maintenance window"));

    clear_all_caches().await;
}

/// An unrecognized top-level payload shape projects to an empty list rather
/// than an error, leaving the session usable.
#[tokio::test]
#[serial]
async fn test_unrecognized_payload_shape_projects_empty() {
    clear_all_caches().await;

    let mock_server = MockServer::start().await;
    let client = test_client();

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [{"id": 1}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri(), ApiShape::Courses);

    let payload = search_courses(&client, &config, "Oxmoor").await.unwrap();
    assert!(project_summaries(&payload).is_empty());

    clear_all_caches().await;
}
