// Integration tests for the resource store against a mock HTTP server.
// Covers cache merge semantics and the loading/error flags.

use httpmock::prelude::*;
use sbwm::{ApiClient, Resource, ResourceStore, SbwmError};
use serde_json::json;

fn store_for(server: &MockServer) -> ResourceStore {
    ResourceStore::new(ApiClient::with_base_url(&server.base_url()).unwrap())
}

#[tokio::test]
async fn test_fetch_all_populates_cache() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Project");
        then.status(200).json_body(json!([
            {"ID": 2, "Name": "Beta"},
            {"ID": 1, "Name": "Alpha"}
        ]));
    });

    let mut store = store_for(&server);
    let rows = store.fetch_all(Resource::Project).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(store.list(Resource::Project).len(), 2);
    let row = store.by_id(Resource::Project, &1i64.into()).unwrap();
    assert_eq!(row["Name"], json!("Alpha"));
    assert!(!store.is_loading(Resource::Project));
    assert!(store.error(Resource::Project).is_none());
}

#[tokio::test]
async fn test_fetch_all_replaces_previous_snapshot() {
    let server = MockServer::start();
    let mut first = server.mock(|when, then| {
        when.method(GET).path("/Project");
        then.status(200).json_body(json!([
            {"ID": 1, "Name": "Alpha"},
            {"ID": 2, "Name": "Beta"}
        ]));
    });

    let mut store = store_for(&server);
    store.fetch_all(Resource::Project).await.unwrap();
    first.delete();

    // Record 2 is gone on the server; a refetch must drop it locally too.
    server.mock(|when, then| {
        when.method(GET).path("/Project");
        then.status(200).json_body(json!([{"ID": 1, "Name": "Alpha"}]));
    });

    store.fetch_all(Resource::Project).await.unwrap();
    assert_eq!(store.list(Resource::Project).len(), 1);
    assert!(store.by_id(Resource::Project, &2i64.into()).is_none());
}

#[tokio::test]
async fn test_fetch_all_skips_rows_without_usable_key() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Equipment");
        then.status(200).json_body(json!([
            {"ID": 1, "Name": "Camera"},
            {"Name": "No key at all"},
            {"ID": null, "Name": "Null key"}
        ]));
    });

    let mut store = store_for(&server);
    let rows = store.fetch_all(Resource::Equipment).await.unwrap();

    // The raw response is handed back untouched; only the cache filters.
    assert_eq!(rows.len(), 3);
    assert_eq!(store.list(Resource::Equipment).len(), 1);
}

#[tokio::test]
async fn test_fetch_one_merges_into_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Task");
        then.status(200).json_body(json!([
            {"ID": 1, "Name": "Wireframes", "Done": 0},
            {"ID": 2, "Name": "Review", "Done": 0}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/Task/1");
        then.status(200)
            .json_body(json!({"ID": 1, "Name": "Wireframes", "Done": 1}));
    });

    let mut store = store_for(&server);
    store.fetch_all(Resource::Task).await.unwrap();
    store.fetch_one(Resource::Task, 1i64).await.unwrap();

    // Refreshed row replaced in place, sibling untouched.
    let row = store.by_id(Resource::Task, &1i64.into()).unwrap();
    assert_eq!(row["Done"], json!(1));
    assert!(store.by_id(Resource::Task, &2i64.into()).is_some());
}

#[tokio::test]
async fn test_save_caches_server_assigned_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/Timesheet");
        then.status(201).json_body(json!({
            "ID": 41,
            "ProjectID": 12,
            "StudentID": 9,
            "Date": "2026-08-28",
            "Minutes": 90,
            "Approved": 0
        }));
    });

    let mut store = store_for(&server);
    let saved = store
        .save(
            Resource::Timesheet,
            &json!({"ID": 0, "ProjectID": 12, "StudentID": 9, "Date": "2026-08-28", "Minutes": 90, "Approved": 0}),
        )
        .await
        .unwrap();

    assert_eq!(saved["ID"], json!(41));
    assert!(store.by_id(Resource::Timesheet, &41i64.into()).is_some());
}

#[tokio::test]
async fn test_save_fixed_key_record() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/Teacher/MEI");
        then.status(200)
            .json_body(json!({"Abbr": "MEI", "Name": "Meier", "Firstname": "Anna"}));
    });

    let mut store = store_for(&server);
    store
        .save(
            Resource::Teacher,
            &json!({"Abbr": "MEI", "Name": "Meier", "Firstname": "Anna"}),
        )
        .await
        .unwrap();

    mock.assert();
    let row = store.by_id(Resource::Teacher, &"MEI".into()).unwrap();
    assert_eq!(row["Name"], json!("Meier"));
}

#[tokio::test]
async fn test_save_read_only_view_makes_no_request() {
    let server = MockServer::start();
    let any_put = server.mock(|when, then| {
        when.method(PUT);
        then.status(200);
    });
    let any_post = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let mut store = store_for(&server);
    let err = store
        .save(Resource::EquipmentView, &json!({"ID": 1, "Name": "Camera"}))
        .await
        .unwrap_err();

    assert!(matches!(err, SbwmError::ReadOnly(Resource::EquipmentView)));
    assert_eq!(any_put.hits(), 0);
    assert_eq!(any_post.hits(), 0);
}

#[tokio::test]
async fn test_save_response_without_key_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/Task");
        // Server accepts the create but reports no assigned ID.
        then.status(201).json_body(json!({"Name": "Wireframes"}));
    });

    let mut store = store_for(&server);
    let err = store
        .save(Resource::Task, &json!({"ID": 0, "Name": "Wireframes"}))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SbwmError::MissingKey {
            resource: Resource::Task,
            key: "ID",
        }
    ));
    // A keyless record is unaddressable, so nothing may enter the cache.
    assert!(store.list(Resource::Task).is_empty());
    assert!(!store.is_loading(Resource::Task));
    let recorded = store.error(Resource::Task).unwrap();
    assert!(recorded.contains("missing primary key"));
}

#[tokio::test]
async fn test_failed_fetch_one_records_error_and_rethrows() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Student/9");
        then.status(404);
    });

    let mut store = store_for(&server);
    let err = store.fetch_one(Resource::Student, 9i64).await.unwrap_err();

    assert!(matches!(err, SbwmError::Http { status: 404, .. }));
    assert!(!store.is_loading(Resource::Student));
    assert!(store.error(Resource::Student).unwrap().contains("Not Found"));
    assert!(store.by_id(Resource::Student, &9i64.into()).is_none());
}

#[tokio::test]
async fn test_failed_fetch_records_error_and_rethrows() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/Student");
        then.status(503).body("maintenance window");
    });

    let mut store = store_for(&server);
    let err = store.fetch_all(Resource::Student).await.unwrap_err();

    assert!(matches!(err, SbwmError::Http { status: 503, .. }));
    assert!(!store.is_loading(Resource::Student));
    let recorded = store.error(Resource::Student).unwrap();
    assert!(recorded.contains("maintenance window"));
    // Errors are per resource.
    assert!(store.error(Resource::Project).is_none());
}

#[tokio::test]
async fn test_error_cleared_by_next_successful_action() {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/Student");
        then.status(500).body("boom");
    });

    let mut store = store_for(&server);
    store.fetch_all(Resource::Student).await.unwrap_err();
    assert!(store.error(Resource::Student).is_some());
    failing.delete();

    server.mock(|when, then| {
        when.method(GET).path("/Student");
        then.status(200).json_body(json!([
            {"ID": 9, "Name": "Muster", "Firstname": "Hans", "Year": 2026, "Fullname": "Hans Muster"}
        ]));
    });

    store.fetch_all(Resource::Student).await.unwrap();
    assert!(store.error(Resource::Student).is_none());
    assert_eq!(store.list(Resource::Student).len(), 1);
}
