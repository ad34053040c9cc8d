// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, API_TOKEN, STORAGE_TOKEN};
use harvester::transport::traits::TransportError;
use harvester::{CaptureRequest, HarvesterError, ProxyRegion};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_capture_task_over_http() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/"))
        .and(body_json(json!([
            {"command": "setauth", "data": API_TOKEN},
            {
                "command": "create_harvest_task",
                "dest_path": "/harvests",
                "dest_name": "<taskid>.<auto-ext>",
                "dest_auth_token": STORAGE_TOKEN,
                "dest_bucket_id": "captures",
                "egress_tag": "Singapore",
                "task_params": {
                    "urls": ["https://example.com/login"],
                    "request_type": "visual",
                    "vis_params": [{"name": "output_image"}, {"name": "output_mhtml"}]
                }
            }
        ])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"result": true}, {"result": {"task_id": "task-42"}}])),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let request = CaptureRequest::new("https://example.com/login", ProxyRegion::Singapore);
    let task_id = app.client.create_capture_task(&request).await.unwrap();

    assert_eq!(task_id, "task-42");
}

#[tokio::test]
async fn test_list_unfinished_tasks_over_http() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/"))
        .and(body_json(json!([
            {"command": "setauth", "data": API_TOKEN},
            {"command": "find_harvest_task", "finished": false}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {},
            {"result": [{"task_id": "task-1", "finished": false}]}
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let tasks = app.client.list_tasks(Some(false)).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["task_id"], "task-1");
}

#[tokio::test]
async fn test_delete_file_already_deleted_over_http() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/"))
        .and(body_json(json!([
            {"command": "setauth", "data": STORAGE_TOKEN},
            {"command": "deletefile", "file_id": "file-7"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {},
            {"error": "KeyError: Did not find any matching records"}
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let result = app.client.delete_file("file-7").await.unwrap();
    assert_eq!(result, "deleted file file-7");
}

#[tokio::test]
async fn test_single_element_response_is_protocol_error() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"error": "bad auth"}])))
        .mount(&app.server)
        .await;

    let err = app.client.delete_task("task-1").await.unwrap_err();
    assert!(err.is_protocol(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_download_file_over_http() {
    let app = create_test_app().await;
    let payload = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff];

    Mock::given(method("POST"))
        .and(path("/getfile/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("id=file-9&auth={}", STORAGE_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&app.server)
        .await;

    let content = app.client.download_file("file-9").await.unwrap();
    assert_eq!(content.to_vec(), payload);
}

#[tokio::test]
async fn test_download_file_http_error() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/getfile/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.server)
        .await;

    let err = app.client.download_file("missing").await.unwrap_err();
    assert!(matches!(
        err,
        HarvesterError::Transport(TransportError::Status { status: 404, .. })
    ));
}
