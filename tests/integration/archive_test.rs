// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{build_zip, create_test_app};
use harvester::domain::services::artifact_extractor::{MHTML_ARCHIVE_PATH, PNG_ARCHIVE_PATH};
use harvester::{extract_html, extract_image};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const MHTML: &str = "From: <Saved by Blink>\r\n\
Snapshot-Content-Location: http://x\r\n\
Subject: capture\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/related; type=\"text/html\"; boundary=\"----MultipartBoundary--\"\r\n\
\r\n\
------MultipartBoundary--\r\n\
Content-Type: text/html\r\n\
Content-Location: http://x\r\n\
\r\n\
test html\r\n\
------MultipartBoundary----\r\n";

#[tokio::test]
async fn test_downloaded_archive_yields_both_artifacts() {
    let app = create_test_app().await;
    let png = b"\x89PNG\r\n\x1a\nimage-data".to_vec();
    let archive = build_zip(&[
        (PNG_ARCHIVE_PATH, &png[..]),
        (MHTML_ARCHIVE_PATH, MHTML.as_bytes()),
    ]);

    Mock::given(method("POST"))
        .and(path("/getfile/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .mount(&app.server)
        .await;

    let downloaded = app.client.download_file("archive-1").await.unwrap();

    assert_eq!(extract_image(&downloaded).unwrap(), Some(png));
    assert_eq!(extract_html(&downloaded).as_deref(), Some("test html"));
}

#[test]
fn test_archive_without_artifacts() {
    let archive = build_zip(&[("contents/test.txt", &b"unrelated"[..])]);

    assert_eq!(extract_image(&archive).unwrap(), None);
    assert_eq!(extract_html(&archive), None);
}
