// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use harvester::config::settings::HarvesterSettings;
use harvester::HarvesterClient;
use std::io::{Cursor, Write};
use wiremock::MockServer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const API_TOKEN: &str = "api-token";
pub const STORAGE_TOKEN: &str = "storage-token";

#[allow(dead_code)]
pub struct TestApp {
    pub server: MockServer,
    pub client: HarvesterClient,
}

pub fn settings_for(base_url: &str) -> HarvesterSettings {
    HarvesterSettings {
        base_url: base_url.to_string(),
        api_token: API_TOKEN.to_string(),
        storage_token: STORAGE_TOKEN.to_string(),
        s3_bucket: "captures".to_string(),
        dest_path: "/harvests".to_string(),
        timeout_secs: 5,
    }
}

pub async fn create_test_app() -> TestApp {
    let server = MockServer::start().await;
    let client = HarvesterClient::from_settings(&settings_for(&server.uri()))
        .expect("valid test settings");
    TestApp { server, client }
}

pub fn build_zip(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (path, content) in members {
        writer.start_file(*path, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
