// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::transport::traits::{Transport, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 记录的请求
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Json { url: String, body: Value },
    Form { url: String, fields: Vec<(String, String)> },
}

/// 内存传输，用于单元测试
///
/// 按顺序返回预设的响应，并记录每次请求
#[derive(Default)]
pub struct MockTransport {
    json_responses: Mutex<VecDeque<Value>>,
    form_responses: Mutex<VecDeque<Bytes>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预设一个JSON响应
    pub fn with_json(self, response: Value) -> Self {
        self.json_responses.lock().unwrap().push_back(response);
        self
    }

    /// 预设一个表单响应
    pub fn with_bytes(self, response: impl Into<Bytes>) -> Self {
        self.form_responses.lock().unwrap().push_back(response.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 最后一次JSON请求的请求体
    pub fn last_json_body(&self) -> Option<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|r| match r {
                RecordedRequest::Json { body, .. } => Some(body.clone()),
                RecordedRequest::Form { .. } => None,
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest::Json {
            url: url.to_string(),
            body: body.clone(),
        });
        self.json_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no JSON response queued".to_string()))
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Bytes, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest::Form {
            url: url.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.form_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no form response queued".to_string()))
    }
}
