// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::transport::traits::{Transport, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

const USER_AGENT: &str = concat!("harvester/", env!("CARGO_PKG_VERSION"));

/// HTTP传输
///
/// 基于reqwest实现，客户端在构造时创建一次并在所有请求间共享
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 创建新的传输实例
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求的超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestTransport)` - 传输实例
    /// * `Err(TransportError)` - 客户端构建失败
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        let start = Instant::now();
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "JSON command posted"
        );

        // The API answers with a JSON batch even for rejected commands,
        // so only an undecodable body is treated as a failure here.
        match response.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(e) if !status.is_success() => {
                debug!("Undecodable error body: {}", e);
                Err(TransportError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Bytes, TransportError> {
        let start = Instant::now();
        let response = self.client.post(url).form(fields).send().await?;
        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Form request posted"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}
