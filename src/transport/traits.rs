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

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;

/// 传输错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 服务端返回非成功状态码
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP状态码
        status: u16,
        /// 请求地址
        url: String,
    },
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// HTTP传输特质
///
/// 分发器只依赖此接口；阻塞或异步的调用风格由上层应用决定。
#[async_trait]
pub trait Transport: Send + Sync {
    /// 以JSON请求体发送POST请求，返回解码后的JSON响应
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;

    /// 以表单请求体发送POST请求，返回原始响应字节
    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<Bytes, TransportError>;
}
