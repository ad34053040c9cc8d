// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::command::Command;
use crate::transport::traits::Transport;
use crate::utils::errors::HarvesterError;
use serde_json::Value;
use tracing::debug;

/// 命令分发器
///
/// 每次分发都发送一个两元素批次：`[setauth, command]`，
/// 并返回响应批次中的第二个元素。第一个元素是认证结果，被忽略。
pub struct CommandDispatcher<T: Transport> {
    transport: T,
    api_url: String,
}

impl<T: Transport> CommandDispatcher<T> {
    /// 创建新的分发器
    ///
    /// # 参数
    ///
    /// * `transport` - HTTP传输实现
    /// * `api_url` - 完整的API地址（`<base>/api/`）
    pub fn new(transport: T, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
        }
    }

    /// API地址
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// 底层传输
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 构造请求批次
    pub fn batch(command: &Command, token: &str) -> Result<Value, HarvesterError> {
        let auth = serde_json::to_value(Command::set_auth(token))
            .map_err(|e| HarvesterError::protocol(format!("Failed to encode setauth: {}", e)))?;
        let command = serde_json::to_value(command).map_err(|e| {
            HarvesterError::protocol(format!("Failed to encode {}: {}", command.name(), e))
        })?;
        Ok(Value::Array(vec![auth, command]))
    }

    /// 分发命令
    ///
    /// # 参数
    ///
    /// * `command` - 要执行的命令
    /// * `token` - 随批次发送的认证令牌
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 响应批次的第二个元素，原样返回
    /// * `Err(HarvesterError::Protocol)` - 响应不是恰好两个元素的数组
    /// * `Err(HarvesterError::Transport)` - 传输失败
    pub async fn dispatch(&self, command: &Command, token: &str) -> Result<Value, HarvesterError> {
        let batch = Self::batch(command, token)?;
        debug!(command = command.name(), "Dispatching harvester command");

        let response = self.transport.post_json(&self.api_url, &batch).await?;

        match response {
            Value::Array(mut items) if items.len() == 2 => Ok(items.swap_remove(1)),
            Value::Array(items) => Err(HarvesterError::protocol(format!(
                "Did not receive two response objects for {}: got {}",
                command.name(),
                items.len()
            ))),
            other => Err(HarvesterError::protocol(format!(
                "Did not receive two response objects for {}: {}",
                command.name(),
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "command_dispatcher_test.rs"]
mod tests;
