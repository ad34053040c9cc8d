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

use crate::utils::errors::HarvesterError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Harvester服务配置
    pub harvester: HarvesterSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// Harvester服务配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HarvesterSettings {
    /// 服务基础地址，例如 `https://harvester.example.com`
    pub base_url: String,
    /// API命令认证令牌
    pub api_token: String,
    /// 永久存储认证令牌，用于文件下载和删除
    pub storage_token: String,
    /// 捕获结果存放的存储桶
    pub s3_bucket: String,
    /// 捕获结果存放路径
    pub dest_path: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 日志配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// 是否输出JSON格式日志
    pub json: bool,
}

impl HarvesterSettings {
    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 校验配置
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 配置有效
    /// * `Err(HarvesterError::Config)` - 基础地址无法解析、不是HTTP(S)地址或令牌为空
    pub fn validate(&self) -> Result<(), HarvesterError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| HarvesterError::Config(format!("base_url {}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HarvesterError::Config(format!(
                "base_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.api_token.trim().is_empty() {
            return Err(HarvesterError::Config("api_token is empty".to_string()));
        }
        if self.storage_token.trim().is_empty() {
            return Err(HarvesterError::Config("storage_token is empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(HarvesterError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `HARVESTER__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("HARVESTER").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 带默认值的配置构建器，供 `new` 和测试共用
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Config::builder()
            // Start with default settings
            .set_default("harvester.base_url", "http://localhost:8080")?
            .set_default("harvester.api_token", "")?
            .set_default("harvester.storage_token", "")?
            .set_default("harvester.s3_bucket", "")?
            .set_default("harvester.dest_path", "/")?
            .set_default("harvester.timeout_secs", 60)?
            .set_default("logging.json", false)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
