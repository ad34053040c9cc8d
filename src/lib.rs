// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理Harvester服务地址、令牌和日志配置
pub mod config;

/// 领域模块
///
/// 包含命令模型、任务操作和捕获归档解析
pub mod domain;

/// 传输模块
///
/// 定义HTTP传输接口及其reqwest实现
pub mod transport;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;

pub use domain::models::capture_request::CaptureRequest;
pub use domain::models::proxy_region::ProxyRegion;
pub use domain::services::artifact_extractor::{extract_html, extract_image};
pub use domain::services::harvester_service::HarvesterClient;
pub use utils::errors::HarvesterError;
