// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::transport::traits::TransportError;
use thiserror::Error;

/// Harvester客户端错误类型
///
/// 产物缺失（没有截图、没有匹配的HTML部分）不属于错误，
/// 以 `None` 表示。
#[derive(Error, Debug)]
pub enum HarvesterError {
    /// 传输成功但响应结构不符合约定
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// 网络或HTTP层错误，原样向上传递
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// 无法读取的ZIP归档
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// 客户端配置无效
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HarvesterError {
    /// 构造协议错误
    pub fn protocol(message: impl Into<String>) -> Self {
        HarvesterError::Protocol(message.into())
    }

    /// 判断是否为协议错误
    pub fn is_protocol(&self) -> bool {
        matches!(self, HarvesterError::Protocol(_))
    }
}
