// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了客户端使用的核心数据结构，包括：
/// - 捕获请求（capture_request）：目标URL、出口区域和输出类型
/// - 命令（command）：发送给Harvester API的命令
/// - 代理区域（proxy_region）：国家/地区代码到出口位置的映射
pub mod capture_request;
pub mod command;
pub mod proxy_region;
