// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 领域模型（models）：请求、命令和代理区域
/// - 服务（services）：命令分发、任务操作和产物提取
pub mod models;
pub mod services;
