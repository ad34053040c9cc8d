// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 产物提取（artifact_extractor）：从捕获归档中提取截图和主HTML文档
/// - 命令分发（command_dispatcher）：发送带认证的命令批次并解包响应
/// - Harvester客户端（harvester_service）：任务和文件操作
///
/// 产物提取是纯函数，不依赖网络；其余服务通过传输特质访问网络。
pub mod artifact_extractor;
pub mod command_dispatcher;
pub mod harvester_service;
