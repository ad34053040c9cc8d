// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 服务端在存储时替换为任务信息的目标文件名模板
pub const HARVEST_TASK_DEST_NAME: &str = "<taskid>.<auto-ext>";

/// 可视化捕获请求类型
pub const VISUAL_REQUEST_TYPE: &str = "visual";

/// API命令
///
/// 序列化为以 `command` 字段标记的JSON对象，
/// 例如 `{"command": "delete_harvest_task", "task_id": "..."}`。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command")]
pub enum Command {
    /// 认证指令，总是作为批次的第一个元素发送
    #[serde(rename = "setauth")]
    SetAuth { data: String },

    /// 创建捕获任务
    #[serde(rename = "create_harvest_task")]
    CreateHarvestTask {
        dest_path: String,
        dest_name: String,
        dest_auth_token: String,
        dest_bucket_id: String,
        egress_tag: String,
        task_params: TaskParams,
    },

    /// 查询捕获任务，`finished` 缺省时不做过滤
    #[serde(rename = "find_harvest_task")]
    FindHarvestTask {
        #[serde(skip_serializing_if = "Option::is_none")]
        finished: Option<bool>,
    },

    /// 删除捕获任务
    #[serde(rename = "delete_harvest_task")]
    DeleteHarvestTask { task_id: String },

    /// 删除永久存储中的文件
    #[serde(rename = "deletefile")]
    DeleteFile { file_id: String },
}

impl Command {
    /// 构造认证指令
    pub fn set_auth(token: impl Into<String>) -> Self {
        Command::SetAuth { data: token.into() }
    }

    /// 命令名称，用于日志和错误信息
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetAuth { .. } => "setauth",
            Command::CreateHarvestTask { .. } => "create_harvest_task",
            Command::FindHarvestTask { .. } => "find_harvest_task",
            Command::DeleteHarvestTask { .. } => "delete_harvest_task",
            Command::DeleteFile { .. } => "deletefile",
        }
    }
}

/// 捕获任务参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskParams {
    /// 目标URL列表
    pub urls: Vec<String>,
    /// 请求类型
    pub request_type: String,
    /// 请求的输出类型，顺序为图片在前、MHTML在后
    pub vis_params: Vec<VisParam>,
}

/// 单个输出类型参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisParam {
    /// 输出名称
    pub name: OutputKind,
}

/// 捕获输出类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputKind {
    /// PNG截图
    #[serde(rename = "output_image")]
    Image,
    /// MHTML归档
    #[serde(rename = "output_mhtml")]
    Mhtml,
}

impl From<OutputKind> for VisParam {
    fn from(name: OutputKind) -> Self {
        VisParam { name }
    }
}
