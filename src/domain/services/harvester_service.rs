// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HarvesterSettings;
use crate::domain::models::capture_request::CaptureRequest;
use crate::domain::models::command::{
    Command, TaskParams, HARVEST_TASK_DEST_NAME, VISUAL_REQUEST_TYPE,
};
use crate::domain::services::command_dispatcher::CommandDispatcher;
use crate::transport::reqwest_transport::ReqwestTransport;
use crate::transport::traits::Transport;
use crate::utils::errors::HarvesterError;
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, info};

/// 服务端报告文件已被删除时返回的错误文本
pub const ALREADY_DELETED_ERROR: &str = "KeyError: Did not find any matching records";

const KEY_RESULT: &str = "result";
const KEY_ERROR: &str = "error";
const KEY_TASK_ID: &str = "task_id";
const KEY_DELETED: &str = "deleted";

/// Harvester客户端
///
/// 在命令分发器之上提供任务创建、查询、删除以及文件下载和删除操作。
/// 构造后只持有不可变的配置，不在调用之间共享可变状态。
pub struct HarvesterClient<T: Transport = ReqwestTransport> {
    dispatcher: CommandDispatcher<T>,
    getfile_url: String,
    api_token: String,
    storage_token: String,
    s3_bucket: String,
    dest_path: String,
}

impl HarvesterClient<ReqwestTransport> {
    /// 根据配置创建基于reqwest的客户端
    ///
    /// # 返回值
    ///
    /// * `Ok(HarvesterClient)` - 客户端实例
    /// * `Err(HarvesterError)` - 配置无效或HTTP客户端构建失败
    pub fn from_settings(settings: &HarvesterSettings) -> Result<Self, HarvesterError> {
        settings.validate()?;
        let transport = ReqwestTransport::new(settings.timeout())?;
        Ok(Self::new(transport, settings))
    }
}

impl<T: Transport> HarvesterClient<T> {
    /// 使用指定传输创建客户端
    pub fn new(transport: T, settings: &HarvesterSettings) -> Self {
        let base = settings.base_url.trim_end_matches('/');
        Self {
            dispatcher: CommandDispatcher::new(transport, format!("{}/api/", base)),
            getfile_url: format!("{}/getfile/", base),
            api_token: settings.api_token.clone(),
            storage_token: settings.storage_token.clone(),
            s3_bucket: settings.s3_bucket.clone(),
            dest_path: settings.dest_path.clone(),
        }
    }

    /// 命令分发器
    pub fn dispatcher(&self) -> &CommandDispatcher<T> {
        &self.dispatcher
    }

    /// 文件下载地址
    pub fn getfile_url(&self) -> &str {
        &self.getfile_url
    }

    /// 构造创建任务命令
    pub fn create_task_command(&self, request: &CaptureRequest) -> Command {
        Command::CreateHarvestTask {
            dest_path: self.dest_path.clone(),
            dest_name: HARVEST_TASK_DEST_NAME.to_string(),
            dest_auth_token: self.storage_token.clone(),
            dest_bucket_id: self.s3_bucket.clone(),
            egress_tag: request.region.display_name().to_string(),
            task_params: TaskParams {
                urls: vec![request.url.clone()],
                request_type: VISUAL_REQUEST_TYPE.to_string(),
                vis_params: request.vis_params(),
            },
        }
    }

    /// 创建捕获任务
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 服务端生成的任务ID
    /// * `Err(HarvesterError)` - 响应中没有任务ID或请求失败
    pub async fn create_capture_task(
        &self,
        request: &CaptureRequest,
    ) -> Result<String, HarvesterError> {
        let command = self.create_task_command(request);
        let reply = self.dispatcher.dispatch(&command, &self.api_token).await?;

        let task_id = reply
            .get(KEY_RESULT)
            .and_then(|result| result.get(KEY_TASK_ID))
            .filter(|id| is_truthy(id))
            .ok_or_else(|| {
                HarvesterError::protocol(format!(
                    "Task ID not returned from harvester task for {}",
                    request.url
                ))
            })?;

        let task_id = match task_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        info!(
            task_id = %task_id,
            url = %request.url,
            region = %request.region,
            "Capture task created"
        );
        Ok(task_id)
    }

    /// 查询任务
    ///
    /// # 参数
    ///
    /// * `finished` - 按完成状态过滤；`None` 表示不过滤
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Value>)` - 服务端返回的任务记录，保持原有顺序
    /// * `Err(HarvesterError)` - 结果不是数组或请求失败
    pub async fn list_tasks(&self, finished: Option<bool>) -> Result<Vec<Value>, HarvesterError> {
        let command = Command::FindHarvestTask { finished };
        let mut reply = self.dispatcher.dispatch(&command, &self.api_token).await?;

        match reply.get_mut(KEY_RESULT).map(Value::take) {
            Some(Value::Array(tasks)) => {
                debug!(count = tasks.len(), ?finished, "Fetched harvester tasks");
                Ok(tasks)
            }
            _ => Err(HarvesterError::protocol(
                "Malformed harvester response when fetching all tasks",
            )),
        }
    }

    /// 删除任务
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 服务端报告的删除标志
    /// * `Err(HarvesterError)` - 响应中没有删除标志或请求失败
    pub async fn delete_task(&self, task_id: &str) -> Result<bool, HarvesterError> {
        let command = Command::DeleteHarvestTask {
            task_id: task_id.to_string(),
        };
        let reply = self.dispatcher.dispatch(&command, &self.api_token).await?;

        let deleted = reply
            .get(KEY_RESULT)
            .filter(|result| is_truthy(result))
            .and_then(|result| result.get(KEY_DELETED))
            .filter(|deleted| !deleted.is_null())
            .ok_or_else(|| {
                HarvesterError::protocol(format!(
                    "Malformed harvester response when deleting task {}",
                    task_id
                ))
            })?;

        let deleted = deleted.as_bool() == Some(true);
        info!(task_id = %task_id, deleted, "Harvester task delete requested");
        Ok(deleted)
    }

    /// 下载永久存储中的文件
    ///
    /// 只接受文件ID，不接受文件路径
    pub async fn download_file(&self, file_id: &str) -> Result<Bytes, HarvesterError> {
        let fields = [("id", file_id), ("auth", self.storage_token.as_str())];
        let content = self
            .dispatcher
            .transport()
            .post_form(&self.getfile_url, &fields)
            .await?;
        debug!(file_id = %file_id, size = content.len(), "Downloaded harvester file");
        Ok(content)
    }

    /// 删除永久存储中的文件
    ///
    /// 文件已被删除时同样视为成功
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 服务端返回的结果，或已删除时的确认信息
    /// * `Err(HarvesterError)` - 响应中没有结果或请求失败
    pub async fn delete_file(&self, file_id: &str) -> Result<String, HarvesterError> {
        let command = Command::DeleteFile {
            file_id: file_id.to_string(),
        };
        let reply = self
            .dispatcher
            .dispatch(&command, &self.storage_token)
            .await?;

        if reply.get(KEY_ERROR).and_then(Value::as_str) == Some(ALREADY_DELETED_ERROR) {
            info!(file_id = %file_id, "Harvester file was already deleted");
            return Ok(format!("deleted file {}", file_id));
        }

        let result = reply
            .get(KEY_RESULT)
            .filter(|result| is_truthy(result))
            .ok_or_else(|| {
                HarvesterError::protocol(format!(
                    "Malformed harvester response when deleting file {}",
                    file_id
                ))
            })?;

        info!(file_id = %file_id, "Harvester file deleted");
        Ok(match result {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// 判断JSON值是否为"非空"：null、false、0、空字符串、空数组和空对象均视为空
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
#[path = "harvester_service_test.rs"]
mod tests;
