//! 任务队列服务
//!
//! 持有任务集合并驱动异步生成流程。结算按 id 定位任务，
//! 与并发的插入 / 删除互不干扰；删除不取消在途请求，
//! 迟到的结算落在不存在的 id 上是无害的空操作。

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::credentials::{resolve_api_key_with, CredentialStore, GEMINI_PROVIDER};
use crate::provider::base::GenerationBackend;
use crate::provider::error::ProviderResult;
use crate::provider::types::GenerationRequest;
use crate::queue::error::SubmitError;
use crate::queue::types::{GeneratedItem, StyleTransferParameters, TaskStatus};

/// 生成任务队列
///
/// 提交与重新生成都会创建全新任务并插入队首（最新在前）。
/// 并发提交相互独立：不去重、不限并发，结算完成顺序不保证。
pub struct GenerationQueue {
    backend: Arc<dyn GenerationBackend>,
    credentials: Arc<dyn CredentialStore>,
    env_lookup: fn(&str) -> Option<String>,
    tasks: Arc<RwLock<Vec<GeneratedItem>>>,
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl GenerationQueue {
    pub fn new(backend: Arc<dyn GenerationBackend>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            backend,
            credentials,
            env_lookup: process_env,
            tasks: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 注入环境变量查询，测试或隔离环境无需触碰进程全局状态
    pub fn with_env_lookup(mut self, env_lookup: fn(&str) -> Option<String>) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    fn resolve_key(&self) -> Option<String> {
        resolve_api_key_with(
            None,
            self.credentials.as_ref(),
            GEMINI_PROVIDER,
            self.env_lookup,
        )
    }

    /// 任务集合快照，最新在前
    pub fn tasks(&self) -> Vec<GeneratedItem> {
        self.tasks.read().clone()
    }

    /// 按 id 查找任务
    pub fn get(&self, id: &str) -> Option<GeneratedItem> {
        self.tasks.read().iter().find(|task| task.id == id).cloned()
    }

    /// 提交生成任务
    ///
    /// 校验三项必填输入，并在创建任务前解析凭证；
    /// 任一失败都直接拒绝，不创建任务、不发起网络调用。
    pub fn submit(&self, parameters: StyleTransferParameters) -> Result<String, SubmitError> {
        if parameters.reference_image.is_empty() {
            return Err(SubmitError::MissingInput {
                field: "referenceImage",
            });
        }
        if parameters.target_text.trim().is_empty() {
            return Err(SubmitError::MissingInput {
                field: "targetText",
            });
        }
        if parameters.font_template.is_empty() {
            return Err(SubmitError::MissingInput {
                field: "fontTemplate",
            });
        }
        let api_key = self.resolve_key().ok_or(SubmitError::MissingCredential)?;
        Ok(self.enqueue(parameters, api_key))
    }

    /// 以源任务的全部参数创建全新任务（新 id），源任务不受影响
    pub fn regenerate(&self, source: &GeneratedItem) -> Result<String, SubmitError> {
        let api_key = self.resolve_key().ok_or(SubmitError::MissingCredential)?;
        Ok(self.enqueue(source.parameters.clone(), api_key))
    }

    /// 删除任务；id 不存在时为空操作，不取消在途请求
    pub fn remove(&self, id: &str) {
        self.tasks.write().retain(|task| task.id != id);
    }

    fn enqueue(&self, parameters: StyleTransferParameters, api_key: String) -> String {
        let task = GeneratedItem::new(parameters.clone());
        let id = task.id.clone();
        self.tasks.write().insert(0, task);
        info!("生成任务已创建: {}", id);

        let backend = self.backend.clone();
        let tasks = self.tasks.clone();
        let task_id = id.clone();
        tokio::spawn(async move {
            let request = GenerationRequest {
                style_reference: parameters.reference_image,
                font_template: parameters.font_template,
                target_text: parameters.target_text,
                high_quality: parameters.is_high_quality,
                aspect_ratio: parameters.selected_ratio,
            };
            let outcome = backend.generate(request, &api_key).await;
            settle(&tasks, &task_id, outcome);
        });
        id
    }
}

/// 按 id 结算任务：恰好一次转换到 success 或 error
///
/// Provider 侧错误不向外传播，只落为任务的 error 状态。
fn settle(tasks: &RwLock<Vec<GeneratedItem>>, id: &str, outcome: ProviderResult<String>) {
    let mut guard = tasks.write();
    let Some(task) = guard.iter_mut().find(|task| task.id == id) else {
        warn!("任务 {} 已删除，丢弃迟到的生成结果", id);
        return;
    };
    match outcome {
        Ok(image_url) => {
            task.status = TaskStatus::Success;
            task.image_url = Some(image_url);
            info!("生成任务成功: {}", id);
        }
        Err(err) => {
            task.status = TaskStatus::Error;
            warn!("生成任务失败: {} - {}", id, err);
        }
    }
}
