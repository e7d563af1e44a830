//! 任务提交错误

use thiserror::Error;

/// 提交被拒绝的原因，两种情况都不会创建任务
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 必填输入缺失（校验错误），调用方应在输入齐全前禁用提交
    #[error("缺少必填输入: {field}")]
    MissingInput { field: &'static str },

    /// 凭证未配置（配置错误），调用方应引导用户打开设置
    #[error("缺少 API Key，请先在设置中配置")]
    MissingCredential,
}
