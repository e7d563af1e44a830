//! Provider 统一错误类型

use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider 调用错误
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 未解析到 API Key，不发起任何网络请求
    #[error("缺少 API Key，请先在设置中配置")]
    MissingCredential,

    /// 响应中没有任何内联图像数据
    #[error("模型响应中没有图像数据")]
    NoImageInResponse,

    /// 远端服务返回的 API 错误
    #[error("Gemini API 错误 {status}: {message}")]
    Api { status: u16, message: String },

    /// 网络传输错误
    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),
}

impl ProviderError {
    /// 瞬时错误判定
    ///
    /// 保留原始实现的子串启发式（503 / overloaded / 429 / rate limit），
    /// 不做更广的语义归类。
    pub fn is_transient(&self) -> bool {
        let text = self.to_string();
        let lower = text.to_lowercase();
        text.contains("503")
            || lower.contains("overloaded")
            || text.contains("429")
            || lower.contains("rate limit")
    }
}
