//! 生成服务 Provider 模块
//!
//! 负责把风格参考图、字形模板与目标文字打包为多模态生成请求，
//! 调用远端图像生成服务并提取返回的内联图像，
//! 瞬时错误按指数退避自动重试。

pub mod base;
pub mod error;
pub mod gemini;
pub mod retry;
pub mod types;

pub use base::GenerationBackend;
pub use error::{ProviderError, ProviderResult};
pub use gemini::GeminiClient;
pub use types::{AspectRatio, GenerationRequest};
