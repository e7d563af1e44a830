//! FontStyle 字体样式复刻核心
//!
//! 这是字体样式 AI 复刻应用的核心实现，提供完整的生成管线。
//! 主要功能包括：
//! - 字形模板光栅化（文字 + 字体 → 黑底白字剪影 PNG）
//! - 生成结果透明化抠图（亮度转 Alpha 的黑底抠图）
//! - Gemini 图像生成客户端（多模态请求构建与瞬时错误重试）
//! - 生成任务队列管理（提交 / 重新生成 / 删除 / 按 id 结算）

// 模块声明
pub mod credentials; // 凭证解析模块
pub mod font; // 字体目录与注册模块
pub mod matting; // 透明化抠图模块
pub mod provider; // 生成服务 Provider 模块
pub mod queue; // 任务队列模块
pub mod rasterizer; // 字形模板光栅化模块
pub mod utils; // 工具和错误处理模块

pub use credentials::{CredentialStore, InMemoryCredentialStore};
pub use font::{builtin_fonts, FontDescriptor, FontRegistry};
pub use provider::{AspectRatio, GeminiClient, GenerationBackend, GenerationRequest};
pub use queue::{GeneratedItem, GenerationQueue, StyleTransferParameters, TaskStatus};
pub use rasterizer::GlyphRasterizer;
