use async_trait::async_trait;

use crate::provider::error::ProviderResult;
use crate::provider::types::GenerationRequest;

/// 图像生成 Provider 统一接口
///
/// 任务队列只依赖该接口，测试可注入模拟实现。
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// 执行一次完整的生成调用（含内部重试），返回结果图像的 data URL
    async fn generate(&self, request: GenerationRequest, api_key: &str) -> ProviderResult<String>;
}
