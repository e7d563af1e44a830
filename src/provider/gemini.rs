//! Gemini 图像生成客户端
//!
//! 实现与 Gemini generateContent 接口的所有交互逻辑：
//! 两张内联图像（风格参考 + 字形模板）加一段指令文本，
//! generationConfig 携带映射后的比例与尺寸档位。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::provider::base::GenerationBackend;
use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::retry::{with_retry, Delay, TokioDelay, BASE_DELAY, MAX_ATTEMPTS};
use crate::provider::types::GenerationRequest;
use crate::utils::data_url;

/// 标准画质模型
const STANDARD_MODEL: &str = "gemini-2.5-flash-image";
/// 超高清画质模型
const HIGH_QUALITY_MODEL: &str = "gemini-3-pro-image-preview";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini Provider
pub struct GeminiClient {
    client: Client,
    api_url: String,
    delay: Box<dyn Delay>,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// 指定服务地址（测试或代理场景）
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            delay: Box::new(TokioDelay),
        }
    }

    /// 注入延迟实现，测试可消除真实退避等待
    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    fn model_for(high_quality: bool) -> &'static str {
        if high_quality {
            HIGH_QUALITY_MODEL
        } else {
            STANDARD_MODEL
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_url, model)
    }

    /// 生成指令文本：指明两张图像的角色、字形约束、风格来源、
    /// 禁止换行、纯黑背景与目标比例
    fn build_prompt(request: &GenerationRequest) -> String {
        format!(
            r#"Task: Typography Style Transfer with Font Constraint.
You are provided with two images:
1. STYLE_REFERENCE: This image contains artistic text. Analyze its material, texture, 3D depth, lighting, and color palette.
2. FONT_TEMPLATE: This image contains the text "{text}" in a specific font. It is white text on a black background.

Your Goal:
- Generate a NEW image of the text "{text}".
- MANDATORY: Use the EXACT font shape, curves, and character proportions provided in the FONT_TEMPLATE.
- APPLY the EXACT artistic style, material, and visual effects from the STYLE_REFERENCE to this font shape.
- CRITICAL: THE TEXT MUST BE IN A SINGLE HORIZONTAL LINE. DO NOT WRAP OR SPLIT THE TEXT INTO MULTIPLE LINES.
- The output must be centered on a SOLID, UNIFORM, PURE BLACK background (#000000).
- Maintain the {ratio} aspect ratio.
- Ensure the final result looks like a high-end graphic design asset."#,
            text = request.target_text,
            ratio = request.aspect_ratio.label(),
        )
    }

    fn build_body(request: &GenerationRequest) -> Value {
        let mut image_config = json!({
            "aspectRatio": request.aspect_ratio.api_ratio(),
        });
        // 尺寸档位仅超高清模型携带
        if request.high_quality {
            image_config["imageSize"] = json!("1K");
        }

        json!({
            "contents": [{
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": data_url::mime_type(&request.style_reference),
                            "data": data_url::payload(&request.style_reference),
                        }
                    },
                    {
                        "inlineData": {
                            "mimeType": data_url::mime_type(&request.font_template),
                            "data": data_url::payload(&request.font_template),
                        }
                    },
                    { "text": Self::build_prompt(request) }
                ]
            }],
            "generationConfig": {
                "imageConfig": image_config,
            }
        })
    }

    /// 在候选内容中提取第一个内联图像，封装为 data URL
    fn extract_image(response: &Value) -> ProviderResult<String> {
        if let Some(parts) = response["candidates"][0]["content"]["parts"].as_array() {
            for part in parts {
                if let Some(data) = part["inlineData"]["data"].as_str() {
                    return Ok(format!("data:image/png;base64,{}", data));
                }
            }
        }
        Err(ProviderError::NoImageInResponse)
    }

    fn api_error(status: u16, body: &str) -> ProviderError {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| body.to_string());
        ProviderError::Api { status, message }
    }

    async fn generate_once(
        &self,
        request: &GenerationRequest,
        api_key: &str,
    ) -> ProviderResult<String> {
        let model = Self::model_for(request.high_quality);
        let body = Self::build_body(request);

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::api_error(status.as_u16(), &text));
        }

        let response_json: Value = response.json().await?;
        Self::extract_image(&response_json)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: GenerationRequest, api_key: &str) -> ProviderResult<String> {
        if api_key.is_empty() {
            return Err(ProviderError::MissingCredential);
        }
        with_retry(
            MAX_ATTEMPTS,
            BASE_DELAY,
            self.delay.as_ref(),
            ProviderError::is_transient,
            || self.generate_once(&request, api_key),
        )
        .await
    }
}
