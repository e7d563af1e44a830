//! data URL 编解码
//!
//! 前端传入的图像统一为 `data:<mime>;base64,<payload>` 形式，
//! Provider 请求需要拆出声明的 MIME 类型与原始 base64 负载。

use base64::{engine::general_purpose, Engine as _};

/// 从 data URL 中取出声明的 MIME 类型，缺失时回退为 image/png
pub fn mime_type(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(';'))
        .map(|(mime, _)| mime)
        .filter(|mime| !mime.is_empty())
        .unwrap_or("image/png")
}

/// 取出 base64 负载；没有 data: 头时原样返回，与前端行为一致
pub fn payload(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or(data_url)
}

/// 将 PNG 字节编码为 data URL
pub fn encode_png(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

/// 解码 data URL 负载为原始字节
pub fn decode(data_url: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(payload(data_url))
}
