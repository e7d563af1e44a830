//! 透明化抠图模块
//!
//! 生成结果统一渲染在纯黑背景上，按像素亮度推导 Alpha 并做反预乘，
//! 得到可独立使用的透明背景 PNG。这是有损的启发式抠图，
//! 不保证幂等，但对相同输入必然产生相同输出。

use std::io::Cursor;

use anyhow::Context;
use image::{DynamicImage, ImageFormat};

use crate::utils::data_url;
use crate::utils::error::AppResult;

/// Alpha 增益系数：把较暗区域的亮度信号提升到完全不透明
const ALPHA_SENSITIVITY: f32 = 2.5;

/// 默认下载文件名
pub const DEFAULT_FILENAME: &str = "transparent_result.png";

/// 可下载的透明 PNG 工件
#[derive(Debug, Clone)]
pub struct TransparentArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// 对黑底结果图像做亮度抠图，返回透明 PNG 字节
///
/// 逐像素：baseAlpha = max(r, g, b)，alpha = min(255, baseAlpha × 2.5)；
/// alpha > 0 时各颜色通道乘以 255 / alpha 反预乘，钳制到 255。
pub fn extract_transparency(png: &[u8]) -> AppResult<Vec<u8>> {
    let mut image = image::load_from_memory(png)
        .context("解码结果图像失败")?
        .to_rgba8();

    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let base_alpha = r.max(g).max(b);
        let alpha = (base_alpha as f32 * ALPHA_SENSITIVITY).min(255.0);
        pixel.0[3] = alpha as u8;
        if alpha > 0.0 {
            let factor = 255.0 / alpha;
            pixel.0[0] = (r as f32 * factor).min(255.0) as u8;
            pixel.0[1] = (g as f32 * factor).min(255.0) as u8;
            pixel.0[2] = (b as f32 * factor).min(255.0) as u8;
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("编码透明 PNG 失败")?;
    Ok(bytes)
}

/// 从结果图像的 data URL 生成可下载工件
///
/// 文件名为空或未指定时使用默认名。
pub fn make_artifact(image_url: &str, filename: Option<String>) -> AppResult<TransparentArtifact> {
    let source = data_url::decode(image_url).context("解码结果图像 data URL 失败")?;
    let bytes = extract_transparency(&source)?;
    Ok(TransparentArtifact {
        filename: filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        bytes,
    })
}
