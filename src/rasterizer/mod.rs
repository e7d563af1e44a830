//! 字形模板光栅化模块
//!
//! 将目标文字渲染为 2048×512 黑底白字的剪影 PNG，
//! 作为 Provider 请求中约束字形轮廓的模板图。

pub mod layout;

use std::io::Cursor;
use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use thiserror::Error;
use tracing::debug;

use crate::font::FontRegistry;
use crate::utils::data_url;

pub type RasterizeResult<T> = Result<T, RasterizeError>;

/// 光栅化错误类型
#[derive(Debug, Error)]
pub enum RasterizeError {
    /// 文字内容为空时无需绘制，调用方必须拦截空模板
    #[error("文字内容为空，无法生成字形模板")]
    EmptyText,

    /// family 未注册到渲染环境
    #[error("未注册的字体: {family}")]
    FontNotFound { family: String },

    /// PNG 编码失败
    #[error("字形模板编码失败: {0}")]
    Encode(#[from] image::ImageError),
}

/// 字形模板光栅化器
///
/// 画布固定为 2048×512，每次渲染前整体填充黑色，可重复使用。
pub struct GlyphRasterizer {
    registry: Arc<FontRegistry>,
}

impl GlyphRasterizer {
    pub fn new(registry: Arc<FontRegistry>) -> Self {
        Self { registry }
    }

    /// 渲染字形模板，返回 data URL 形式的 PNG
    ///
    /// 单行模式下换行折叠为空格；字号从画布高度的 70% 起逐步缩减，
    /// 直到所有行宽不超过画布宽度的 90% 或到达 10px 下限。
    ///
    /// 渲染字重由注册的字体二进制决定，粗体模板需要注册粗体字形文件。
    pub fn rasterize(
        &self,
        text: &str,
        family: &str,
        single_line: bool,
    ) -> RasterizeResult<String> {
        if text.trim().is_empty() {
            return Err(RasterizeError::EmptyText);
        }
        let font = self
            .registry
            .resolve(family)
            .ok_or_else(|| RasterizeError::FontNotFound {
                family: family.to_string(),
            })?;

        let lines = layout::split_lines(text, single_line);
        let font_size =
            layout::fit_font_size(&lines, |line, size| measure_width(font.as_ref(), line, size));
        debug!("字形模板拟合完成: {} 行, 字号 {:.1}px", lines.len(), font_size);

        let mut canvas = RgbImage::from_pixel(
            layout::CANVAS_WIDTH,
            layout::CANVAS_HEIGHT,
            Rgb([0, 0, 0]),
        );
        for (line, center_y) in lines
            .iter()
            .zip(layout::line_centers(lines.len(), font_size))
        {
            draw_line_centered(&mut canvas, font.as_ref(), line, font_size, center_y);
        }

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(data_url::encode_png(&bytes))
    }
}

/// 行宽测量：字形推进量累加，含相邻字形的字距调整
fn measure_width(font: &FontVec, line: &str, font_size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(font_size));
    let mut width = 0.0;
    let mut previous = None;
    for ch in line.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev) = previous {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);
    }
    width
}

/// 在画布上绘制一行白色文字，水平居中，基线对齐行中心
fn draw_line_centered(
    canvas: &mut RgbImage,
    font: &FontVec,
    line: &str,
    font_size: f32,
    center_y: f32,
) {
    let scale = PxScale::from(font_size);
    let scaled = font.as_scaled(scale);
    let line_width = measure_width(font, line, font_size);
    let mut caret = (layout::CANVAS_WIDTH as f32 - line_width) / 2.0;
    // 基线 = 行中心 + (ascent + descent) / 2，对应 textBaseline=middle
    let baseline = center_y + (scaled.ascent() + scaled.descent()) / 2.0;

    let mut previous = None;
    for ch in line.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, baseline));
        if let Some(outline) = scaled.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            outline.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px < 0
                    || py < 0
                    || px >= layout::CANVAS_WIDTH as i32
                    || py >= layout::CANVAS_HEIGHT as i32
                {
                    return;
                }
                let value = (coverage * 255.0) as u8;
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                // 黑底白字，重叠处取覆盖率较大值
                let lum = pixel.0[0].max(value);
                *pixel = Rgb([lum, lum, lum]);
            });
        }
        caret += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);
    }
}
