//! 字体注册表
//!
//! 将字体二进制注册到渲染环境中，首次光栅化前必须完成注册。

use std::collections::HashMap;
use std::sync::Arc;

use ab_glyph::FontVec;
use anyhow::Context;
use parking_lot::RwLock;
use tracing::info;

use crate::font::catalog::FontDescriptor;
use crate::utils::error::AppResult;

/// 字体注册表：family 引用 → 已解析的字体
#[derive(Default)]
pub struct FontRegistry {
    fonts: RwLock<HashMap<String, Arc<FontVec>>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册字体二进制，此后可按 family 解析
    ///
    /// 光栅化按二进制自带的字重 / 样式渲染，没有软件加粗；
    /// 需要粗体模板时注册对应的粗体字形文件。
    pub fn register(&self, family: impl Into<String>, bytes: Vec<u8>) -> AppResult<()> {
        let family = family.into();
        let font = FontVec::try_from_vec(bytes)
            .with_context(|| format!("解析字体文件失败: {}", family))?;
        self.fonts.write().insert(family.clone(), Arc::new(font));
        info!("字体已注册: {}", family);
        Ok(())
    }

    /// 注册用户上传的字体，生成唯一的 family 名
    pub fn register_uploaded(&self, bytes: Vec<u8>) -> AppResult<FontDescriptor> {
        let family = format!("CustomFont-{}", chrono::Utc::now().timestamp_millis());
        self.register(family.clone(), bytes)?;
        Ok(FontDescriptor {
            display_name: "自定义".to_string(),
            family,
            source_url: None,
        })
    }

    /// 按 family 引用解析字体
    pub fn resolve(&self, family: &str) -> Option<Arc<FontVec>> {
        self.fonts.read().get(family).cloned()
    }

    /// 已注册的 family 列表
    pub fn families(&self) -> Vec<String> {
        self.fonts.read().keys().cloned().collect()
    }
}
