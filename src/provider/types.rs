//! Provider 请求类型与画布比例映射

use serde::{Deserialize, Serialize};

/// 公开的画布比例枚举，与前端比例滑杆一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    FourThree,
    #[serde(rename = "3:2")]
    ThreeTwo,
    #[serde(rename = "16:9")]
    SixteenNine,
    #[serde(rename = "2:1")]
    TwoOne,
}

impl AspectRatio {
    /// 全部可选比例
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::FourThree,
        AspectRatio::ThreeTwo,
        AspectRatio::SixteenNine,
        AspectRatio::TwoOne,
    ];

    /// 展示标签
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::FourThree => "4:3",
            AspectRatio::ThreeTwo => "3:2",
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::TwoOne => "2:1",
        }
    }

    /// 映射到 Provider 支持的比例子集：3:2 → 4:3，2:1 → 16:9
    pub fn api_ratio(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::FourThree | AspectRatio::ThreeTwo => "4:3",
            AspectRatio::SixteenNine | AspectRatio::TwoOne => "16:9",
        }
    }

    /// 从标签解析，未知值回退 1:1
    pub fn parse(label: &str) -> AspectRatio {
        match label {
            "4:3" => AspectRatio::FourThree,
            "3:2" => AspectRatio::ThreeTwo,
            "16:9" => AspectRatio::SixteenNine,
            "2:1" => AspectRatio::TwoOne,
            _ => AspectRatio::Square,
        }
    }

    /// 智能比例：按去除首尾空白后的字符数推导
    pub fn intelligent_for(text: &str) -> AspectRatio {
        let len = text.trim().chars().count();
        if len <= 2 {
            AspectRatio::Square
        } else if len <= 4 {
            AspectRatio::FourThree
        } else {
            AspectRatio::SixteenNine
        }
    }
}

/// 一次风格迁移生成请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// 风格参考图（data URL）
    pub style_reference: String,
    /// 字形模板图（data URL）
    pub font_template: String,
    /// 目标文字
    pub target_text: String,
    /// 超高清档位开关
    pub high_quality: bool,
    /// 画布比例
    pub aspect_ratio: AspectRatio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_ratio_mapping_is_total() {
        let expected = [
            (AspectRatio::Square, "1:1"),
            (AspectRatio::FourThree, "4:3"),
            (AspectRatio::ThreeTwo, "4:3"),
            (AspectRatio::SixteenNine, "16:9"),
            (AspectRatio::TwoOne, "16:9"),
        ];
        for (ratio, api) in expected {
            assert_eq!(ratio.api_ratio(), api);
        }
    }

    #[test]
    fn test_parse_unknown_falls_back_to_square() {
        assert_eq!(AspectRatio::parse("21:9"), AspectRatio::Square);
        assert_eq!(AspectRatio::parse(""), AspectRatio::Square);
        assert_eq!(AspectRatio::parse("16:9"), AspectRatio::SixteenNine);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&AspectRatio::ThreeTwo).unwrap();
        assert_eq!(json, "\"3:2\"");
        let back: AspectRatio = serde_json::from_str("\"2:1\"").unwrap();
        assert_eq!(back, AspectRatio::TwoOne);
    }

    #[test]
    fn test_intelligent_ratio_thresholds() {
        assert_eq!(AspectRatio::intelligent_for("你好"), AspectRatio::Square);
        assert_eq!(AspectRatio::intelligent_for(" 你好 "), AspectRatio::Square);
        assert_eq!(AspectRatio::intelligent_for("四个字呀"), AspectRatio::FourThree);
        assert_eq!(
            AspectRatio::intelligent_for("超过四个字了"),
            AspectRatio::SixteenNine
        );
    }
}
