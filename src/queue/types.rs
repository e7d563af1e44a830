//! 任务队列数据类型

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::types::AspectRatio;

/// 一次生成的完整参数，任务创建后不再变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTransferParameters {
    /// 风格参考图（data URL）
    pub reference_image: String,
    /// 字形模板图（data URL）
    pub font_template: String,
    /// 目标文字
    pub target_text: String,
    /// 超高清档位开关
    pub is_high_quality: bool,
    /// 画布比例
    pub selected_ratio: AspectRatio,
}

impl StyleTransferParameters {
    /// 智能比例模式下构造提交参数
    ///
    /// 换行折叠为空格，画布比例按折叠后的文字推导；
    /// 保证送往 Provider 的文字与单行字形模板一致。
    pub fn intelligent(
        reference_image: String,
        font_template: String,
        target_text: &str,
        is_high_quality: bool,
    ) -> Self {
        let target_text = target_text.replace('\n', " ");
        let selected_ratio = AspectRatio::intelligent_for(&target_text);
        Self {
            reference_image,
            font_template,
            target_text,
            is_high_quality,
            selected_ratio,
        }
    }
}

/// 任务生命周期状态
///
/// 创建即 generating，Provider 调用结算后恰好一次转换到
/// success 或 error，此后不再变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Generating,
    Success,
    Error,
}

/// 生成任务记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    /// 任务集合内唯一的不透明 id
    pub id: String,
    #[serde(flatten)]
    pub parameters: StyleTransferParameters,
    /// 结果图像（data URL），仅 success 状态存在
    pub image_url: Option<String>,
    pub status: TaskStatus,
    /// 创建时间（Unix 毫秒）
    pub timestamp: i64,
}

impl GeneratedItem {
    /// 以新 id 创建 generating 状态的任务
    pub fn new(parameters: StyleTransferParameters) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parameters,
            image_url: None,
            status: TaskStatus::Generating,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parameters() -> StyleTransferParameters {
        StyleTransferParameters {
            reference_image: "data:image/png;base64,aW1nMQ==".to_string(),
            font_template: "data:image/png;base64,Z2x5cGgx".to_string(),
            target_text: "Hi".to_string(),
            is_high_quality: false,
            selected_ratio: AspectRatio::Square,
        }
    }

    #[test]
    fn test_new_task_starts_generating() {
        let task = GeneratedItem::new(sample_parameters());
        assert_eq!(task.status, TaskStatus::Generating);
        assert!(task.image_url.is_none());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = GeneratedItem::new(sample_parameters());
        let b = GeneratedItem::new(sample_parameters());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_intelligent_parameters_collapse_newlines() {
        let parameters = StyleTransferParameters::intelligent(
            "data:image/png;base64,aW1nMQ==".to_string(),
            "data:image/png;base64,Z2x5cGgx".to_string(),
            "你好\n世界",
            false,
        );
        assert_eq!(parameters.target_text, "你好 世界");
        assert!(!parameters.target_text.contains('\n'));
        // 比例按折叠后的文字推导
        assert_eq!(parameters.selected_ratio, AspectRatio::SixteenNine);
    }

    #[test]
    fn test_intelligent_ratio_derived_from_text() {
        let short = StyleTransferParameters::intelligent(
            "ref".to_string(),
            "tpl".to_string(),
            "你好",
            false,
        );
        assert_eq!(short.selected_ratio, AspectRatio::Square);

        let medium = StyleTransferParameters::intelligent(
            "ref".to_string(),
            "tpl".to_string(),
            "四个字呀",
            false,
        );
        assert_eq!(medium.selected_ratio, AspectRatio::FourThree);
    }

    #[test]
    fn test_item_serializes_flattened_camel_case() {
        let task = GeneratedItem::new(sample_parameters());
        let json = serde_json::to_value(&task).unwrap();
        // 参数平铺在任务记录上，与前端数据结构一致
        assert_eq!(json["targetText"], "Hi");
        assert_eq!(json["referenceImage"], "data:image/png;base64,aW1nMQ==");
        assert_eq!(json["status"], "generating");
        assert_eq!(json["selectedRatio"], "1:1");
    }
}
