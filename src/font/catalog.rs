//! 内置字体目录

use serde::{Deserialize, Serialize};

/// 字体描述符：内置条目或用户注册的字体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    /// 展示名称（字体选择器中显示）
    pub display_name: String,
    /// 渲染环境中解析用的 family 引用
    pub family: String,
    /// 内置字体的样式表地址，用户上传字体为空
    pub source_url: Option<String>,
}

impl FontDescriptor {
    fn builtin(display_name: &str, family: &str, url: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            family: family.to_string(),
            source_url: Some(url.to_string()),
        }
    }
}

/// 内置字体目录，与前端字体选择器一致
pub fn builtin_fonts() -> Vec<FontDescriptor> {
    vec![
        FontDescriptor::builtin(
            "思源黑体",
            "Source Han Sans CN",
            "https://fonts.googleapis.com/css2?family=Noto+Sans+SC:wght@700&display=swap",
        ),
        FontDescriptor::builtin(
            "思源宋体",
            "Source Han Serif CN",
            "https://fonts.googleapis.com/css2?family=Noto+Serif+SC:wght@700&display=swap",
        ),
        FontDescriptor::builtin(
            "站酷黄油",
            "ZCOOL QingKe HuangYou",
            "https://fonts.googleapis.com/css2?family=ZCOOL+QingKe+HuangYou&display=swap",
        ),
        FontDescriptor::builtin(
            "站酷小薇",
            "ZCOOL XiaoWei",
            "https://fonts.googleapis.com/css2?family=ZCOOL+XiaoWei&display=swap",
        ),
        FontDescriptor::builtin(
            "站酷快乐",
            "ZCOOL KuaiLe",
            "https://fonts.googleapis.com/css2?family=ZCOOL+KuaiLe&display=swap",
        ),
        FontDescriptor::builtin(
            "马善政毛笔",
            "Ma Shan Zheng",
            "https://fonts.googleapis.com/css2?family=Ma+Shan+Zheng&display=swap",
        ),
        FontDescriptor::builtin(
            "指茫星",
            "Zhi Mang Xing",
            "https://fonts.googleapis.com/css2?family=Zhi+Mang+Xing&display=swap",
        ),
        FontDescriptor::builtin(
            "刘建毛草",
            "Liu Jian Mao Cao",
            "https://fonts.googleapis.com/css2?family=Liu+Jian+Mao+Cao&display=swap",
        ),
        FontDescriptor::builtin(
            "龙仓",
            "Long Cang",
            "https://fonts.googleapis.com/css2?family=Long+Cang&display=swap",
        ),
        FontDescriptor::builtin(
            "楷体",
            "Noto Serif SC",
            "https://fonts.googleapis.com/css2?family=Noto+Serif+SC:wght@400&display=swap",
        ),
    ]
}
