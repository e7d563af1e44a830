//! 字体目录与注册模块
//!
//! 外部协作方提供内置字体标识或用户上传的字体二进制，
//! 光栅化器只消费解析后的 family 引用。

pub mod catalog;
pub mod registry;

pub use catalog::{builtin_fonts, FontDescriptor};
pub use registry::FontRegistry;
