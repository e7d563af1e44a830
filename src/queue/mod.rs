//! 任务队列模块
//!
//! 以显式的任务集合和按动作划分的转换函数（提交 / 重新生成 /
//! 删除 / 结算）管理生成任务的生命周期，独立于任何渲染层。

pub mod error;
pub mod service;
pub mod types;

pub use error::SubmitError;
pub use service::GenerationQueue;
pub use types::{GeneratedItem, StyleTransferParameters, TaskStatus};
