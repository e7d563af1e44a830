/*!
 * 错误处理模块
 *
 * 基于 anyhow 的统一错误处理系统。各领域模块（Provider、队列、光栅化）
 * 定义自己的 thiserror 错误类型，跨模块的胶水代码使用 AppResult，
 * 通过 context 提供丰富的错误信息。
 */

use anyhow::Result as AnyhowResult;

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;
