//! 指数退避重试
//!
//! 重试策略是纯异步函数，由最大尝试次数、基础延迟和瞬时错误
//! 判定函数参数化；延迟通过注入的 Delay 抽象执行，
//! 测试无需真实等待即可断言退避序列。

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

/// 最大尝试次数
pub const MAX_ATTEMPTS: u32 = 3;
/// 首次退避延迟，此后每次翻倍
pub const BASE_DELAY: Duration = Duration::from_millis(2000);

/// 可注入的延迟抽象
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的默认实现
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 重试整个请求周期
///
/// 仅对判定为瞬时的错误退避重试，其余错误立即传播；
/// 重试耗尽后传播最后一次错误。
pub async fn with_retry<T, E, F, Fut, P>(
    max_attempts: u32,
    base_delay: Duration,
    delay: &dyn Delay,
    is_transient: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt >= max_attempts || !is_transient(&err) {
                    return Err(err);
                }
                let wait = base_delay * 2u32.pow(attempt - 1);
                warn!(
                    "生成服务繁忙或过载（第 {}/{} 次尝试），{}ms 后重试: {}",
                    attempt,
                    max_attempts,
                    wait.as_millis(),
                    err
                );
                delay.sleep(wait).await;
            }
        }
    }
}
