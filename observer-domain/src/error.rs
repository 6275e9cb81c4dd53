//! 领域层统一错误定义
//!
//! 只覆盖真正可能失败的边界：已释放事件的再次使用，以及处理器执行失败。
//!
use thiserror::Error;

/// 统一错误类型（领域层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("event released: event={event}")]
    EventReleased { event: String },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn released(event: impl Into<String>) -> Self {
        DomainError::EventReleased {
            event: event.into(),
        }
    }

    /// 将处理器返回的 `anyhow::Error` 转换为领域错误，保留完整的错误链
    pub fn handler(handler: impl Into<String>, err: &anyhow::Error) -> Self {
        DomainError::EventHandler {
            handler: handler.into(),
            reason: format!("{err:#}"),
        }
    }
}
