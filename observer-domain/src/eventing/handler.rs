//! 事件处理器（EventHandler）
//!
//! 定义订阅生命周期事件的处理逻辑与元信息（名称）。
//! 处理器只拿到事件上下文的只读引用，可以忽略它（即“无参回调”的写法）。
//!
use crate::eventing::EventContext;
use async_trait::async_trait;
use std::fmt::{Debug, Formatter};

/// 事件处理器：每次事件发射时被调用一次
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于日志与发射报告）
    fn handler_name(&self) -> &str;
    /// 处理事件
    async fn handle(&self, event: &EventContext) -> anyhow::Result<()>;
}

/// 闭包适配器：把同步闭包包装为 `EventHandler`
pub struct FnHandler<F> {
    name: String,
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&EventContext) -> anyhow::Result<()> + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Debug for FnHandler<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&EventContext) -> anyhow::Result<()> + Send + Sync + 'static,
{
    fn handler_name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, event: &EventContext) -> anyhow::Result<()> {
        (self.f)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventing::EventKind;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn fn_handler_receives_event_name() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler = FnHandler::new("record", move |ev: &EventContext| {
            sink.lock().unwrap().push(ev.name().to_string());
            Ok(())
        });
        assert_eq!(handler.handler_name(), "record");

        let ctx = EventContext::builder()
            .name("shutdown")
            .kind(EventKind::Shutdown)
            .build();
        handler.handle(&ctx).await.unwrap();
        handler.handle(&ctx).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["shutdown", "shutdown"]);
    }

    #[tokio::test]
    async fn fn_handler_propagates_error() {
        let handler = FnHandler::new("broken", |_: &EventContext| anyhow::bail!("boom"));
        let ctx = EventContext::builder()
            .name("startup")
            .kind(EventKind::Startup)
            .build();
        let err = handler.handle(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
