//! 生命周期事件（Event）
//!
//! 一个具名、带分类的广播点：
//! - `subscribe` 仅追加，不做去重，同一处理器注册几次就会被调用几次；
//! - `emit` 先输出发射日志，再按注册顺序逐个等待处理器完成；
//! - `release` 释放订阅者，此后该事件不可再订阅或发射。
//!
use crate::error::{DomainError, DomainResult as Result};
use crate::eventing::{EventContext, EventHandler, EventKind};
use serde::Serialize;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::{debug, info};

pub struct Event {
    name: String,
    kind: EventKind,
    subscribers: Vec<Arc<dyn EventHandler>>,
    released: bool,
}

/// 发射报告：记录一次发射按顺序实际调用的处理器
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    event: String,
    kind: EventKind,
    invoked: Vec<String>,
}

impl EmitReport {
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// 按调用顺序排列的处理器名称
    pub fn invoked(&self) -> &[String] {
        &self.invoked
    }
}

impl Event {
    pub fn new(name: impl Into<String>, kind: EventKind) -> Self {
        Self {
            name: name.into(),
            kind,
            subscribers: Vec::new(),
            released: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// 订阅者名称，按注册顺序
    pub fn handler_names(&self) -> Vec<&str> {
        self.subscribers.iter().map(|h| h.handler_name()).collect()
    }

    /// 追加订阅者
    pub fn subscribe(&mut self, handler: Arc<dyn EventHandler>) -> Result<()> {
        self.ensure_live()?;
        debug!(
            event = %self.name,
            handler = handler.handler_name(),
            position = self.subscribers.len(),
            "subscribe"
        );
        self.subscribers.push(handler);
        Ok(())
    }

    /// 发射事件：按注册顺序调用每个订阅者一次
    ///
    /// 任一处理器失败即中止本次发射，后续处理器不再调用。
    pub async fn emit(&self) -> Result<EmitReport> {
        self.ensure_live()?;
        info!("emit AppEvent(name=\"{}\")", self.name);

        let ctx = EventContext::builder()
            .name(self.name.as_str())
            .kind(self.kind)
            .build();

        let mut invoked = Vec::with_capacity(self.subscribers.len());
        for handler in &self.subscribers {
            let name = handler.handler_name();
            handler
                .handle(&ctx)
                .await
                .map_err(|e| DomainError::handler(name, &e))?;
            invoked.push(name.to_string());
        }

        Ok(EmitReport {
            event: self.name.clone(),
            kind: self.kind,
            invoked,
        })
    }

    /// 释放订阅者存储，只能调用一次
    pub fn release(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.subscribers = Vec::new();
        self.released = true;
        debug!(event = %self.name, "released");
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.released {
            return Err(DomainError::released(&self.name));
        }
        Ok(())
    }
}

impl Debug for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("subscribers", &self.handler_names())
            .field("released", &self.released)
            .finish()
    }
}
