//! 生命周期处理器注册
//!
//! 把一组固定的处理器挂到应用的两个事件上：
//! - startup：connect_to_database → connect_rmq → warmup_cache → notify_admins
//! - shutdown：close_database → notify_admins
//!
//! `notify_admins` 是同一个实例，同时订阅两个事件。
//! 这些处理器只输出日志并停顿，不连接任何真实的数据库、缓存或队列。
//!
use crate::application::Application;
use crate::config::LabelMode;
use crate::delay::Delay;
use crate::error::AppResult;
use async_trait::async_trait;
use observer_domain::eventing::{EventContext, EventHandler};
use std::sync::Arc;
use tracing::info;

pub const CONNECT_TO_DATABASE: &str = "connect_to_database";
pub const CONNECT_RMQ: &str = "connect_rmq";
pub const WARMUP_CACHE: &str = "warmup_cache";
pub const CLOSE_DATABASE: &str = "close_database";
pub const NOTIFY_ADMINS: &str = "notify_admins";

const STATIC_LABEL: &str = "lifecycle";

/// 演示用处理器：输出 `[<label>] <action>` 后停顿一次
pub struct LifecycleHandler {
    action: &'static str,
    label: LabelMode,
    delay: Arc<dyn Delay>,
}

impl LifecycleHandler {
    pub fn new(action: &'static str, label: LabelMode, delay: Arc<dyn Delay>) -> Self {
        Self {
            action,
            label,
            delay,
        }
    }

    /// 该处理器在给定事件上输出的日志行
    pub fn message(&self, event: &EventContext) -> String {
        match self.label {
            LabelMode::EventName => format!("[on_{}] {}", event.name(), self.action),
            LabelMode::Static => format!("[{STATIC_LABEL}] {}", self.action),
        }
    }
}

#[async_trait]
impl EventHandler for LifecycleHandler {
    fn handler_name(&self) -> &str {
        self.action
    }

    async fn handle(&self, event: &EventContext) -> anyhow::Result<()> {
        info!("{}", self.message(event));
        self.delay.pause().await;
        Ok(())
    }
}

/// 按固定顺序把生命周期处理器订阅到应用事件
pub fn connect_lifecycle_handlers(
    app: &mut Application,
    delay: Arc<dyn Delay>,
    label: LabelMode,
) -> AppResult<()> {
    let handler = |action: &'static str| -> Arc<dyn EventHandler> {
        Arc::new(LifecycleHandler::new(action, label, delay.clone()))
    };
    let notify_admins = handler(NOTIFY_ADMINS);

    app.on_startup(handler(CONNECT_TO_DATABASE))?;
    app.on_startup(handler(CONNECT_RMQ))?;
    app.on_startup(handler(WARMUP_CACHE))?;
    app.on_startup(notify_admins.clone())?;

    app.on_shutdown(handler(CLOSE_DATABASE))?;
    app.on_shutdown(notify_admins)?;
    Ok(())
}
