//! 应用生命周期（Application）
//!
//! 应用独占两个生命周期事件（startup / shutdown）与当前状态：
//! - `start`：置为 Started 后发射 startup；不校验当前状态，重复调用会再次发射；
//! - `stop`：先发射 shutdown（此时状态仍为 Started），再置为 Stopped 并释放两个事件。
//!
//! `stop` 是终态：事件释放后不能再 `start`、`stop` 或订阅，均返回 `AlreadyShutdown`。
//!
use crate::error::{AppError, AppResult};
use observer_domain::eventing::{EmitReport, Event, EventHandler, EventKind};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

pub const STARTUP_EVENT: &str = "startup";
pub const SHUTDOWN_EVENT: &str = "shutdown";

/// 应用生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    Stopped,
    Started,
}

#[derive(Debug)]
pub struct Application {
    title: String,
    state: AppState,
    on_startup: Event,
    on_shutdown: Event,
}

impl Application {
    pub fn new(title: impl Into<String>) -> Self {
        let app = Self {
            title: title.into(),
            state: AppState::Stopped,
            on_startup: Event::new(STARTUP_EVENT, EventKind::Startup),
            on_shutdown: Event::new(SHUTDOWN_EVENT, EventKind::Shutdown),
        };
        info!("created app {}", app.title);
        app
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn startup_event(&self) -> &Event {
        &self.on_startup
    }

    pub fn shutdown_event(&self) -> &Event {
        &self.on_shutdown
    }

    /// 是否已经执行过 `stop`
    pub fn is_shut_down(&self) -> bool {
        self.on_shutdown.is_released()
    }

    pub fn on_startup(&mut self, handler: Arc<dyn EventHandler>) -> AppResult<()> {
        self.ensure_running()?;
        self.on_startup.subscribe(handler)?;
        Ok(())
    }

    pub fn on_shutdown(&mut self, handler: Arc<dyn EventHandler>) -> AppResult<()> {
        self.ensure_running()?;
        self.on_shutdown.subscribe(handler)?;
        Ok(())
    }

    pub async fn start(&mut self) -> AppResult<EmitReport> {
        self.ensure_running()?;
        info!("call start_app(title=\"{}\")", self.title);
        self.state = AppState::Started;
        let report = self.on_startup.emit().await?;
        Ok(report)
    }

    pub async fn stop(&mut self) -> AppResult<EmitReport> {
        self.ensure_running()?;
        info!("call shutdown_app(title=\"{}\")", self.title);
        let report = self.on_shutdown.emit().await?;
        self.state = AppState::Stopped;
        self.on_startup.release()?;
        self.on_shutdown.release()?;
        Ok(report)
    }

    fn ensure_running(&self) -> AppResult<()> {
        if self.is_shut_down() {
            return Err(AppError::AlreadyShutdown {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}
