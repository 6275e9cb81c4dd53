//! 演示场景（ScenarioRunner）
//!
//! 只运行一次：创建应用 → 注册处理器 → start → 逐个执行演示阶段（日志 + 停顿）→ stop。
//!
use crate::application::Application;
use crate::config::ScenarioConfig;
use crate::delay::{Delay, RandomDelay};
use crate::error::AppResult;
use crate::registry::connect_lifecycle_handlers;
use observer_domain::eventing::EmitReport;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// 一次场景运行的结果
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    startup: EmitReport,
    stages: Vec<String>,
    shutdown: EmitReport,
}

impl ScenarioReport {
    pub fn startup(&self) -> &EmitReport {
        &self.startup
    }

    /// 已执行的阶段，按执行顺序
    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn shutdown(&self) -> &EmitReport {
        &self.shutdown
    }
}

pub struct ScenarioRunner {
    config: ScenarioConfig,
    delay: Arc<dyn Delay>,
}

impl ScenarioRunner {
    /// 按配置构造随机延迟；未指定种子时以当前时间播种
    pub fn new(config: ScenarioConfig) -> AppResult<Self> {
        let (min, max) = (config.delay_min_micros(), config.delay_max_micros());
        let delay = match config.seed() {
            Some(seed) => RandomDelay::with_seed(seed, min, max)?,
            None => RandomDelay::from_clock(min, max)?,
        };
        Ok(Self::with_delay(config, Arc::new(delay)))
    }

    pub fn with_delay(config: ScenarioConfig, delay: Arc<dyn Delay>) -> Self {
        Self { config, delay }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub async fn run(&self) -> AppResult<ScenarioReport> {
        let mut app = Application::new(self.config.title());
        connect_lifecycle_handlers(&mut app, self.delay.clone(), self.config.label())?;

        let startup = app.start().await?;
        let stages = self.emulate_app_process().await;
        let shutdown = app.stop().await?;

        Ok(ScenarioReport {
            startup,
            stages,
            shutdown,
        })
    }

    async fn emulate_app_process(&self) -> Vec<String> {
        let mut done = Vec::with_capacity(self.config.stages().len());
        for stage in self.config.stages() {
            info!("\t*{stage}*");
            self.delay.pause().await;
            done.push(stage.clone());
        }
        done
    }
}
