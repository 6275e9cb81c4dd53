use crate::delay::{DEFAULT_MAX_MICROS, DEFAULT_MIN_MICROS};
use bon::Builder;
use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Test observer";

pub const DEFAULT_STAGES: [&str; 5] = [
    "request to cache",
    "cache expired",
    "request to pgsql",
    "set values to cache",
    "send to rmq results",
];

/// 处理器日志标签
///
/// - `EventName`：处理器拿到事件名，输出 `[on_startup] ...`；
/// - `Static`：处理器不关心事件，输出固定的 `[lifecycle] ...`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    #[default]
    EventName,
    Static,
}

/// 演示场景配置
///
/// 默认值即原始演示程序的固定参数；`seed` 为空时以当前时间播种。
#[derive(Builder, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    #[builder(into, default = DEFAULT_TITLE.to_string())]
    title: String,
    #[builder(default = DEFAULT_STAGES.iter().map(|s| s.to_string()).collect())]
    stages: Vec<String>,
    #[builder(default = DEFAULT_MIN_MICROS)]
    delay_min_micros: u64,
    #[builder(default = DEFAULT_MAX_MICROS)]
    delay_max_micros: u64,
    #[builder(default)]
    label: LabelMode,
    seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScenarioConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn delay_min_micros(&self) -> u64 {
        self.delay_min_micros
    }

    pub fn delay_max_micros(&self) -> u64 {
        self.delay_max_micros
    }

    pub fn label(&self) -> LabelMode {
        self.label
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scenario() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.title(), "Test observer");
        assert_eq!(cfg.stages(), DEFAULT_STAGES);
        assert_eq!(cfg.delay_min_micros(), 600_000);
        assert_eq!(cfg.delay_max_micros(), 1_200_000);
        assert_eq!(cfg.label(), LabelMode::EventName);
        assert_eq!(cfg.seed(), None);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: ScenarioConfig =
            serde_json::from_str(r#"{"title":"billing","label":"static","seed":9}"#).unwrap();
        assert_eq!(cfg.title(), "billing");
        assert_eq!(cfg.label(), LabelMode::Static);
        assert_eq!(cfg.seed(), Some(9));
        assert_eq!(cfg.stages().len(), 5);
        assert_eq!(cfg.delay_max_micros(), DEFAULT_MAX_MICROS);
    }
}
