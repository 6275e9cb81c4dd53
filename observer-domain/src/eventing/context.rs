use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 生命周期事件分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Startup,
    Shutdown,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Startup => write!(f, "startup"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

/// 事件上下文：一次发射中传递给每个处理器的只读信息
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct EventContext {
    /// 事件名称（如 "startup"）
    #[builder(into)]
    name: String,
    /// 事件分类
    kind: EventKind,
    /// 发射时间
    #[builder(default = Utc::now())]
    emitted_at: DateTime<Utc>,
}

impl EventContext {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn emitted_at(&self) -> &DateTime<Utc> {
        &self.emitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(EventKind::Startup.to_string(), "startup");
        assert_eq!(EventKind::Shutdown.to_string(), "shutdown");
    }

    #[test]
    fn builder_fills_emitted_at() {
        let before = Utc::now();
        let ctx = EventContext::builder()
            .name("startup")
            .kind(EventKind::Startup)
            .build();
        assert_eq!(ctx.name(), "startup");
        assert_eq!(ctx.kind(), EventKind::Startup);
        assert!(*ctx.emitted_at() >= before);
    }
}
