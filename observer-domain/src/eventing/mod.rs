//! 事件子系统（eventing）
//!
//! 同步、顺序的观察者实现：
//! - `Event`：具名的广播点，按注册顺序保存订阅者；
//! - `EventHandler`：订阅者协议，`FnHandler` 为闭包适配器；
//! - `EventContext`：发射时传给处理器的事件信息；
//! - `EmitReport`：一次发射实际调用的处理器清单。
//!
//! 发射过程逐个等待处理器完成，不存在并发调用。
//!
pub mod context;
pub mod event;
pub mod handler;

pub use context::{EventContext, EventKind};
pub use event::{EmitReport, Event};
pub use handler::{EventHandler, FnHandler};
