//! 生命周期观察者领域层（observer-domain）
//!
//! 提供观察者模式的最小构件：
//! - 生命周期事件（`eventing::Event`）：具名、带分类，并按注册顺序保存订阅者；
//! - 事件处理器（`eventing::EventHandler`）：订阅事件并在每次发射时被调用一次；
//! - 事件上下文与发射报告（`EventContext` / `EmitReport`）；
//! - 统一错误类型（`error::DomainError`）。
//!
//! 本 crate 不关心事件由谁拥有、何时发射，这些由应用层（observer-application）编排。
//!
//! 典型用法：
//! 1. 通过 `Event::new` 创建事件；
//! 2. 使用 `subscribe` 追加处理器（可重复注册同一处理器）；
//! 3. 调用 `emit` 按注册顺序依次调用处理器；
//! 4. 用毕调用 `release` 释放订阅者。
//!
pub mod error;
pub mod eventing;
