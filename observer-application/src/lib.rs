pub mod application;
pub mod config;
pub mod delay;
pub mod error;
pub mod registry;
pub mod scenario;

pub use application::{AppState, Application};
pub use config::{LabelMode, ScenarioConfig};
pub use scenario::{ScenarioReport, ScenarioRunner};
