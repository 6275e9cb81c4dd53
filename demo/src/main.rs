use observer_application::{ScenarioConfig, ScenarioRunner};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_level(false),
        )
        .init();

    let runner = ScenarioRunner::new(ScenarioConfig::default())?;
    let report = runner.run().await?;
    debug!(
        startup = report.startup().invoked().len(),
        stages = report.stages().len(),
        shutdown = report.shutdown().invoked().len(),
        "scenario finished"
    );
    Ok(())
}
