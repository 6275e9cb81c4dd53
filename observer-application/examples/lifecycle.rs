use observer_application::delay::NoDelay;
use observer_application::registry::connect_lifecycle_handlers;
use observer_application::{Application, LabelMode};
use observer_domain::eventing::{EventContext, FnHandler};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = Application::new("inventory");
    connect_lifecycle_handlers(&mut app, Arc::new(NoDelay), LabelMode::Static)?;

    // 自定义订阅者：忽略事件名也可以
    app.on_startup(Arc::new(FnHandler::new("print_banner", |_: &EventContext| {
        println!("inventory service is up");
        Ok(())
    })))?;
    app.on_shutdown(Arc::new(FnHandler::new("flush", |ev: &EventContext| {
        println!("flush buffers on {} at {}", ev.name(), ev.emitted_at());
        Ok(())
    })))?;

    let started = app.start().await?;
    println!("startup invoked: {:?}", started.invoked());

    let stopped = app.stop().await?;
    println!("shutdown invoked: {:?}", stopped.invoked());

    // stop 之后应用不可再启动
    if let Err(e) = app.start().await {
        println!("restart rejected: {e}");
    }
    Ok(())
}
