//! Metrics example server.
//!
//! - Greeting endpoint `/hello[/*path]`, instrumented with a request counter
//!   and a latency histogram
//! - Probes `/probe/ready`, `/probe/alive`
//! - Scrape endpoint `/metrics`

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webtest_core::error::Result;
use webtest_server::{app_state::AppState, config, host, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "webtest-server failed");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<()> {
    let hostname = host::resolve_hostname()?;
    let cfg = config::load()?;
    let listen = cfg.server.bind_addr();

    tracing::info!(%listen, %hostname, greeting = %cfg.server.greeting, "webtest-server starting");

    let state = AppState::new(cfg, hostname)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("webtest-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
