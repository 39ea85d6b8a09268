//! Simquery HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use simquery::config::Config;
use simquery::embedding::{ClassifierConfig, DenseConfig};
use simquery::engine::{EngineConfig, ScoringEngine, StrategyConfig, StrategyKind};
use simquery::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
███████╗██╗███╗   ███╗ ██████╗ ██╗   ██╗███████╗██████╗ ██╗   ██╗
██╔════╝██║████╗ ████║██╔═══██╗██║   ██║██╔════╝██╔══██╗╚██╗ ██╔╝
███████╗██║██╔████╔██║██║   ██║██║   ██║█████╗  ██████╔╝ ╚████╔╝
╚════██║██║██║╚██╔╝██║██║▄▄ ██║██║   ██║██╔══╝  ██╔══██╗  ╚██╔╝
███████║██║██║ ╚═╝ ██║╚██████╔╝╚██████╔╝███████╗██║  ██║   ██║
╚══════╝╚═╝╚═╝     ╚═╝ ╚══▀▀═╝  ╚═════╝ ╚══════╝╚═╝  ╚═╝   ╚═╝

        ONE TRUTH. ONE SCORE.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        strategy = %config.strategy,
        ground_truth = %config.ground_truth_path.display(),
        "Simquery starting"
    );

    let strategy = match config.strategy {
        StrategyKind::Dense => {
            let dense_config = if let Some(path) = &config.model_path {
                DenseConfig::new(path.clone())
            } else {
                tracing::warn!(
                    "No SIMQUERY_MODEL_PATH configured, running dense embedder in stub mode"
                );
                DenseConfig::stub()
            };
            StrategyConfig::Dense(dense_config)
        }
        StrategyKind::Classifier => {
            let classifier_config = if let Some(path) = &config.model_path {
                ClassifierConfig::new(path.clone())
            } else {
                tracing::warn!(
                    "No SIMQUERY_MODEL_PATH configured, running classifier in stub mode"
                );
                ClassifierConfig::stub()
            };
            StrategyConfig::Classifier(classifier_config)
        }
    };

    // Any load failure aborts startup; there is no degraded mode.
    let engine = ScoringEngine::load(EngineConfig::new(
        config.ground_truth_path.clone(),
        strategy,
    ))?;

    tracing::info!(
        strategy = %engine.strategy(),
        sentences = engine.sentence_count(),
        stub = engine.is_stub(),
        "Scoring engine ready"
    );

    let state = HandlerState::new(Arc::new(engine));
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Simquery shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("SIMQUERY_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
