//! podwatch server
//!
//! - `/`       : pod identity page with a polling script
//! - `/ping`   : visitor heartbeat
//! - `/active` : active visitor count

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podwatch_server::{app_state::AppState, config::AppConfig, router, server};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new(AppConfig::from_env());
    let cfg = state.cfg();
    let listen = cfg.listen_addr();
    tracing::info!(pod_ip = %cfg.pod_ip, pod_name = %cfg.pod_name, "podwatch-server starting");

    let app = router::build_router(state);

    if let Err(e) = server::serve(listen, app, server::shutdown_signal()).await {
        tracing::error!(kind = e.kind(), error = %e, "podwatch-server stopped");
        std::process::exit(1);
    }
}
