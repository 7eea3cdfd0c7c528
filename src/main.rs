use cloud_log_sdk::{build_app, config::Config, logging, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging("info");

    let config = Config::from_env()?;
    let bind_socket = config.bind_socket()?;
    let state = AppState::new(&config.sdk_source_path, config.log_lines);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        sdk_source = %config.sdk_source_path.display(),
        "mock cloud server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
