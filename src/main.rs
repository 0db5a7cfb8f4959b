use placement_portal::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), placement_portal::server::error::Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    let upload_dir = startup::prepare_upload_dir(&config).await?;

    let app = router::routes()
        .with_state(AppState { db, upload_dir })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
