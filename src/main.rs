use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manuscript_explorer::{config, db, infrastructure::AppState, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manuscript_explorer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db_with_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to initialize database");

    let state = AppState::from_config(db, &config).expect("Failed to build application state");

    if let Err(e) = state.catalog.files().ensure_dirs().await {
        tracing::error!("Failed to create upload folders: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = server::serve(state, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
