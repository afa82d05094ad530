pub mod router;
pub mod server;
mod state;
pub mod tracing;

pub use state::AppState;

use crate::config::Settings;
use crate::error::AppError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AppError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing(tracing::LogFormat::from_env());

    let settings = Settings::from_env()?;
    ::tracing::info!(
        http_port = settings.http_port,
        model = %settings.llm.model,
        recommendation_count = settings.recommendation_count,
        "Loaded settings"
    );

    // Shared shutdown token: cancelled on SIGINT/SIGTERM, observed by the invoker
    let shutdown_token = CancellationToken::new();

    let app_state = AppState::from_settings(&settings, shutdown_token.clone())?;
    let app = router::main_router(app_state, &settings.cors_allowed_origins);

    server::serve(app, settings.http_port, shutdown_token).await
}
