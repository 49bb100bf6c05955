// Waste management dashboard server

use wastedash::{AppState, build_router};
use wastedash_config::{Settings, load_dotenv};
use wastedash_core::logging::{LogConfig, LogFormat, LogLevel, LogOutput};
use wastedash_core::{Application, StaticAssets};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_error = load_dotenv();
    let settings = Settings::load()?;
    let _log_guard = log_config(&settings).init()?;

    if let Some(err) = dotenv_error {
        tracing::warn!(error = %err, "ignoring unreadable .env file");
    }

    tracing::info!(
        address = %settings.bind_address(),
        "starting waste management dashboard"
    );

    let state = AppState::from_settings(&settings).await?;
    let router = build_router(&state, Some(StaticAssets::new(&settings.views.public_dir)));

    Application::new(router)
        .listen(&settings.server.host, settings.server.port)
        .await?;

    state.db.close().await?;
    tracing::info!("shutdown complete");
    Ok(())
}

fn log_config(settings: &Settings) -> LogConfig {
    LogConfig::new()
        .level(LogLevel::parse(&settings.log.level).unwrap_or(LogLevel::Info))
        .format(LogFormat::parse(&settings.log.format).unwrap_or(LogFormat::Json))
        .output(LogOutput::parse(&settings.log.output))
        .with_thread_ids(settings.log.thread_ids)
}
