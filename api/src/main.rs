use anyhow::Context;
use api::routes::build_app;
use api::state::AppState;
use feedback::gemini::GeminiClient;
use feedback::{FeedbackGenerator, RubricTable};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::rolling;
use util::config::{AppConfig, LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and initialize logging
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.log);

    if config.gemini.api_key.is_empty() {
        warn!(
            "GOOGLE_GENAI_API_KEY is not set; feedback requests will fail until it is configured"
        );
    }

    // Set up dependencies
    let rubric = Arc::new(RubricTable::standard());
    let client = GeminiClient::new(&config.gemini).context("Failed to build Gemini client")?;
    let generator = FeedbackGenerator::new(rubric, Arc::new(client), config.max_feedback_chars);
    let rubric_entries = generator.rubric().len();
    let app_state = AppState::new(generator, config.expose_error_details);

    // Build app router
    let app = build_app(app_state, &config.server.allowed_origins);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid address")?;

    info!(
        env = %config.env,
        model = %config.gemini.model,
        rubric_entries,
        origins = ?config.server.allowed_origins,
        "Starting {} on http://{}",
        config.project_name,
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server crashed")?;

    Ok(())
}

fn init_logging(log: &LogConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &log.file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = log.to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter =
        EnvFilter::try_new(&log.level).unwrap_or_else(|_| EnvFilter::new("api=info,feedback=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
