use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use groq_client::{ChatCompletionClient, Config, GroqClient};
use log::{error, info, warn};

use crate::controllers::{convert_controller, health_controller};

const DEFAULT_WORKER_COUNT: usize = 10;

/// Shared per-process state. The client handle is built once at startup
/// and read-only afterwards; `None` means the service runs degraded and
/// every convert request fails with a 500.
pub struct AppState {
    pub client: Option<Arc<dyn ChatCompletionClient>>,
    pub model: String,
    pub mock_mode: bool,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health_controller::config)
            .configure(convert_controller::config),
    );
}

pub fn build_state(config: &Config, mock_mode: bool) -> AppState {
    let client: Option<Arc<dyn ChatCompletionClient>> = if mock_mode {
        info!("Mock mode enabled; skipping Groq client setup");
        None
    } else {
        match config.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(api_key) => match GroqClient::from_config(config, api_key) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    error!("Failed to build Groq client: {e:#}");
                    None
                }
            },
            None => {
                warn!("GROQ_API_KEY is not set; /api/convert will return 500 until configured");
                None
            }
        }
    };

    AppState {
        client,
        model: config.model.clone(),
        mock_mode,
    }
}

pub async fn run(config: Config, port: u16, mock_mode: bool) -> Result<(), String> {
    info!("Starting web service...");

    let app_state = web::Data::new(build_state(&config, mock_mode));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
