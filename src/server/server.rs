//! HTTP server core implementation

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{Method, header::HeaderName},
    middleware::DefaultHeaders,
    web,
};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::core::providers::ProviderRegistry;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Build providers and shared state from configuration.
    ///
    /// Provider API keys come from the config file first, then the process
    /// environment.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ProviderRegistry::from_config(config.providers(), |key| std::env::var(key).ok())
            .map_err(|e| GatewayError::config(e.to_string()))?;

        if registry.is_empty() {
            warn!("No providers registered; every AI request will fail");
        }

        Ok(Self::with_state(AppState::new(config, registry)))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = state.config.server();
        let cors = build_cors(&server_config.cors);
        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(|err, _req| {
                GatewayError::validation(format!("Invalid request body: {}", err)).into()
            });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "brofit-gateway")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and the rate-limit sweeper
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let sweep_interval = self.state.config.rate_limit().cleanup_interval();
        let sweeper = Arc::clone(&self.state.limiter).start_cleanup_task(sweep_interval);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GatewayError::config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!(address = %bind_addr, "HTTP server listening");

        let outcome = server.await;
        sweeper.abort();
        outcome?;

        info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

fn build_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let mut cors = if config.allows_all_origins() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(config.max_age as usize);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}
