//! HTTP server: routing table, middleware stack, and lifecycle.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cohort_config::ServerConfig;
use cohort_db::RecordStore;

use crate::error::ServerError;
use crate::handlers::{cohorts, health, students};
use crate::state::AppState;

/// Hardening headers added to every response unless a handler set them.
const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    (
        "strict-transport-security",
        "max-age=15552000; includeSubDomains",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Build the full application router.
///
/// Exposed separately from [`Server`] so tests can drive it without binding
/// a socket.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/api/cohorts", get(cohorts::list).post(cohorts::create))
        .route(
            "/api/cohorts/{id}",
            get(cohorts::get_by_id)
                .put(cohorts::update)
                .delete(cohorts::delete),
        )
        .route("/api/students", get(students::list).post(students::create))
        .route(
            "/api/students/cohort/{cohort_id}",
            get(students::list_by_cohort),
        )
        .route(
            "/api/students/{id}",
            get(students::get_by_id)
                .put(students::update)
                .delete(students::delete),
        )
        .route("/health", get(health::health))
        .route_service("/docs", ServeFile::new(&config.docs_page))
        .fallback_service(ServeDir::new(&config.public_dir))
        .with_state(state);

    let mut router = api;
    for &(name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router
        .layer(cors_layer(&config.allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// CORS policy admitting only the configured origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a server over an already opened store.
    #[must_use]
    pub fn new(config: ServerConfig, store: RecordStore) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(store)),
        }
    }

    /// Bind and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if the address is invalid or cannot be bound.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr()?;
        let router = router(self.state, &self.config);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, "server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
