use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use repository::{PoolOptions, Repository};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod attendance;
pub mod doc;
pub mod event;
pub mod feedback;
pub mod healthz;
pub mod not_found;
pub mod registration;
pub mod report;
mod request;
mod response;
pub mod student;

#[derive(Debug)]
pub enum ApiError {
    ClientError(String),
    NotFound(String),
    ServerError { message: String, details: String },
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub cors: Cors,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        let pool = PoolOptions::default();
        Self {
            url: "sqlite://events.db?mode=rwc".to_string(),
            max_connections: pool.max_connections,
            min_connections: pool.min_connections,
        }
    }
}

impl Database {
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
        }
    }
}

/// An empty origin list lets any origin in.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}

impl Default for Cors {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

pub fn serve(repository: Repository, cors: &Cors) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    // events
    let event_router = Router::new()
        .route(
            "/",
            get(event::get_events)
                .post(event::post_event)
                .put(event::put_event)
                .delete(event::delete_event),
        )
        .with_state(repository.clone());

    // students
    let student_router = Router::new()
        .route(
            "/students",
            get(student::get_students).post(student::post_student),
        )
        .route("/login", post(student::post_login))
        .with_state(repository.clone());

    // registrations
    let registration_router = Router::new()
        .route("/register", post(registration::post_register))
        .route("/registrations", get(registration::get_registrations))
        .with_state(repository.clone());

    // attendance & feedback
    let after_event_router = Router::new()
        .route("/attendance", post(attendance::post_attendance))
        .route("/feedback", post(feedback::post_feedback))
        .with_state(repository.clone());

    let health_router = Router::new()
        .route("/healthz", get(healthz::get_health))
        .with_state(repository.clone());

    // reports
    let report_router = Router::new()
        .route("/registrations", get(report::get_registrations_report))
        .route("/attendance", get(report::get_attendance_report))
        .route("/feedback", get(report::get_feedback_report))
        .with_state(repository);

    let router = Router::new()
        .route("/api-docs/openapi.json", get(doc::get_openapi))
        .nest("/events", event_router)
        .merge(student_router)
        .merge(registration_router)
        .merge(after_event_router)
        .nest("/reports", report_router)
        .merge(health_router)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .fallback(not_found::get_404);

    Ok(router)
}

fn cors_layer(cors: &Cors) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors.allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}
