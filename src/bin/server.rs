use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use place_autocomplete::{
    load_tsv, AutocompleteError, DoubleMetaphoneEncoder, EngineConfig, PlaceEngine,
    SuggestionResponse,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<PlaceEngine>,
}

/// Raw query params; numbers that don't parse are treated as absent
#[derive(Debug, Deserialize)]
struct SuggestParams {
    q: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    n: Option<String>,
}

fn parse_param<T: std::str::FromStr>(value: Option<&String>) -> Option<T> {
    value.and_then(|v| v.trim().parse::<T>().ok())
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    places: usize,
    scoring_method: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "place_server=debug,place_autocomplete=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_path =
        std::env::var("DATA_PATH").unwrap_or_else(|_| "data/cities_canada-usa.tsv".to_string());
    let config_path = std::env::var("CONFIG_PATH").ok();
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    tracing::info!("🚀 Starting place autocomplete server");
    tracing::info!("📦 Data: {}", data_path);
    tracing::info!("🔌 Port: {}", port);

    let config = match &config_path {
        Some(path) => {
            tracing::info!("⚙️ Config: {}", path);
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };
    tracing::info!("⚙️ {}", config);

    let encoder = Arc::new(DoubleMetaphoneEncoder::new());
    let places = load_tsv(&data_path, encoder.as_ref())?;
    let engine = PlaceEngine::new(places, &config, encoder)?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/suggestions", get(suggestions_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🌍 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: place_autocomplete::VERSION.to_string(),
        places: state.engine.places().len(),
        scoring_method: state.engine.ranker().strategy_name().to_string(),
    })
}

async fn suggestions_handler(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestionResponse>, AppError> {
    tracing::debug!("Suggest request: {:?}", params);

    let q = params.q.clone().unwrap_or_default();
    let latitude = parse_param::<f64>(params.latitude.as_ref());
    let longitude = parse_param::<f64>(params.longitude.as_ref());
    let limit = parse_param::<i64>(params.n.as_ref());

    let response = state.engine.suggest(&q, latitude, longitude, limit)?;
    Ok(Json(response))
}

// Error handling
struct AppError(AutocompleteError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AutocompleteError::EmptyQuery | AutocompleteError::InvalidCoordinate { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!("❌ Error: {} - {}", status, message);
        } else {
            tracing::warn!("⚠️ Rejected: {} - {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<AutocompleteError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
