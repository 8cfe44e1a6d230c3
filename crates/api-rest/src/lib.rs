//! REST API for the Tawasul notice composer.
//!
//! ## Purpose
//! Exposes the composer over HTTP so the web front end can preview announcement cards while a
//! submission is being filled in.
//!
//! ## Endpoints
//! - `GET /health`
//! - `POST /compose`: compose a JSON submission into card text and its top/bottom layout
//! - `GET /swagger-ui`: OpenAPI documentation

use announcement::Submission;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, routing::post, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tawasul_core::{ComposerConfig, Markup, Section, TextComposer};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

// ============================================================================
// STATE AND DOCUMENTATION
// ============================================================================

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ComposerConfig>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, compose),
    components(schemas(HealthRes, ComposeReq, ComposeRes, SectionView, MarkupParam))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
///
/// `config` supplies the default markup; a request may override it per call.
pub fn router(config: ComposerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(health))
        .route("/compose", post(compose))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkupParam {
    Html,
    Plain,
}

impl From<MarkupParam> for Markup {
    fn from(value: MarkupParam) -> Self {
        match value {
            MarkupParam::Html => Markup::Html,
            MarkupParam::Plain => Markup::Plain,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ComposeReq {
    /// Submission in the same shape as a submission file, tagged by `category`.
    #[schema(value_type = Object)]
    pub submission: serde_json::Value,
    #[serde(default)]
    pub markup: Option<MarkupParam>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionView {
    pub kind: String,
    pub text: String,
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        Self {
            kind: section.kind.as_str().to_string(),
            text: section.text.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComposeRes {
    pub category: String,
    pub text: String,
    /// Empty for notices, which are not laid out as cards.
    pub top: Vec<SectionView>,
    pub bottom: Vec<SectionView>,
}

// ============================================================================
// HANDLERS
// ============================================================================

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Tawasul REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/compose",
    request_body = ComposeReq,
    responses(
        (status = 200, description = "Composed notice", body = ComposeRes),
        (status = 400, description = "Submission is malformed")
    )
)]
/// Compose a submission.
///
/// # Errors
/// Returns `400 Bad Request` with the validation message if the submission does not parse or
/// fails the composer's record checks.
#[axum::debug_handler]
async fn compose(
    State(state): State<AppState>,
    Json(req): Json<ComposeReq>,
) -> Result<Json<ComposeRes>, (StatusCode, String)> {
    let config = match req.markup {
        Some(markup) => state.config.with_markup(markup.into()),
        None => state.config.as_ref().clone(),
    };
    let composer = TextComposer::new(config);

    let data = Submission::from_json_value(req.submission).map_err(|e| {
        tracing::warn!("Rejected submission: {e}");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;
    let composed = composer.compose_submission(&data).map_err(|e| {
        tracing::warn!("Rejected {} submission: {e}", data.category().to_wire());
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let (top, bottom) = match composed.layout() {
        Some(card) => (
            card.top.iter().map(SectionView::from).collect(),
            card.bottom.iter().map(SectionView::from).collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    Ok(Json(ComposeRes {
        category: data.category().to_wire().to_string(),
        text: composed.text(),
        top,
        bottom,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(markup: Markup) -> State<AppState> {
        State(AppState {
            config: Arc::new(ComposerConfig::new(markup)),
        })
    }

    fn death_announcement() -> serde_json::Value {
        json!({
            "category": "death_announcement",
            "name": "محمد علي",
            "gender": "ذكر",
            "age": 70,
            "burial": { "mode": "deferred" },
            "relatives": [
                { "relationship": "الابن", "names": [{ "name": "حسن" }, { "name": "حسين" }] }
            ],
            "contacts": [{ "name": "حسن", "phone": "39998877" }]
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(res) = health(state(Markup::Html)).await;
        assert!(res.ok);
    }

    #[tokio::test]
    async fn compose_returns_text_and_layout() {
        let req = ComposeReq {
            submission: death_announcement(),
            markup: None,
        };
        let Json(res) = compose(state(Markup::Plain), Json(req))
            .await
            .expect("compose");

        assert_eq!(res.category, "death_announcement");
        assert!(res.text.contains("محمد علي"));
        assert!(!res.text.contains("<span"));
        assert_eq!(res.top.len(), 2);
        assert_eq!(res.top[0].kind, "relatives");
        let kinds: Vec<&str> = res
            .top
            .iter()
            .chain(res.bottom.iter())
            .map(|s| s.kind.as_str())
            .collect();
        assert_eq!(kinds, vec!["relatives", "burial", "contacts"]);
    }

    #[tokio::test]
    async fn request_markup_overrides_default() {
        let req = ComposeReq {
            submission: death_announcement(),
            markup: Some(MarkupParam::Html),
        };
        let Json(res) = compose(state(Markup::Plain), Json(req))
            .await
            .expect("compose");
        assert!(res.text.contains("<span class=\"memorial-name\">محمد علي</span>"));
    }

    #[tokio::test]
    async fn notices_have_no_layout() {
        let req = ComposeReq {
            submission: json!({ "category": "prayer_request", "patient_name": "سارة" }),
            markup: Some(MarkupParam::Plain),
        };
        let Json(res) = compose(state(Markup::Html), Json(req))
            .await
            .expect("compose");
        assert_eq!(res.category, "prayer_request");
        assert!(res.text.contains("سارة"));
        assert!(res.top.is_empty());
        assert!(res.bottom.is_empty());
    }

    #[tokio::test]
    async fn prayer_times_card_is_composed() {
        let req = ComposeReq {
            submission: json!({
                "category": "prayer_times",
                "date": "2025-06-26",
                "fajr": "03:14",
                "sunrise": "04:45",
                "dhuhr": "11:41",
                "asr": "15:06",
                "maghrib": "18:37",
                "isha": "20:07"
            }),
            markup: Some(MarkupParam::Plain),
        };
        let Json(res) = compose(state(Markup::Html), Json(req))
            .await
            .expect("compose");
        assert_eq!(res.category, "prayer_times");
        assert!(res.text.starts_with("1 محرم 1447هـ\n"));
        assert!(res.text.contains("الثلث الأخير"));
        assert!(res.top.is_empty());
    }

    #[tokio::test]
    async fn malformed_submission_is_bad_request() {
        let req = ComposeReq {
            submission: json!({ "category": "wedding", "name": "x" }),
            markup: None,
        };
        let (status, message) = compose(state(Markup::Html), Json(req))
            .await
            .expect_err("unknown category");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_age_is_bad_request() {
        let mut submission = death_announcement();
        submission["age"] = json!(0);
        let req = ComposeReq {
            submission,
            markup: None,
        };
        let (status, _) = compose(state(Markup::Html), Json(req))
            .await
            .expect_err("age 0");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
