//! # API REST
//!
//! REST API implementation for CareCheck.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS)
//!
//! Uses `api-shared` for request/response bodies and `carecheck-core` for the knowledge base and
//! diagnosis engine.

#![warn(rust_2018_idioms)]

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use carecheck_core::{CoreConfig, KnowledgeBase};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::dto;

/// Application state shared across REST API handlers
///
/// Holds the read-only knowledge base snapshot and the fallback response language. Cloning is
/// cheap; handlers only ever take shared references to the catalog.
#[derive(Clone)]
pub struct AppState {
    knowledge: Arc<KnowledgeBase>,
    default_language: Arc<str>,
}

impl AppState {
    pub fn new(knowledge: Arc<KnowledgeBase>, default_language: impl Into<Arc<str>>) -> Self {
        Self {
            knowledge,
            default_language: default_language.into(),
        }
    }

    /// Build state from startup configuration, loading the configured catalog.
    pub fn from_config(cfg: &CoreConfig) -> carecheck_core::CatalogResult<Self> {
        let knowledge = cfg.load_knowledge_base()?;
        Ok(Self::new(Arc::new(knowledge), cfg.default_language()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::check_symptoms,
        handlers::symptom_checker_lookup,
        handlers::list_symptoms,
        handlers::get_symptom,
        handlers::list_diseases,
        handlers::get_disease,
        handlers::search_drugs,
        handlers::drug_info,
    ),
    components(schemas(
        dto::HealthRes,
        dto::ErrorRes,
        dto::SymptomDto,
        dto::DiseaseDto,
        dto::CatalogSummary,
        dto::DosageDto,
        dto::PriceDto,
        dto::MedicineDto,
        dto::PossibleConditionDto,
        dto::DiagnosisDto,
        dto::SymptomCheckReq,
        dto::PatientInfo,
        dto::DiagnosisReport,
        dto::SymptomCheckRes,
        dto::SymptomSearchRes,
        dto::DiseaseSearchRes,
        dto::ExampleRequest,
        dto::CatalogOverviewRes,
        dto::ListSymptomsRes,
        dto::ListDiseasesRes,
        dto::DrugInfoReq,
        dto::DrugSearchRes,
        dto::MedicineRes,
        dto::MedicinesByCategoryRes,
        dto::DrugOverviewRes,
        carecheck_core::Severity,
        carecheck_core::Urgency,
    ))
)]
pub struct ApiDoc;

/// Build the REST router without Swagger UI.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/symptom-checker",
            get(handlers::symptom_checker_lookup).post(handlers::check_symptoms),
        )
        .route("/symptoms", get(handlers::list_symptoms))
        .route("/symptoms/:id", get(handlers::get_symptom))
        .route("/diseases", get(handlers::list_diseases))
        .route("/diseases/:id", get(handlers::get_disease))
        .route(
            "/drug-info",
            get(handlers::drug_info).post(handlers::search_drugs),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the full REST application: API routes plus Swagger UI and the OpenAPI document.
pub fn app(state: AppState) -> Router {
    api_router(state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}
