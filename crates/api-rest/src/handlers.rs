//! REST handlers.
//!
//! Handlers translate between JSON envelopes and core calls. They never hold the catalog beyond
//! the request and never mutate it.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use api_shared::dto::{
    CatalogOverviewRes, CatalogSummary, DiagnosisReport, DiseaseDto, DiseaseSearchRes,
    DrugInfoReq, DrugOverviewRes, DrugSearchRes, ErrorRes, ExampleRequest, HealthRes,
    ListDiseasesRes, ListSymptomsRes, MedicineDto, MedicineRes, MedicinesByCategoryRes,
    SymptomCheckReq, SymptomCheckRes, SymptomDto, SymptomSearchRes,
};
use api_shared::HealthService;
use carecheck_core::validation::validate_language_tag;
use carecheck_core::{DiagnosisEngine, DiagnosisQuery};

use crate::AppState;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Number of medicines shown on the drug-info overview.
const SAMPLE_MEDICINES: usize = 5;

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorRes::new(message)))
}

fn not_found(message: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorRes::new(message)))
}

/// Pick the response language, falling back to the configured default.
fn resolve_language(state: &AppState, requested: Option<String>) -> Result<String, ApiError> {
    match requested.filter(|l| !l.trim().is_empty()) {
        Some(language) => {
            let language = language.trim().to_string();
            if let Err(e) = validate_language_tag(&language) {
                tracing::warn!("Rejected language tag: {e}");
                return Err(bad_request("Invalid language"));
            }
            Ok(language)
        }
        None => Ok(state.default_language.to_string()),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/symptom-checker",
    request_body = SymptomCheckReq,
    responses(
        (status = 200, description = "Differential diagnosis", body = SymptomCheckRes),
        (status = 400, description = "Missing symptoms or malformed body", body = ErrorRes)
    )
)]
/// Analyse reported symptoms
///
/// Runs the diagnosis engine over the request's symptoms and wraps the result with the input
/// echo, patient details and urgency-specific follow-up actions.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON for [`SymptomCheckReq`],
/// - `symptoms` is missing or empty,
/// - `language` is not a valid language tag.
#[axum::debug_handler]
pub(crate) async fn check_symptoms(
    State(state): State<AppState>,
    body: Result<Json<SymptomCheckReq>, JsonRejection>,
) -> Result<Json<SymptomCheckRes>, ApiError> {
    let Json(req) = body.map_err(|e| {
        tracing::warn!("Rejected symptom check body: {e}");
        bad_request("Invalid request body")
    })?;

    let symptoms = match req.symptoms {
        Some(symptoms) if !symptoms.is_empty() => symptoms,
        _ => return Err(bad_request("Please provide at least one symptom")),
    };
    let language = resolve_language(&state, req.language)?;

    tracing::info!(
        symptoms = symptoms.len(),
        age = ?req.age,
        gender = ?req.gender,
        "Checking symptoms"
    );

    let query = DiagnosisQuery {
        symptoms,
        age: req.age,
        gender: req.gender,
    };
    let result = DiagnosisEngine::new(state.knowledge()).diagnose(&query);

    Ok(Json(SymptomCheckRes {
        success: true,
        diagnosis: DiagnosisReport::new(&query, &result),
        language,
    }))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct SymptomCheckerParams {
    /// Search the symptom catalog.
    symptom: Option<String>,
    /// Search the disease catalog.
    disease: Option<String>,
}

#[utoipa::path(
    get,
    path = "/symptom-checker",
    params(SymptomCheckerParams),
    responses(
        (status = 200, description = "Catalog overview, or SymptomSearchRes / DiseaseSearchRes when a query is given", body = CatalogOverviewRes)
    )
)]
/// Browse the symptom checker catalogs
///
/// With `symptom` or `disease` set, returns matching catalog entries (symptom takes precedence).
/// Without either, returns summaries of every symptom and disease.
#[axum::debug_handler]
pub(crate) async fn symptom_checker_lookup(
    State(state): State<AppState>,
    Query(params): Query<SymptomCheckerParams>,
) -> Response {
    let kb = state.knowledge();

    if let Some(query) = params.symptom.filter(|q| !q.is_empty()) {
        let symptoms: Vec<SymptomDto> = kb
            .search_symptoms(&query)
            .into_iter()
            .map(SymptomDto::from)
            .collect();
        return Json(SymptomSearchRes {
            success: true,
            total_results: symptoms.len(),
            symptoms,
            query,
        })
        .into_response();
    }

    if let Some(query) = params.disease.filter(|q| !q.is_empty()) {
        let diseases: Vec<DiseaseDto> = kb
            .search_diseases(&query)
            .into_iter()
            .map(DiseaseDto::from)
            .collect();
        return Json(DiseaseSearchRes {
            success: true,
            total_results: diseases.len(),
            diseases,
            query,
        })
        .into_response();
    }

    Json(CatalogOverviewRes {
        success: true,
        available_symptoms: kb.symptoms().iter().map(CatalogSummary::from).collect(),
        available_diseases: kb.diseases().iter().map(CatalogSummary::from).collect(),
        total_symptoms: kb.symptoms().len(),
        total_diseases: kb.diseases().len(),
        message: "Use POST /symptom-checker with {symptoms: ['symptom1', 'symptom2'], age: number, gender: string} to analyze symptoms".into(),
        example_request: ExampleRequest::default(),
    })
    .into_response()
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Every catalogued symptom", body = ListSymptomsRes)
    )
)]
#[axum::debug_handler]
pub(crate) async fn list_symptoms(State(state): State<AppState>) -> Json<ListSymptomsRes> {
    Json(ListSymptomsRes {
        symptoms: state
            .knowledge()
            .symptoms()
            .iter()
            .map(SymptomDto::from)
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/symptoms/{id}",
    params(("id" = String, Path, description = "Symptom identifier")),
    responses(
        (status = 200, description = "Symptom found", body = SymptomDto),
        (status = 404, description = "Unknown symptom", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_symptom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SymptomDto>, ApiError> {
    state
        .knowledge()
        .symptom_by_id(&id)
        .map(|s| Json(SymptomDto::from(s)))
        .ok_or_else(|| not_found("Symptom not found"))
}

#[utoipa::path(
    get,
    path = "/diseases",
    responses(
        (status = 200, description = "Every catalogued disease", body = ListDiseasesRes)
    )
)]
#[axum::debug_handler]
pub(crate) async fn list_diseases(State(state): State<AppState>) -> Json<ListDiseasesRes> {
    Json(ListDiseasesRes {
        diseases: state
            .knowledge()
            .diseases()
            .iter()
            .map(DiseaseDto::from)
            .collect(),
    })
}

#[utoipa::path(
    get,
    path = "/diseases/{id}",
    params(("id" = String, Path, description = "Disease identifier")),
    responses(
        (status = 200, description = "Disease found", body = DiseaseDto),
        (status = 404, description = "Unknown disease", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_disease(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DiseaseDto>, ApiError> {
    state
        .knowledge()
        .disease_by_id(&id)
        .map(|d| Json(DiseaseDto::from(d)))
        .ok_or_else(|| not_found("Disease not found"))
}

#[utoipa::path(
    post,
    path = "/drug-info",
    request_body = DrugInfoReq,
    responses(
        (status = 200, description = "Matching medicines", body = DrugSearchRes),
        (status = 400, description = "Missing query or malformed body", body = ErrorRes)
    )
)]
/// Search the medicine catalog
///
/// Matches the trimmed query against name, generic name, category and listed uses.
#[axum::debug_handler]
pub(crate) async fn search_drugs(
    State(state): State<AppState>,
    body: Result<Json<DrugInfoReq>, JsonRejection>,
) -> Result<Json<DrugSearchRes>, ApiError> {
    let Json(req) = body.map_err(|e| {
        tracing::warn!("Rejected drug info body: {e}");
        bad_request("Invalid request body")
    })?;

    let query = match req.query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(bad_request("Please provide a valid search query")),
    };
    let language = resolve_language(&state, req.language)?;

    tracing::info!("Searching medicines for query: {}", query.trim());
    let medicines: Vec<MedicineDto> = state
        .knowledge()
        .search_medicines(query.trim())
        .into_iter()
        .map(MedicineDto::from)
        .collect();

    Ok(Json(DrugSearchRes {
        success: true,
        total_results: medicines.len(),
        medicines,
        query,
        language,
    }))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct DrugInfoParams {
    /// Fetch a single medicine.
    id: Option<String>,
    /// List medicines in a category (case-insensitive).
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/drug-info",
    params(DrugInfoParams),
    responses(
        (status = 200, description = "Overview, or MedicineRes / MedicinesByCategoryRes when a parameter is given", body = DrugOverviewRes),
        (status = 404, description = "Unknown medicine id", body = ErrorRes)
    )
)]
/// Browse the medicine catalog
///
/// `id` takes precedence over `category`. Without either, returns the category list and a few
/// sample medicines.
#[axum::debug_handler]
pub(crate) async fn drug_info(
    State(state): State<AppState>,
    Query(params): Query<DrugInfoParams>,
) -> Result<Response, ApiError> {
    let kb = state.knowledge();
    let categories: Vec<String> = kb
        .medicine_categories()
        .into_iter()
        .map(str::to_string)
        .collect();

    if let Some(id) = params.id.filter(|i| !i.is_empty()) {
        let medicine = kb
            .medicine_by_id(&id)
            .ok_or_else(|| not_found("Medicine not found"))?;
        return Ok(Json(MedicineRes {
            success: true,
            medicine: MedicineDto::from(medicine),
        })
        .into_response());
    }

    if let Some(category) = params.category.filter(|c| !c.is_empty()) {
        let medicines: Vec<MedicineDto> = kb
            .medicines_by_category(&category)
            .into_iter()
            .map(MedicineDto::from)
            .collect();
        return Ok(Json(MedicinesByCategoryRes {
            success: true,
            total_results: medicines.len(),
            medicines,
            category,
            categories,
        })
        .into_response());
    }

    Ok(Json(DrugOverviewRes {
        success: true,
        categories,
        sample_medicines: kb
            .medicines()
            .iter()
            .take(SAMPLE_MEDICINES)
            .map(MedicineDto::from)
            .collect(),
        total_medicines: kb.medicines().len(),
        message: "Use POST /drug-info with {query: 'medicine name'} to search, or GET with ?category=CategoryName or ?id=medicineId".into(),
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use crate::{api_router, AppState};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use carecheck_core::KnowledgeBase;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(
            Arc::new(KnowledgeBase::builtin().expect("builtin catalog")),
            "en",
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = api_router(state())
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn symptom_check_returns_report() {
        let (status, body) = post_json(
            "/symptom-checker",
            json!({"symptoms": ["runny nose", "sneezing", "congestion"], "age": 30}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["language"], "en");
        let diagnosis = &body["diagnosis"];
        assert_eq!(diagnosis["urgency"], "medium");
        assert_eq!(diagnosis["patientInfo"]["age"], "30");
        assert_eq!(diagnosis["patientInfo"]["gender"], "Not provided");
        let cold = &diagnosis["possibleConditions"][0];
        assert_eq!(cold["disease"]["name"], "Common Cold");
        assert_eq!(cold["probability"], 33);
    }

    #[tokio::test]
    async fn symptom_check_flags_emergencies() {
        let (status, body) =
            post_json("/symptom-checker", json!({"symptoms": ["Chest Pain"]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["diagnosis"]["urgency"], "emergency");
        assert_eq!(
            body["diagnosis"]["recommendedActions"][0],
            "Seek immediate medical attention"
        );
    }

    #[tokio::test]
    async fn symptom_check_requires_symptoms() {
        let (status, body) = post_json("/symptom-checker", json!({"symptoms": []})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Please provide at least one symptom");

        let (status, _) = post_json("/symptom-checker", json!({"age": 40})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn symptom_check_rejects_wrong_types() {
        let (status, body) =
            post_json("/symptom-checker", json!({"symptoms": "headache"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn symptom_check_rejects_bad_language() {
        let (status, _) = post_json(
            "/symptom-checker",
            json!({"symptoms": ["cough"], "language": "<en>"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lookup_searches_diseases() {
        let (status, body) = get("/symptom-checker?disease=diabetes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalResults"], 1);
        assert_eq!(body["diseases"][0]["name"], "Type 2 Diabetes");
        assert_eq!(body["query"], "diabetes");
    }

    #[tokio::test]
    async fn lookup_searches_symptoms() {
        let (status, body) = get("/symptom-checker?symptom=HEADACHE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["symptoms"][0]["name"], "Headache");
        assert_eq!(body["symptoms"][0]["severityHint"], "mild");
    }

    #[tokio::test]
    async fn lookup_without_query_returns_overview() {
        let (status, body) = get("/symptom-checker").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSymptoms"], 10);
        assert_eq!(body["totalDiseases"], 10);
        assert_eq!(body["availableDiseases"][0]["id"], "dis001");
        assert_eq!(body["exampleRequest"]["age"], 30);
        assert_eq!(body["exampleRequest"]["symptoms"][0], "headache");
    }

    #[tokio::test]
    async fn catalog_lookups_by_id() {
        let (status, body) = get("/symptoms/sym002").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Fever");

        let (status, body) = get("/diseases/dis999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Disease not found");

        let (status, body) = get("/diseases").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["diseases"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn drug_search_matches_generic_names() {
        let (status, body) = post_json("/drug-info", json!({"query": " acetaminophen "})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalResults"], 1);
        assert_eq!(body["medicines"][0]["name"], "Paracetamol");
        assert_eq!(body["medicines"][0]["genericName"], "Acetaminophen");
    }

    #[tokio::test]
    async fn drug_search_requires_query() {
        let (status, body) = post_json("/drug-info", json!({"query": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a valid search query");
    }

    #[tokio::test]
    async fn drug_info_by_id_and_category() {
        let (status, body) = get("/drug-info?id=med001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["medicine"]["name"], "Paracetamol");

        let (status, _) = get("/drug-info?id=nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get("/drug-info?category=statin").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalResults"], 1);
        assert_eq!(body["medicines"][0]["name"], "Atorvastatin");
    }

    #[tokio::test]
    async fn drug_info_overview_lists_samples() {
        let (status, body) = get("/drug-info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalMedicines"], 10);
        assert_eq!(body["sampleMedicines"].as_array().map(Vec::len), Some(5));
        assert_eq!(body["categories"][0], "Analgesic/Antipyretic");
    }
}
