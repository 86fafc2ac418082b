//! Request and response bodies shared by the REST API and the CLI.
//!
//! Field names are camelCase on the wire to match the existing web client. Catalog records are
//! flattened into plain strings here; the validated domain forms live in `carecheck-core`.

use carecheck_core::{
    DiagnosisResult, Disease, Medicine, PossibleCondition, Severity, Symptom, Urgency,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Failure envelope returned with 4xx/5xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub success: bool,
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ============================================================================
// Catalog records
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub severity_hint: Severity,
    pub common_causes: Vec<String>,
    pub associated_symptoms: Vec<String>,
    pub when_to_seek_help: Vec<String>,
    pub home_remedies: Vec<String>,
    pub duration: String,
}

impl From<&Symptom> for SymptomDto {
    fn from(s: &Symptom) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: s.description.clone(),
            category: s.category.clone(),
            severity_hint: s.severity_hint,
            common_causes: s.common_causes.clone(),
            associated_symptoms: s.associated_symptoms.clone(),
            when_to_seek_help: s.when_to_seek_help.clone(),
            home_remedies: s.home_remedies.clone(),
            duration: s.duration.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub common_symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub risk_factors: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub complications: Vec<String>,
    pub severity: Severity,
    pub contagious: bool,
    pub duration: String,
}

impl From<&Disease> for DiseaseDto {
    fn from(d: &Disease) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.to_string(),
            description: d.description.clone(),
            category: d.category.clone(),
            common_symptoms: d.common_symptoms.clone(),
            causes: d.causes.clone(),
            risk_factors: d.risk_factors.clone(),
            treatment: d.treatment.clone(),
            prevention: d.prevention.clone(),
            complications: d.complications.clone(),
            severity: d.severity,
            contagious: d.contagious,
            duration: d.duration.clone(),
        }
    }
}

/// Short listing entry used by catalog overviews.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl From<&Symptom> for CatalogSummary {
    fn from(s: &Symptom) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: s.description.clone(),
            category: s.category.clone(),
        }
    }
}

impl From<&Disease> for CatalogSummary {
    fn from(d: &Disease) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.to_string(),
            description: d.description.clone(),
            category: d.category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DosageDto {
    pub adult: String,
    pub child: String,
    pub elderly: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceDto {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicineDto {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub description: String,
    pub uses: Vec<String>,
    pub dosage: DosageDto,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub interactions: Vec<String>,
    pub precautions: Vec<String>,
    pub form: String,
    pub strength: String,
    pub manufacturer: String,
    pub price: PriceDto,
    pub prescription: bool,
    pub schedule: String,
}

impl From<&Medicine> for MedicineDto {
    fn from(m: &Medicine) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.to_string(),
            generic_name: m.generic_name.clone(),
            category: m.category.clone(),
            description: m.description.clone(),
            uses: m.uses.clone(),
            dosage: DosageDto {
                adult: m.dosage.adult.clone(),
                child: m.dosage.child.clone(),
                elderly: m.dosage.elderly.clone(),
            },
            side_effects: m.side_effects.clone(),
            contraindications: m.contraindications.clone(),
            interactions: m.interactions.clone(),
            precautions: m.precautions.clone(),
            form: m.form.clone(),
            strength: m.strength.clone(),
            manufacturer: m.manufacturer.clone(),
            price: PriceDto {
                min: m.price.min,
                max: m.price.max,
                currency: m.price.currency.clone(),
            },
            prescription: m.prescription,
            schedule: m.schedule.clone(),
        }
    }
}

// ============================================================================
// Diagnosis
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PossibleConditionDto {
    pub disease: DiseaseDto,
    /// Coverage ratio in percent, not a statistical likelihood.
    pub probability: u8,
    pub matching_symptoms: Vec<String>,
}

impl From<&PossibleCondition<'_>> for PossibleConditionDto {
    fn from(c: &PossibleCondition<'_>) -> Self {
        Self {
            disease: DiseaseDto::from(c.disease),
            probability: c.probability,
            matching_symptoms: c.matching_symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Engine output exactly as computed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisDto {
    pub possible_conditions: Vec<PossibleConditionDto>,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

impl From<&DiagnosisResult<'_>> for DiagnosisDto {
    fn from(r: &DiagnosisResult<'_>) -> Self {
        Self {
            possible_conditions: r
                .possible_conditions
                .iter()
                .map(PossibleConditionDto::from)
                .collect(),
            urgency: r.urgency,
            recommendations: r.recommendations.clone(),
            disclaimer: r.disclaimer.to_string(),
        }
    }
}

/// Body of `POST /symptom-checker`.
///
/// `symptoms` is optional at the type level so a missing field produces the same 400 envelope as
/// an empty list instead of a deserialisation rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckReq {
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientInfo {
    pub age: String,
    pub gender: String,
}

/// Engine output plus the presentation fields added at the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub possible_conditions: Vec<PossibleConditionDto>,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
    pub input_symptoms: Vec<String>,
    pub patient_info: PatientInfo,
    pub disclaimers: Vec<String>,
    pub recommended_actions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckRes {
    pub success: bool,
    pub diagnosis: DiagnosisReport,
    pub language: String,
}

// ============================================================================
// Catalog browsing
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSearchRes {
    pub success: bool,
    pub symptoms: Vec<SymptomDto>,
    pub query: String,
    pub total_results: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseSearchRes {
    pub success: bool,
    pub diseases: Vec<DiseaseDto>,
    pub query: String,
    pub total_results: usize,
}

/// Sample body shown on the catalog overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExampleRequest {
    pub symptoms: Vec<String>,
    pub age: u32,
    pub gender: String,
}

impl Default for ExampleRequest {
    fn default() -> Self {
        Self {
            symptoms: vec!["headache".into(), "fever".into(), "fatigue".into()],
            age: 30,
            gender: "female".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverviewRes {
    pub success: bool,
    pub available_symptoms: Vec<CatalogSummary>,
    pub available_diseases: Vec<CatalogSummary>,
    pub total_symptoms: usize,
    pub total_diseases: usize,
    pub message: String,
    pub example_request: ExampleRequest,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListSymptomsRes {
    pub symptoms: Vec<SymptomDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListDiseasesRes {
    pub diseases: Vec<DiseaseDto>,
}

// ============================================================================
// Drug lookup
// ============================================================================

/// Body of `POST /drug-info`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DrugInfoReq {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrugSearchRes {
    pub success: bool,
    pub medicines: Vec<MedicineDto>,
    pub total_results: usize,
    pub query: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicineRes {
    pub success: bool,
    pub medicine: MedicineDto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicinesByCategoryRes {
    pub success: bool,
    pub medicines: Vec<MedicineDto>,
    pub category: String,
    pub total_results: usize,
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrugOverviewRes {
    pub success: bool,
    pub categories: Vec<String>,
    pub sample_medicines: Vec<MedicineDto>,
    pub total_medicines: usize,
    pub message: String,
}
