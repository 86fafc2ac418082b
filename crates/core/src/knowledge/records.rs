//! Domain-level catalog records.
//!
//! These are the validated, in-memory forms of catalog entries. They are produced by the YAML
//! loader in [`super::wire`] and are never mutated after the knowledge base is built.

use carecheck_types::{NonEmptyText, Severity};

/// A catalogued complaint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symptom {
    /// Stable identifier, unique within the symptom catalog.
    pub id: NonEmptyText,

    /// Canonical display name (for example `Headache`).
    pub name: NonEmptyText,

    pub description: String,

    /// Taxonomy tag such as `Neurological` or `Respiratory`.
    pub category: String,

    /// Severity when this symptom occurs in isolation.
    pub severity_hint: Severity,

    pub common_causes: Vec<String>,

    /// Names of symptoms that commonly co-occur.
    pub associated_symptoms: Vec<String>,

    /// Escalation triggers, in the order they should be presented.
    pub when_to_seek_help: Vec<String>,

    pub home_remedies: Vec<String>,

    /// Typical duration, free text.
    pub duration: String,
}

/// A diagnosable condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disease {
    /// Stable identifier, unique within the disease catalog.
    pub id: NonEmptyText,

    pub name: NonEmptyText,

    pub description: String,

    pub category: String,

    /// Canonical symptom names, in catalog order. Never empty.
    ///
    /// These are matched textually against reported symptoms; they are not references to
    /// [`Symptom::id`].
    pub common_symptoms: Vec<String>,

    pub causes: Vec<String>,

    pub risk_factors: Vec<String>,

    pub treatment: Vec<String>,

    pub prevention: Vec<String>,

    pub complications: Vec<String>,

    /// Intrinsic severity, independent of any one presentation.
    pub severity: Severity,

    pub contagious: bool,

    pub duration: String,
}

/// Dosage guidance per patient group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dosage {
    pub adult: String,
    pub child: String,
    pub elderly: String,
}

/// Indicative retail price range. `min <= max` is enforced at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// A medicine available for drug lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Medicine {
    pub id: NonEmptyText,
    pub name: NonEmptyText,
    pub generic_name: String,
    pub category: String,
    pub description: String,
    pub uses: Vec<String>,
    pub dosage: Dosage,
    pub side_effects: Vec<String>,
    pub contraindications: Vec<String>,
    pub interactions: Vec<String>,
    pub precautions: Vec<String>,
    /// Dosage form, for example `Tablet` or `Inhaler`.
    pub form: String,
    pub strength: String,
    pub manufacturer: String,
    pub price: PriceRange,
    /// Whether a prescription is required.
    pub prescription: bool,
    /// Regulatory schedule label, for example `OTC` or `H`.
    pub schedule: String,
}
