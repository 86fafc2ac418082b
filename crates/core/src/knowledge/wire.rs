//! YAML wire models for the catalog file and their translation into domain records.
//!
//! Responsibilities:
//! - Define a strict wire model for the catalog document (camelCase keys, unknown keys rejected)
//! - Translate wire entries into validated domain records
//! - Enforce catalog invariants (unique ids, non-empty names, non-empty symptom lists)

use super::records::{Disease, Dosage, Medicine, PriceRange, Symptom};
use crate::{CatalogError, CatalogResult};
use carecheck_types::{NonEmptyText, Severity};
use serde::Deserialize;
use std::collections::HashSet;

/// Validated catalog contents, in document order.
#[derive(Clone, Debug, Default)]
pub(crate) struct Catalog {
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
    pub medicines: Vec<Medicine>,
}

/// Parse and validate a catalog from YAML text.
///
/// This uses `serde_path_to_error` to surface a best-effort "path" (e.g. `diseases[3].severity`)
/// to the failing field when the YAML does not match the wire schema.
///
/// # Errors
///
/// Returns [`CatalogError`] if:
/// - the YAML does not match the wire schema (including unknown keys),
/// - an id or name is blank,
/// - an id is repeated within its catalog,
/// - a disease lists no common symptoms,
/// - a medicine price range is inverted.
pub(crate) fn parse_catalog(yaml_text: &str) -> CatalogResult<Catalog> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(CatalogError::Translation(format!(
                "Catalog schema mismatch at {path}: {source}"
            )));
        }
    };

    wire_to_domain(wire)
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    #[serde(default)]
    symptoms: Vec<SymptomWire>,
    #[serde(default)]
    diseases: Vec<DiseaseWire>,
    #[serde(default)]
    medicines: Vec<MedicineWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SymptomWire {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    severity_hint: Severity,
    #[serde(default)]
    common_causes: Vec<String>,
    #[serde(default)]
    associated_symptoms: Vec<String>,
    #[serde(default)]
    when_to_seek_help: Vec<String>,
    #[serde(default)]
    home_remedies: Vec<String>,
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DiseaseWire {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    common_symptoms: Vec<String>,
    #[serde(default)]
    causes: Vec<String>,
    #[serde(default)]
    risk_factors: Vec<String>,
    #[serde(default)]
    treatment: Vec<String>,
    #[serde(default)]
    prevention: Vec<String>,
    #[serde(default)]
    complications: Vec<String>,
    severity: Severity,
    #[serde(default)]
    contagious: bool,
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DosageWire {
    adult: String,
    child: String,
    elderly: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PriceWire {
    min: u32,
    max: u32,
    currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MedicineWire {
    id: String,
    name: String,
    #[serde(default)]
    generic_name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    uses: Vec<String>,
    dosage: DosageWire,
    #[serde(default)]
    side_effects: Vec<String>,
    #[serde(default)]
    contraindications: Vec<String>,
    #[serde(default)]
    interactions: Vec<String>,
    #[serde(default)]
    precautions: Vec<String>,
    #[serde(default)]
    form: String,
    #[serde(default)]
    strength: String,
    #[serde(default)]
    manufacturer: String,
    price: PriceWire,
    #[serde(default)]
    prescription: bool,
    #[serde(default)]
    schedule: String,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn required(
    kind: &'static str,
    id: &str,
    field: &'static str,
    value: &str,
) -> CatalogResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| CatalogError::EmptyField {
        kind,
        id: id.to_string(),
        field,
    })
}

/// A disease needs at least one symptom, and none of them blank.
///
/// The list length is the coverage denominator and a blank entry is contained in every token.
pub(super) fn check_common_symptoms(disease_id: &str, symptoms: &[String]) -> CatalogResult<()> {
    if symptoms.is_empty() {
        return Err(CatalogError::NoCommonSymptoms(disease_id.to_string()));
    }
    if symptoms.iter().any(|s| s.trim().is_empty()) {
        return Err(CatalogError::EmptyField {
            kind: "disease",
            id: disease_id.to_string(),
            field: "commonSymptoms",
        });
    }
    Ok(())
}

/// Track ids seen so far for one catalog and reject repeats.
fn claim_id(seen: &mut HashSet<String>, kind: &'static str, id: &NonEmptyText) -> CatalogResult<()> {
    if !seen.insert(id.as_str().to_string()) {
        return Err(CatalogError::DuplicateId {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn wire_to_domain(wire: CatalogWire) -> CatalogResult<Catalog> {
    let mut seen = HashSet::new();
    let mut symptoms = Vec::with_capacity(wire.symptoms.len());
    for s in wire.symptoms {
        let id = required("symptom", &s.id, "id", &s.id)?;
        claim_id(&mut seen, "symptom", &id)?;
        let name = required("symptom", &s.id, "name", &s.name)?;
        symptoms.push(Symptom {
            id,
            name,
            description: s.description,
            category: s.category,
            severity_hint: s.severity_hint,
            common_causes: s.common_causes,
            associated_symptoms: s.associated_symptoms,
            when_to_seek_help: s.when_to_seek_help,
            home_remedies: s.home_remedies,
            duration: s.duration,
        });
    }

    let mut seen = HashSet::new();
    let mut diseases = Vec::with_capacity(wire.diseases.len());
    for d in wire.diseases {
        let id = required("disease", &d.id, "id", &d.id)?;
        claim_id(&mut seen, "disease", &id)?;
        let name = required("disease", &d.id, "name", &d.name)?;
        check_common_symptoms(id.as_str(), &d.common_symptoms)?;
        diseases.push(Disease {
            id,
            name,
            description: d.description,
            category: d.category,
            common_symptoms: d.common_symptoms,
            causes: d.causes,
            risk_factors: d.risk_factors,
            treatment: d.treatment,
            prevention: d.prevention,
            complications: d.complications,
            severity: d.severity,
            contagious: d.contagious,
            duration: d.duration,
        });
    }

    let mut seen = HashSet::new();
    let mut medicines = Vec::with_capacity(wire.medicines.len());
    for m in wire.medicines {
        let id = required("medicine", &m.id, "id", &m.id)?;
        claim_id(&mut seen, "medicine", &id)?;
        let name = required("medicine", &m.id, "name", &m.name)?;
        if m.price.min > m.price.max {
            return Err(CatalogError::InvalidPrice {
                id: id.into_string(),
                min: m.price.min,
                max: m.price.max,
            });
        }
        medicines.push(Medicine {
            id,
            name,
            generic_name: m.generic_name,
            category: m.category,
            description: m.description,
            uses: m.uses,
            dosage: Dosage {
                adult: m.dosage.adult,
                child: m.dosage.child,
                elderly: m.dosage.elderly,
            },
            side_effects: m.side_effects,
            contraindications: m.contraindications,
            interactions: m.interactions,
            precautions: m.precautions,
            form: m.form,
            strength: m.strength,
            manufacturer: m.manufacturer,
            price: PriceRange {
                min: m.price.min,
                max: m.price.max,
                currency: m.price.currency,
            },
            prescription: m.prescription,
            schedule: m.schedule,
        });
    }

    Ok(Catalog {
        symptoms,
        diseases,
        medicines,
    })
}
