//! Read-only knowledge base of symptoms, diseases and medicines.
//!
//! A [`KnowledgeBase`] is built once (from the embedded catalog or a YAML file) and then only
//! read. All search and lookup operations are pure: they never fail, preserve catalog order and
//! return borrowed records.
//!
//! Searches are case-insensitive substring matches over a fixed set of text fields per record.
//! There is no ranking.

mod records;
mod wire;

pub use records::{Disease, Dosage, Medicine, PriceRange, Symptom};

use crate::{CatalogError, CatalogResult};
use std::path::Path;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yaml");

/// Immutable catalog snapshot.
///
/// Share it between threads with `Arc<KnowledgeBase>`; nothing inside is mutable.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
    medicines: Vec<Medicine>,
}

impl KnowledgeBase {
    /// Load the catalog embedded in this crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded catalog itself is invalid.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on schema mismatches or catalog invariant violations.
    pub fn from_yaml(yaml_text: &str) -> CatalogResult<Self> {
        let catalog = wire::parse_catalog(yaml_text)?;
        tracing::debug!(
            symptoms = catalog.symptoms.len(),
            diseases = catalog.diseases.len(),
            medicines = catalog.medicines.len(),
            "catalog loaded"
        );
        Ok(Self {
            symptoms: catalog.symptoms,
            diseases: catalog.diseases,
            medicines: catalog.medicines,
        })
    }

    /// Read a catalog file and parse it with [`KnowledgeBase::from_yaml`].
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Build a knowledge base directly from records.
    ///
    /// Used for synthetic catalogs in tests and embedding applications. Ids are checked for
    /// uniqueness and diseases must list at least one symptom, none of them blank.
    pub fn from_records(
        symptoms: Vec<Symptom>,
        diseases: Vec<Disease>,
        medicines: Vec<Medicine>,
    ) -> CatalogResult<Self> {
        fn check_unique<'a>(
            kind: &'static str,
            ids: impl Iterator<Item = &'a str>,
        ) -> CatalogResult<()> {
            let mut seen = std::collections::HashSet::new();
            for id in ids {
                if !seen.insert(id) {
                    return Err(CatalogError::DuplicateId {
                        kind,
                        id: id.to_string(),
                    });
                }
            }
            Ok(())
        }

        check_unique("symptom", symptoms.iter().map(|s| s.id.as_str()))?;
        check_unique("disease", diseases.iter().map(|d| d.id.as_str()))?;
        check_unique("medicine", medicines.iter().map(|m| m.id.as_str()))?;
        for d in &diseases {
            wire::check_common_symptoms(d.id.as_str(), &d.common_symptoms)?;
        }

        Ok(Self {
            symptoms,
            diseases,
            medicines,
        })
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn symptom_by_id(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id.as_str() == id)
    }

    pub fn disease_by_id(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id.as_str() == id)
    }

    pub fn medicine_by_id(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id.as_str() == id)
    }

    /// Symptoms whose name, description, category or any common cause contains `query`.
    pub fn search_symptoms(&self, query: &str) -> Vec<&Symptom> {
        let term = query.to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| {
                contains(s.name.as_str(), &term)
                    || contains(&s.description, &term)
                    || contains(&s.category, &term)
                    || any_contains(&s.common_causes, &term)
            })
            .collect()
    }

    /// Diseases whose name, description, category or any common symptom contains `query`.
    pub fn search_diseases(&self, query: &str) -> Vec<&Disease> {
        let term = query.to_lowercase();
        self.diseases
            .iter()
            .filter(|d| {
                contains(d.name.as_str(), &term)
                    || contains(&d.description, &term)
                    || contains(&d.category, &term)
                    || any_contains(&d.common_symptoms, &term)
            })
            .collect()
    }

    /// Medicines whose name, generic name, category or any listed use contains `query`.
    pub fn search_medicines(&self, query: &str) -> Vec<&Medicine> {
        let term = query.to_lowercase();
        self.medicines
            .iter()
            .filter(|m| {
                contains(m.name.as_str(), &term)
                    || contains(&m.generic_name, &term)
                    || contains(&m.category, &term)
                    || any_contains(&m.uses, &term)
            })
            .collect()
    }

    /// Medicines whose category equals `category`, ignoring case.
    pub fn medicines_by_category(&self, category: &str) -> Vec<&Medicine> {
        let wanted = category.to_lowercase();
        self.medicines
            .iter()
            .filter(|m| m.category.to_lowercase() == wanted)
            .collect()
    }

    /// Distinct medicine categories in first-seen order.
    pub fn medicine_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for m in &self.medicines {
            if !categories.contains(&m.category.as_str()) {
                categories.push(&m.category);
            }
        }
        categories
    }
}

/// `term` must already be lowercase.
fn contains(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

fn any_contains(fields: &[String], term: &str) -> bool {
    fields.iter().any(|f| contains(f, term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use carecheck_types::{NonEmptyText, Severity};

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().expect("builtin catalog is valid")
    }

    fn symptom_names<'a>(hits: &[&'a Symptom]) -> Vec<&'a str> {
        hits.iter().map(|s| s.name.as_str()).collect()
    }

    fn disease_names<'a>(hits: &[&'a Disease]) -> Vec<&'a str> {
        hits.iter().map(|d| d.name.as_str()).collect()
    }

    fn medicine_names<'a>(hits: &[&'a Medicine]) -> Vec<&'a str> {
        hits.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn builtin_catalog_has_expected_sizes() {
        let kb = kb();
        assert_eq!(kb.symptoms().len(), 10);
        assert_eq!(kb.diseases().len(), 10);
        assert_eq!(kb.medicines().len(), 10);
    }

    #[test]
    fn search_diseases_diabetes_returns_only_type_2() {
        let kb = kb();
        let hits = kb.search_diseases("diabetes");
        assert_eq!(disease_names(&hits), ["Type 2 Diabetes"]);
    }

    #[test]
    fn symptom_search_ignores_case() {
        let kb = kb();
        let upper = kb.search_symptoms("HEADACHE");
        let lower = kb.search_symptoms("headache");
        assert!(!lower.is_empty());
        assert_eq!(upper, lower);
    }

    #[test]
    fn symptom_search_covers_causes_and_keeps_catalog_order() {
        let kb = kb();
        // "Stress" is a cause of Headache, Fatigue and Skin Rash.
        let hits = kb.search_symptoms("stress");
        assert_eq!(
            symptom_names(&hits),
            ["Headache", "Fatigue", "Skin Rash"]
        );
    }

    #[test]
    fn search_without_matches_is_empty() {
        let kb = kb();
        assert!(kb.search_symptoms("xylophone").is_empty());
        assert!(kb.search_diseases("xylophone").is_empty());
        assert!(kb.search_medicines("xylophone").is_empty());
    }

    #[test]
    fn disease_search_matches_common_symptoms() {
        let kb = kb();
        let hits = kb.search_diseases("wheezing");
        assert_eq!(disease_names(&hits), ["Asthma"]);
    }

    #[test]
    fn lookups_by_id() {
        let kb = kb();
        assert_eq!(
            kb.symptom_by_id("sym004").map(|s| s.name.as_str()),
            Some("Chest Pain")
        );
        assert_eq!(
            kb.disease_by_id("dis001").map(|d| d.name.as_str()),
            Some("Common Cold")
        );
        assert_eq!(
            kb.medicine_by_id("med001").map(|m| m.name.as_str()),
            Some("Paracetamol")
        );
        assert!(kb.disease_by_id("dis999").is_none());
    }

    #[test]
    fn medicine_search_matches_generic_name_and_uses() {
        let kb = kb();
        let by_generic = kb.search_medicines("acetaminophen");
        assert_eq!(medicine_names(&by_generic), ["Paracetamol"]);

        let by_use = kb.search_medicines("asthma");
        assert!(by_use.iter().any(|m| m.name.as_str() == "Salbutamol"));
    }

    #[test]
    fn medicines_by_category_ignores_case() {
        let kb = kb();
        let hits = kb.medicines_by_category("antihistamine");
        assert_eq!(medicine_names(&hits), ["Cetirizine"]);
        assert!(kb.medicines_by_category("Antihist").is_empty());
    }

    #[test]
    fn medicine_categories_are_distinct() {
        let kb = kb();
        let categories = kb.medicine_categories();
        assert_eq!(categories.first(), Some(&"Analgesic/Antipyretic"));
        let mut deduped = categories.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), categories.len());
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let err = KnowledgeBase::from_path(Path::new("/no/such/catalog.yaml"))
            .expect_err("missing file");
        assert!(err.to_string().contains("/no/such/catalog.yaml"));
    }

    fn flu(common_symptoms: &[&str]) -> Disease {
        Disease {
            id: NonEmptyText::new("d1").expect("id"),
            name: NonEmptyText::new("Flu").expect("name"),
            description: String::new(),
            category: String::new(),
            common_symptoms: common_symptoms.iter().map(|s| s.to_string()).collect(),
            causes: vec![],
            risk_factors: vec![],
            treatment: vec![],
            prevention: vec![],
            complications: vec![],
            severity: Severity::Moderate,
            contagious: true,
            duration: String::new(),
        }
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let disease = flu(&["Fever"]);
        let err = KnowledgeBase::from_records(vec![], vec![disease.clone(), disease], vec![])
            .expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateId { kind: "disease", .. }));
    }

    #[test]
    fn from_records_rejects_blank_common_symptom() {
        let err = KnowledgeBase::from_records(vec![], vec![flu(&["Fever", " "])], vec![])
            .expect_err("blank symptom entry");
        assert!(matches!(
            err,
            CatalogError::EmptyField {
                field: "commonSymptoms",
                ..
            }
        ));
    }

    #[test]
    fn yaml_and_records_agree_on_coverage() {
        let yaml = r#"diseases:
  - id: d1
    name: Flu
    commonSymptoms: ["Fever", "Chills"]
    severity: moderate
"#;
        let from_yaml = KnowledgeBase::from_yaml(yaml).expect("yaml catalog");
        let from_records =
            KnowledgeBase::from_records(vec![], vec![flu(&["Fever", "Chills"])], vec![])
                .expect("record catalog");
        let query = crate::DiagnosisQuery::new(["fever"]);

        for kb in [&from_yaml, &from_records] {
            let result = crate::DiagnosisEngine::new(kb).diagnose(&query);
            assert_eq!(result.possible_conditions[0].probability, 50);
        }
    }
}
