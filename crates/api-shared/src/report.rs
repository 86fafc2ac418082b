//! Presentation layer for diagnosis results.
//!
//! The engine returns only what it computed. Callers facing end users wrap it in a
//! [`DiagnosisReport`], which echoes the input and adds follow-up actions chosen by urgency.

use crate::dto::{DiagnosisDto, DiagnosisReport, PatientInfo};
use carecheck_core::{DiagnosisQuery, DiagnosisResult, Urgency};

const NOT_PROVIDED: &str = "Not provided";

const REPORT_DISCLAIMERS: [&str; 4] = [
    "This is an AI-powered assessment and should not replace professional medical advice",
    "Please consult a healthcare provider for proper diagnosis and treatment",
    "In case of emergency symptoms, seek immediate medical attention",
    "The assessment is based on general medical knowledge and may not account for individual variations",
];

const URGENT_ACTIONS: [&str; 3] = [
    "Seek immediate medical attention",
    "Go to emergency room or call emergency services",
    "Do not delay medical care",
];

const MEDIUM_ACTIONS: [&str; 3] = [
    "Schedule an appointment with your doctor within 1-2 days",
    "Monitor symptoms closely",
    "Seek immediate care if symptoms worsen",
];

const LOW_ACTIONS: [&str; 4] = [
    "Monitor symptoms for a few days",
    "Consider home remedies if appropriate",
    "Consult a doctor if symptoms persist or worsen",
    "Maintain good rest and hydration",
];

/// Follow-up actions shown to the user for an urgency tier.
pub fn recommended_actions(urgency: Urgency) -> Vec<String> {
    let actions: &[&str] = match urgency {
        Urgency::Emergency | Urgency::High => &URGENT_ACTIONS,
        Urgency::Medium => &MEDIUM_ACTIONS,
        Urgency::Low => &LOW_ACTIONS,
    };
    actions.iter().map(|a| a.to_string()).collect()
}

impl DiagnosisReport {
    /// Wrap an engine result with the query echo and urgency-specific actions.
    pub fn new(query: &DiagnosisQuery, result: &DiagnosisResult<'_>) -> Self {
        let diagnosis = DiagnosisDto::from(result);
        Self {
            possible_conditions: diagnosis.possible_conditions,
            urgency: diagnosis.urgency,
            recommendations: diagnosis.recommendations,
            disclaimer: diagnosis.disclaimer,
            input_symptoms: query.symptoms.clone(),
            patient_info: PatientInfo {
                // Zero and empty values count as not provided.
                age: query
                    .age
                    .filter(|a| *a > 0)
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| NOT_PROVIDED.into()),
                gender: query
                    .gender
                    .clone()
                    .filter(|g| !g.is_empty())
                    .unwrap_or_else(|| NOT_PROVIDED.into()),
            },
            disclaimers: REPORT_DISCLAIMERS.iter().map(|d| d.to_string()).collect(),
            recommended_actions: recommended_actions(result.urgency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carecheck_core::{DiagnosisEngine, KnowledgeBase};

    #[test]
    fn report_echoes_input_and_marks_missing_patient_info() {
        let kb = KnowledgeBase::builtin().expect("builtin catalog");
        let query = DiagnosisQuery::new(["Sneezing"]);
        let result = DiagnosisEngine::new(&kb).diagnose(&query);
        let report = DiagnosisReport::new(&query, &result);

        assert_eq!(report.input_symptoms, ["Sneezing"]);
        assert_eq!(report.patient_info.age, NOT_PROVIDED);
        assert_eq!(report.patient_info.gender, NOT_PROVIDED);
        assert_eq!(report.urgency, Urgency::Medium);
        assert_eq!(report.recommended_actions, MEDIUM_ACTIONS);
        assert_eq!(report.disclaimers.len(), 4);
    }

    #[test]
    fn report_echoes_patient_details() {
        let kb = KnowledgeBase::builtin().expect("builtin catalog");
        let query = DiagnosisQuery::new(["headache"])
            .with_age(30)
            .with_gender("female");
        let result = DiagnosisEngine::new(&kb).diagnose(&query);
        let report = DiagnosisReport::new(&query, &result);

        assert_eq!(report.patient_info.age, "30");
        assert_eq!(report.patient_info.gender, "female");
    }

    #[test]
    fn zero_age_and_empty_gender_are_not_provided() {
        let kb = KnowledgeBase::builtin().expect("builtin catalog");
        let query = DiagnosisQuery::new(["cough"]).with_age(0).with_gender("");
        let result = DiagnosisEngine::new(&kb).diagnose(&query);
        let report = DiagnosisReport::new(&query, &result);

        assert_eq!(report.patient_info.age, NOT_PROVIDED);
        assert_eq!(report.patient_info.gender, NOT_PROVIDED);
    }

    #[test]
    fn urgent_tiers_share_actions() {
        assert_eq!(recommended_actions(Urgency::High), URGENT_ACTIONS);
        assert_eq!(recommended_actions(Urgency::Emergency), URGENT_ACTIONS);
        assert_eq!(recommended_actions(Urgency::Low), LOW_ACTIONS);
    }

    #[test]
    fn report_serialises_with_camel_case_keys() {
        let kb = KnowledgeBase::builtin().expect("builtin catalog");
        let query = DiagnosisQuery::new(["runny nose"]);
        let result = DiagnosisEngine::new(&kb).diagnose(&query);
        let json = serde_json::to_value(DiagnosisReport::new(&query, &result)).expect("json");

        assert!(json.get("possibleConditions").is_some());
        assert!(json.get("recommendedActions").is_some());
        assert_eq!(json["patientInfo"]["age"], "Not provided");
        assert_eq!(
            json["possibleConditions"][0]["matchingSymptoms"][0],
            "Runny nose"
        );
    }
}
