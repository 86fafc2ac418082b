//! Symptom-to-disease matching.
//!
//! [`DiagnosisEngine::diagnose`] turns free-text reported symptoms into a ranked differential
//! diagnosis with an urgency tier and recommended actions.
//!
//! ## Matching
//! Input tokens and catalog symptom names are compared in lowercase. A disease symptom matches
//! when it contains any input token or any input token contains it. This tolerates both
//! abbreviation ("fever" matches "High fever") and elaboration, and it also lets short tokens
//! such as "pain" match every symptom containing that word.
//!
//! ## Probability
//! `probability` is a coverage ratio: the share of the disease's listed symptoms accounted for by
//! the input, rounded to the nearest integer percent. It is not a statistical likelihood.
//!
//! ## Urgency
//! 1. `emergency` if any reported symptom is exactly one of [`EMERGENCY_SYMPTOMS`]
//! 2. `high` if any matched disease is severe or critical
//! 3. `medium` if anything matched
//! 4. `low` otherwise

use crate::constants::{
    BASELINE_RECOMMENDATIONS, DISCLAIMER, EMERGENCY_RECOMMENDATION, EMERGENCY_SYMPTOMS,
    HIGH_URGENCY_RECOMMENDATION, MAX_CONDITIONS, MEDIUM_URGENCY_RECOMMENDATION,
};
use crate::knowledge::{Disease, KnowledgeBase};
use carecheck_types::Urgency;

/// A single diagnosis request.
///
/// Age and gender are carried for callers that echo them back; scoring does not use them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosisQuery {
    pub symptoms: Vec<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

impl DiagnosisQuery {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            age: None,
            gender: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}

/// One ranked candidate in a differential diagnosis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PossibleCondition<'kb> {
    pub disease: &'kb Disease,
    /// Coverage ratio in percent, 1..=100 for any returned condition.
    pub probability: u8,
    /// Entries of `disease.common_symptoms` that matched, in catalog order.
    pub matching_symptoms: Vec<&'kb str>,
}

/// Engine output. Borrows disease records from the knowledge base it was computed against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosisResult<'kb> {
    /// Highest probability first, at most [`MAX_CONDITIONS`] entries.
    pub possible_conditions: Vec<PossibleCondition<'kb>>,
    pub urgency: Urgency,
    /// Most urgent instruction first.
    pub recommendations: Vec<String>,
    pub disclaimer: &'static str,
}

/// Stateless matcher over a borrowed knowledge base.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosisEngine<'kb> {
    knowledge: &'kb KnowledgeBase,
}

impl<'kb> DiagnosisEngine<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Rank candidate conditions for the reported symptoms.
    ///
    /// Never fails: unknown or empty input yields no conditions and `low` urgency.
    pub fn diagnose(&self, query: &DiagnosisQuery) -> DiagnosisResult<'kb> {
        let inputs = normalise_inputs(&query.symptoms);

        let mut conditions: Vec<PossibleCondition<'kb>> = self
            .knowledge
            .diseases()
            .iter()
            .filter_map(|disease| score_disease(disease, &inputs))
            .collect();

        // Stable: equal probabilities keep catalog order.
        conditions.sort_by(|a, b| b.probability.cmp(&a.probability));

        let urgency = classify_urgency(&inputs, &conditions);
        tracing::debug!(
            reported = inputs.len(),
            matched = conditions.len(),
            urgency = %urgency,
            "diagnosis computed"
        );

        conditions.truncate(MAX_CONDITIONS);

        DiagnosisResult {
            possible_conditions: conditions,
            urgency,
            recommendations: recommendations_for(urgency),
            disclaimer: DISCLAIMER,
        }
    }
}

/// Lowercase every reported symptom. Tokens are otherwise taken as given.
fn normalise_inputs(symptoms: &[String]) -> Vec<String> {
    symptoms.iter().map(|s| s.to_lowercase()).collect()
}

fn score_disease<'kb>(disease: &'kb Disease, inputs: &[String]) -> Option<PossibleCondition<'kb>> {
    let matching_symptoms: Vec<&'kb str> = disease
        .common_symptoms
        .iter()
        .filter(|symptom| {
            let symptom = symptom.to_lowercase();
            inputs
                .iter()
                .any(|input| symptom.contains(input.as_str()) || input.contains(symptom.as_str()))
        })
        .map(String::as_str)
        .collect();

    if matching_symptoms.is_empty() {
        return None;
    }

    Some(PossibleCondition {
        disease,
        probability: coverage_percent(matching_symptoms.len(), disease.common_symptoms.len()),
        matching_symptoms,
    })
}

/// `round(100 * matched / total)` with halves rounded up, in integer arithmetic.
fn coverage_percent(matched: usize, total: usize) -> u8 {
    debug_assert!(total > 0 && matched <= total);
    let percent = (200 * matched + total) / (2 * total);
    percent.min(100) as u8
}

fn classify_urgency(inputs: &[String], conditions: &[PossibleCondition<'_>]) -> Urgency {
    if inputs
        .iter()
        .any(|input| EMERGENCY_SYMPTOMS.contains(&input.as_str()))
    {
        Urgency::Emergency
    } else if conditions.iter().any(|c| c.disease.severity.is_serious()) {
        Urgency::High
    } else if !conditions.is_empty() {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

fn recommendations_for(urgency: Urgency) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(BASELINE_RECOMMENDATIONS.len() + 1);
    match urgency {
        Urgency::Emergency => recommendations.push(EMERGENCY_RECOMMENDATION.to_string()),
        Urgency::High => recommendations.push(HIGH_URGENCY_RECOMMENDATION.to_string()),
        Urgency::Medium | Urgency::Low => {}
    }
    recommendations.extend(BASELINE_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    if urgency == Urgency::Medium {
        recommendations.push(MEDIUM_URGENCY_RECOMMENDATION.to_string());
    }
    recommendations
}
