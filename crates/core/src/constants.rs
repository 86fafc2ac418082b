//! Constants used throughout the CareCheck core crate.
//!
//! Fixed vocabularies, default settings and the user-facing wording attached to every
//! diagnosis result live here so the engine and the API layers agree on them.

/// Environment variable naming an alternative catalog file.
pub const CATALOG_PATH_ENV: &str = "CARECHECK_CATALOG";

/// Environment variable for the REST server bind address.
pub const REST_ADDR_ENV: &str = "CARECHECK_REST_ADDR";

/// Environment variable for the default response language.
pub const LANGUAGE_ENV: &str = "CARECHECK_LANGUAGE";

/// Default REST bind address when no explicit address is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default response language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Maximum number of candidate conditions returned by a diagnosis.
pub const MAX_CONDITIONS: usize = 5;

/// Reported symptoms that force [`carecheck_types::Urgency::Emergency`].
///
/// Matched by exact lowercase equality, not substring.
pub const EMERGENCY_SYMPTOMS: [&str; 4] = [
    "chest pain",
    "difficulty breathing",
    "severe headache",
    "high fever",
];

/// Baseline recommendations present on every diagnosis, in order.
pub const BASELINE_RECOMMENDATIONS: [&str; 2] = [
    "This is for informational purposes only and not a substitute for professional medical advice",
    "Consult a healthcare provider for proper diagnosis and treatment",
];

pub const EMERGENCY_RECOMMENDATION: &str =
    "Seek immediate medical attention or call emergency services";

pub const HIGH_URGENCY_RECOMMENDATION: &str = "Schedule an appointment with your doctor soon";

pub const MEDIUM_URGENCY_RECOMMENDATION: &str =
    "Monitor symptoms and consult a doctor if they worsen or persist";

/// Fixed disclaimer attached to every diagnosis result.
pub const DISCLAIMER: &str = "This symptom checker is for informational purposes only. It is not intended to be a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition.";
