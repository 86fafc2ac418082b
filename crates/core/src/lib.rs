//! # CareCheck Core
//!
//! Core decision logic for the CareCheck healthcare assistant.
//!
//! This crate contains pure, synchronous operations over a read-only catalog:
//! - The [`KnowledgeBase`] of symptoms, diseases and medicines, with search and lookup
//! - The [`DiagnosisEngine`], mapping reported symptoms to a ranked differential diagnosis
//! - Startup configuration ([`CoreConfig`]) and catalog loading
//!
//! **No API concerns**: HTTP servers, request envelopes and CLI output belong in `api-rest`,
//! `api-shared` or `carecheck-cli`.
//!
//! The knowledge base is built once and shared by reference; nothing here keeps state between
//! calls, so every operation is safe to run concurrently against the same snapshot.

pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod knowledge;
pub mod validation;

pub use carecheck_types::{NonEmptyText, Severity, Urgency};
pub use config::CoreConfig;
pub use diagnosis::{DiagnosisEngine, DiagnosisQuery, DiagnosisResult, PossibleCondition};
pub use error::{CatalogError, CatalogResult};
pub use knowledge::{Disease, Dosage, KnowledgeBase, Medicine, PriceRange, Symptom};
