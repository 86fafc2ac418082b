//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_REST_ADDR};
use crate::knowledge::KnowledgeBase;
use crate::validation::validate_language_tag;
use crate::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    catalog_path: Option<PathBuf>,
    rest_addr: String,
    default_language: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `catalog_path` of `None` selects the catalog built into the crate.
    pub fn new(
        catalog_path: Option<PathBuf>,
        rest_addr: String,
        default_language: String,
    ) -> CatalogResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "rest_addr cannot be empty".into(),
            ));
        }
        validate_language_tag(&default_language)?;

        Ok(Self {
            catalog_path,
            rest_addr,
            default_language,
        })
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Load the knowledge base this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the override file cannot be read or fails validation.
    pub fn load_knowledge_base(&self) -> CatalogResult<KnowledgeBase> {
        match &self.catalog_path {
            Some(path) => {
                tracing::info!("loading catalog from {}", path.display());
                KnowledgeBase::from_path(path)
            }
            None => KnowledgeBase::builtin(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            rest_addr: DEFAULT_REST_ADDR.into(),
            default_language: DEFAULT_LANGUAGE.into(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the catalog override path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `None` (use the built-in catalog).
///
/// # Errors
///
/// Returns `CatalogError::InvalidInput` if the path does not name an existing file.
pub fn catalog_path_from_env_value(value: Option<String>) -> CatalogResult<Option<PathBuf>> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };

    let path = PathBuf::from(value);
    if !path.is_file() {
        return Err(CatalogError::InvalidInput(format!(
            "catalog override is not a file: {}",
            path.display()
        )));
    }
    Ok(Some(path))
}

/// Parse the default response language from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_LANGUAGE`].
pub fn language_from_env_value(value: Option<String>) -> CatalogResult<String> {
    match non_blank(value) {
        Some(tag) => {
            validate_language_tag(&tag)?;
            Ok(tag)
        }
        None => Ok(DEFAULT_LANGUAGE.into()),
    }
}

/// Parse the REST bind address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}
