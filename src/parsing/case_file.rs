use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::marker::StrMarker;
use crate::core::profile::Profile;
use crate::core::types::PersonName;
use crate::registry::store::ProfileRegistry;
use crate::utils::validation::{check_profile_limit, validate_markers, NameGuard, ValidationError};

#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("Failed to read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse case file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid case file: {0}")]
    Validation(#[from] ValidationError),
}

/// One person's entry in a case file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub markers: Vec<StrMarker>,
}

impl ProfileRecord {
    pub fn person(&self) -> PersonName {
        PersonName::new(self.first_name.trim(), self.last_name.trim())
    }
}

/// Serializable case file format: the two unknown sequences and the candidate profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub first_sequence: String,
    pub second_sequence: String,

    #[serde(default)]
    pub profiles: Vec<ProfileRecord>,
}

impl CaseFile {
    /// Parse a case file from JSON text without validating it
    ///
    /// # Errors
    ///
    /// Returns `CaseFileError::Parse` if the JSON is malformed or a field has the
    /// wrong type (including negative occurrence counts).
    pub fn from_json(json: &str) -> Result<Self, CaseFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check names, repeat units and limits
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in file order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_profile_limit(self.profiles.len())?;

        let mut guard = NameGuard::new();
        for (i, record) in self.profiles.iter().enumerate() {
            if record.first_name.trim().is_empty() || record.last_name.trim().is_empty() {
                // 1-based for user-facing messages
                return Err(ValidationError::EmptyName(i + 1));
            }

            let key = record.person().key();
            validate_markers(
                &key,
                record.markers.iter().map(|marker| marker.repeat_unit.as_str()),
            )?;
            guard.admit(&key)?;
        }

        Ok(())
    }

    /// Validate and build a registry, inserting profiles in file order
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the case file is invalid; nothing is
    /// inserted in that case.
    pub fn into_registry(self) -> Result<ProfileRegistry, ValidationError> {
        self.validate()?;

        let mut registry = ProfileRegistry::new();
        registry.load(self.first_sequence, self.second_sequence);
        for record in self.profiles {
            let key = record.person().key();
            registry.insert(key, Profile::new(record.markers));
        }

        debug!(height = registry.height(), "Built profile tree");
        Ok(registry)
    }
}

/// Load a case file from disk into a populated registry
///
/// # Errors
///
/// Returns `CaseFileError::Io` if the file cannot be read, `CaseFileError::Parse`
/// if it is not a valid case file, or `CaseFileError::Validation` if its
/// contents are rejected.
pub fn load_case_file(path: &Path) -> Result<ProfileRegistry, CaseFileError> {
    let content = std::fs::read_to_string(path)?;
    let registry = parse_case_text(&content)?;
    info!(
        path = %path.display(),
        profiles = registry.len(),
        "Loaded case file"
    );
    Ok(registry)
}

/// Parse case file JSON text into a populated registry
///
/// # Errors
///
/// Returns `CaseFileError::Parse` for malformed JSON or
/// `CaseFileError::Validation` for rejected contents.
pub fn parse_case_text(text: &str) -> Result<ProfileRegistry, CaseFileError> {
    Ok(CaseFile::from_json(text)?.into_registry()?)
}
