//! Centralized validation of case file input.
//!
//! Tree operations never validate; everything here runs at the loading
//! boundary before profiles reach the registry.

use std::collections::HashSet;

/// Maximum number of profiles accepted from a single case file
pub const MAX_PROFILES: usize = 1_000_000;

/// Maximum number of STR markers on a single profile
pub const MAX_MARKERS_PER_PROFILE: usize = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Profile #{0} has an empty first or last name")]
    EmptyName(usize),

    #[error("Profile '{name}' has an empty repeat unit at marker #{marker}")]
    EmptyRepeatUnit { name: String, marker: usize },

    #[error("Profile '{name}' has an invalid repeat unit '{unit}': whitespace is not allowed")]
    InvalidRepeatUnit { name: String, unit: String },

    #[error("Duplicate profile name: '{0}'")]
    DuplicateName(String),

    #[error("Too many profiles: {0} exceeds maximum of {MAX_PROFILES}")]
    TooManyProfiles(usize),

    #[error("Profile '{name}' has {count} markers, exceeding maximum of {MAX_MARKERS_PER_PROFILE}")]
    TooManyMarkers { name: String, count: usize },
}

/// Check that a repeat unit is non-empty and contains no whitespace.
///
/// # Examples
///
/// ```
/// use str_match::utils::validation::is_valid_repeat_unit;
///
/// assert!(is_valid_repeat_unit("AGAT"));
/// assert!(!is_valid_repeat_unit(""));
/// assert!(!is_valid_repeat_unit("AG AT"));
/// ```
#[must_use]
pub fn is_valid_repeat_unit(unit: &str) -> bool {
    !unit.is_empty() && !unit.chars().any(char::is_whitespace)
}

/// Check the number of profiles against [`MAX_PROFILES`].
///
/// # Errors
///
/// Returns `ValidationError::TooManyProfiles` if `count` exceeds the limit.
pub fn check_profile_limit(count: usize) -> Result<(), ValidationError> {
    if count > MAX_PROFILES {
        Err(ValidationError::TooManyProfiles(count))
    } else {
        Ok(())
    }
}

/// Validate the markers of the profile stored under `name`.
///
/// # Errors
///
/// Returns `ValidationError::TooManyMarkers` if the profile has too many markers,
/// `ValidationError::EmptyRepeatUnit` for an empty unit, or
/// `ValidationError::InvalidRepeatUnit` for a unit containing whitespace.
pub fn validate_markers<'a>(
    name: &str,
    units: impl ExactSizeIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let count = units.len();
    if count > MAX_MARKERS_PER_PROFILE {
        return Err(ValidationError::TooManyMarkers {
            name: name.to_string(),
            count,
        });
    }

    for (i, unit) in units.enumerate() {
        if unit.is_empty() {
            return Err(ValidationError::EmptyRepeatUnit {
                name: name.to_string(),
                // 1-based for user-facing messages
                marker: i + 1,
            });
        }
        if !is_valid_repeat_unit(unit) {
            return Err(ValidationError::InvalidRepeatUnit {
                name: name.to_string(),
                unit: unit.to_string(),
            });
        }
    }

    Ok(())
}

/// Tracks registry keys seen so far to reject name collisions.
#[derive(Debug, Default)]
pub struct NameGuard {
    seen: HashSet<String>,
}

impl NameGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`, failing if it was already recorded.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateName` on a repeated key.
    pub fn admit(&mut self, key: &str) -> Result<(), ValidationError> {
        if self.seen.insert(key.to_string()) {
            Ok(())
        } else {
            Err(ValidationError::DuplicateName(key.to_string()))
        }
    }
}
