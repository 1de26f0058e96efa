//! Manifest validation rules.
//!
//! - Every package needs a non-empty name
//! - `commit` and `host` only apply to git packages
//! - `version` and `git` cannot both be set

use crate::config::schema::ManifestConfig;
use crate::error::{EnsureError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Index of the offending entry in `packages`
    pub index: usize,
}

/// Validate a manifest and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_manifest(config: &ManifestConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in config.packages.iter().enumerate() {
        let label = if entry.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-name".to_string(),
                message: format!("Package #{} has no name", index + 1),
                index,
            });
            format!("#{}", index + 1)
        } else {
            format!("'{}'", entry.name)
        };

        if entry.git.is_none() {
            if entry.commit.is_some() {
                errors.push(ValidationError {
                    rule: "commit-without-git".to_string(),
                    message: format!("Package {} sets 'commit' without 'git'", label),
                    index,
                });
            }
            if entry.host.is_some() {
                errors.push(ValidationError {
                    rule: "host-without-git".to_string(),
                    message: format!("Package {} sets 'host' without 'git'", label),
                    index,
                });
            }
        }

        if entry.git.is_some() && entry.version.is_some() {
            errors.push(ValidationError {
                rule: "version-and-git".to_string(),
                message: format!("Package {} sets both 'version' and 'git'", label),
                index,
            });
        }
    }

    errors
}

/// Validate a manifest, failing with every message joined.
pub fn validate(config: &ManifestConfig) -> Result<()> {
    let errors = validate_manifest(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnsureError::ManifestValidationError {
            message: messages.join("; "),
        })
    }
}
