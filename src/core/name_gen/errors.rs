//! Name Generation Error Types
//!
//! Error types for profile resolution, profile validation and custom
//! profile persistence. Uses thiserror with rich context fields.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Store Errors
// ============================================================================

/// Errors that can occur while reading or writing stored data
/// (custom profiles, name history).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the file.
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the file (or create its directory).
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its content does not parse.
    #[error("Failed to parse {path} as {format}: {reason}")]
    ParseFailed {
        path: PathBuf,
        format: String,
        reason: String,
    },

    /// Data could not be serialized.
    #[error("Failed to serialize stored data: {reason}")]
    SerializeFailed { reason: String },
}

impl StoreError {
    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a WriteFailed error.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error.
    pub fn parse_failed(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::ParseFailed {
            path: path.into(),
            format: format.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the file exists but holds unreadable content.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailed { .. })
    }
}

// ============================================================================
// Name Generation Errors
// ============================================================================

/// Errors that can occur while resolving profiles or generating names.
#[derive(Error, Debug)]
pub enum NameGenError {
    /// Requested preset id is not in the known-profiles table.
    #[error("Preset not found: {preset_id}")]
    ProfileNotFound { preset_id: String },

    /// Profile lacks what generation needs (empty patterns, phonemes, ...).
    #[error("Invalid profile '{profile_id}': {reason}")]
    InvalidProfile { profile_id: String, reason: String },

    /// Request did not name a preset.
    #[error("Preset is required")]
    MissingPreset,

    /// Built-in presets cannot be replaced or removed.
    #[error("Preset '{preset_id}' is built in and cannot be modified")]
    BuiltinProfileImmutable { preset_id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl NameGenError {
    /// Create a ProfileNotFound error.
    pub fn profile_not_found(preset_id: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            preset_id: preset_id.into(),
        }
    }

    /// Create an InvalidProfile error.
    pub fn invalid_profile(profile_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            profile_id: profile_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a BuiltinProfileImmutable error.
    pub fn builtin_immutable(preset_id: impl Into<String>) -> Self {
        Self::BuiltinProfileImmutable {
            preset_id: preset_id.into(),
        }
    }

    /// Check if the caller caused this error (4xx rather than 5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. }
                | Self::InvalidProfile { .. }
                | Self::MissingPreset
                | Self::BuiltinProfileImmutable { .. }
        )
    }
}

/// Type alias for Result with NameGenError.
pub type Result<T> = std::result::Result<T, NameGenError>;

// ============================================================================
// Tests
// ============================================================================
