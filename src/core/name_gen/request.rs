//! Generation Request Types
//!
//! JSON shapes exchanged with front-ends (`POST /api/generate` style):
//!
//! ```json
//! { "preset": "shadow", "count": 5, "withMeaning": true,
//!   "override": { "tone": { "darkness": 1.0 } } }
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{NameGenError, Result};
use super::profile::{GeneratedName, OverrideProfile};
use super::random::RandomSource;
use super::registry::ProfileRegistry;
use super::synth::NameSynthesizer;

/// Count used when a request does not ask for one.
pub const DEFAULT_COUNT: usize = 5;

/// A request to generate names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_meaning: Option<bool>,
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_profile: Option<OverrideProfile>,
}

/// Successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub results: Vec<GeneratedName>,
}

/// Failed generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&NameGenError> for ErrorResponse {
    fn from(err: &NameGenError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Fallbacks applied to fields a request leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDefaults {
    pub count: usize,
    pub with_meaning: bool,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            with_meaning: false,
        }
    }
}

impl GenerateRequest {
    pub fn new(preset: impl Into<String>) -> Self {
        Self {
            preset: Some(preset.into()),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_meaning(mut self, with_meaning: bool) -> Self {
        self.with_meaning = Some(with_meaning);
        self
    }

    pub fn with_override(mut self, override_profile: OverrideProfile) -> Self {
        self.override_profile = Some(override_profile);
        self
    }

    /// Effective count; absent or zero means the default.
    pub fn effective_count(&self, defaults: &RequestDefaults) -> usize {
        match self.count {
            Some(count) if count > 0 => count,
            _ => defaults.count,
        }
    }

    /// Run the request against `registry`.
    ///
    /// Counts are not capped here; limiting them is the caller's job.
    pub fn resolve<R: RandomSource>(
        &self,
        registry: &ProfileRegistry,
        synth: &mut NameSynthesizer<R>,
        defaults: &RequestDefaults,
    ) -> Result<GenerateResponse> {
        let preset = self
            .preset
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(NameGenError::MissingPreset)?;

        let results = registry.generate_names_with(
            synth,
            preset,
            self.effective_count(defaults),
            self.override_profile.as_ref(),
            self.with_meaning.unwrap_or(defaults.with_meaning),
        )?;
        Ok(GenerateResponse { results })
    }
}
