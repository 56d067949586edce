//! Name Generation Engine
//!
//! Procedurally generates fantasy names (singular, plural and an optional
//! meaning) from configurable language profiles.
//!
//! # Architecture
//!
//! ```text
//! (preset_id, count, override?, with_meaning)
//!        |
//!        v
//! ProfileRegistry::build_profile --> merge_profile(base, override)
//!        |
//!        v
//! NameSynthesizer::generate_batch --> count x GeneratedName
//!        |
//!        v
//! HistoryStore::record (binary only; newest first, capped)
//! ```
//!
//! The engine has no global state: every synthesizer owns its random
//! source and merged profiles live only for the call that built them.

pub mod errors;
pub mod history;
pub mod merge;
pub mod plural;
pub mod presets;
pub mod profile;
pub mod random;
pub mod registry;
pub mod request;
pub mod store;
pub mod synth;

use std::sync::OnceLock;

pub use errors::{NameGenError, Result, StoreError};
pub use history::{export_line, HistoryStore, NameHistory, DEFAULT_EXPORT_FILE, HISTORY_LIMIT};
pub use merge::{merge_profile, Merge};
pub use plural::{custom_plural, pluralize};
pub use presets::{builtin_preset, builtin_presets, BUILTIN_PRESET_IDS};
pub use profile::{
    parse_phoneme_list, GeneratedName, LanguageProfile, OverrideProfile, Phonemes,
    PhonemesOverride, PluralRule, Tone, ToneOverride,
};
pub use random::{RandomSource, ScriptedSource};
pub use registry::ProfileRegistry;
pub use request::{ErrorResponse, GenerateRequest, GenerateResponse, RequestDefaults};
pub use store::{LoadOutcome, ProfileStore};
pub use synth::{capitalize, generate_name, NameSynthesizer, SynthesisOptions};

static BUILTINS: OnceLock<ProfileRegistry> = OnceLock::new();

fn builtin_registry() -> &'static ProfileRegistry {
    BUILTINS.get_or_init(ProfileRegistry::with_builtins)
}

/// Resolve a built-in preset and merge `override_profile` into it.
pub fn build_profile(
    preset_id: &str,
    override_profile: Option<&OverrideProfile>,
) -> Result<LanguageProfile> {
    builtin_registry().build_profile(preset_id, override_profile)
}

/// Generate `count` names from a built-in preset.
///
/// Fails with [`NameGenError::ProfileNotFound`] for unknown ids and
/// [`NameGenError::InvalidProfile`] when the override leaves the profile
/// unusable. Either all names are produced or none.
pub fn generate_names(
    preset_id: &str,
    count: usize,
    override_profile: Option<&OverrideProfile>,
    with_meaning: bool,
) -> Result<Vec<GeneratedName>> {
    builtin_registry().generate_names(preset_id, count, override_profile, with_meaning)
}
