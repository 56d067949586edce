//! Profile Registry
//!
//! The known-profiles table that preset ids resolve against: the built-in
//! catalog plus any user-defined custom profiles.

use indexmap::IndexMap;

use super::errors::{NameGenError, Result};
use super::merge::merge_profile;
use super::presets::{builtin_presets, is_builtin};
use super::profile::{GeneratedName, LanguageProfile, OverrideProfile};
use super::random::RandomSource;
use super::synth::NameSynthesizer;

/// Id prefix given to profiles created with [`ProfileRegistry::save_custom`].
pub const CUSTOM_ID_PREFIX: &str = "custom_";

/// Preset id -> profile, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, LanguageProfile>,
}

impl ProfileRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in presets.
    pub fn with_builtins() -> Self {
        let profiles = builtin_presets()
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { profiles }
    }

    pub fn get(&self, id: &str) -> Option<&LanguageProfile> {
        self.profiles.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        is_builtin(id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Known ids, built-ins first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.values()
    }

    /// Profiles that are not built in.
    pub fn custom_profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.values().filter(|p| !is_builtin(&p.id))
    }

    /// Resolve `preset_id` and merge `override_profile` into it.
    pub fn build_profile(
        &self,
        preset_id: &str,
        override_profile: Option<&OverrideProfile>,
    ) -> Result<LanguageProfile> {
        let base = self
            .get(preset_id)
            .ok_or_else(|| NameGenError::profile_not_found(preset_id))?;
        let profile = merge_profile(base, override_profile);
        if !profile.plural_rule.is_known() {
            log::warn!(
                "Profile '{}' uses unrecognized plural rule '{}', pluralizing with 's'",
                profile.id,
                profile.plural_rule
            );
        }
        Ok(profile)
    }

    /// Generate `count` names from a preset with an entropy-seeded source.
    pub fn generate_names(
        &self,
        preset_id: &str,
        count: usize,
        override_profile: Option<&OverrideProfile>,
        with_meaning: bool,
    ) -> Result<Vec<GeneratedName>> {
        let mut synth = NameSynthesizer::new();
        self.generate_names_with(&mut synth, preset_id, count, override_profile, with_meaning)
    }

    /// Like [`Self::generate_names`] but drawing from the given synthesizer.
    pub fn generate_names_with<R: RandomSource>(
        &self,
        synth: &mut NameSynthesizer<R>,
        preset_id: &str,
        count: usize,
        override_profile: Option<&OverrideProfile>,
        with_meaning: bool,
    ) -> Result<Vec<GeneratedName>> {
        let profile = self.build_profile(preset_id, override_profile)?;
        log::debug!(
            "Generating {} name(s) from '{}' (override: {}, meaning: {})",
            count,
            preset_id,
            override_profile.is_some(),
            with_meaning
        );
        synth.generate_batch(&profile, count, with_meaning)
    }

    /// Add or replace a custom profile.
    ///
    /// Built-in ids are rejected and the profile must validate.
    pub fn insert_custom(&mut self, profile: LanguageProfile) -> Result<()> {
        if is_builtin(&profile.id) {
            return Err(NameGenError::builtin_immutable(&profile.id));
        }
        profile.validate()?;
        log::info!("Registered custom profile '{}' ({})", profile.id, profile.name);
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Remove a custom profile, returning it.
    pub fn remove_custom(&mut self, id: &str) -> Result<LanguageProfile> {
        if is_builtin(id) {
            return Err(NameGenError::builtin_immutable(id));
        }
        let removed = self
            .profiles
            .shift_remove(id)
            .ok_or_else(|| NameGenError::profile_not_found(id))?;
        log::info!("Removed custom profile '{}'", id);
        Ok(removed)
    }

    /// Save `base_id` + `override_profile` as a new custom profile.
    ///
    /// The new profile gets a fresh `custom_<millis>` id and the trimmed
    /// display name. Returns the new id.
    pub fn save_custom(
        &mut self,
        base_id: &str,
        display_name: &str,
        override_profile: Option<&OverrideProfile>,
    ) -> Result<String> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(NameGenError::invalid_profile(
                base_id,
                "custom profile name must not be blank",
            ));
        }

        let mut profile = self.build_profile(base_id, override_profile)?;
        profile.id = self.fresh_custom_id();
        profile.name = display_name.to_string();

        let id = profile.id.clone();
        self.insert_custom(profile)?;
        Ok(id)
    }

    fn fresh_custom_id(&self) -> String {
        let stamp = chrono::Utc::now().timestamp_millis();
        let base = format!("{CUSTOM_ID_PREFIX}{stamp}");
        if !self.contains(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}_{n}");
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
