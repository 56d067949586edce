//! Profile Merger
//!
//! Combines a base [`LanguageProfile`] with a partial [`OverrideProfile`].
//!
//! Each type declares its field policies once in its [`Merge`] impl:
//! - sequences and scalars are replaced wholesale (lists never concatenate)
//! - structured records (`phonemes`, `tone`, `meanings`) merge recursively
//! - unknown keys merge as JSON: objects recurse, anything else replaces
//!
//! Inputs are never mutated; every call returns a fresh value.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::profile::{
    LanguageProfile, OverrideProfile, Phonemes, PhonemesOverride, Tone, ToneOverride,
};

/// Produce a new value from `self` with `patch` layered on top.
pub trait Merge {
    type Patch;

    fn merge(&self, patch: &Self::Patch) -> Self;
}

/// Replace policy: the patch value wins when present.
fn replace<T: Clone>(base: &T, patch: &Option<T>) -> T {
    patch.as_ref().unwrap_or(base).clone()
}

impl Merge for Tone {
    type Patch = ToneOverride;

    fn merge(&self, patch: &ToneOverride) -> Self {
        Self {
            harshness: patch.harshness.unwrap_or(self.harshness),
            darkness: patch.darkness.unwrap_or(self.darkness),
            elegance: patch.elegance.unwrap_or(self.elegance),
            extra: merge_json_maps(&self.extra, &patch.extra),
        }
    }
}

impl Merge for Phonemes {
    type Patch = PhonemesOverride;

    fn merge(&self, patch: &PhonemesOverride) -> Self {
        Self {
            consonants: replace(&self.consonants, &patch.consonants),
            vowels: replace(&self.vowels, &patch.vowels),
            clusters: patch.clusters.clone().or_else(|| self.clusters.clone()),
            extra: merge_json_maps(&self.extra, &patch.extra),
        }
    }
}

/// Meanings are a record: named keys are added or replaced, others kept.
impl Merge for IndexMap<String, String> {
    type Patch = IndexMap<String, String>;

    fn merge(&self, patch: &Self::Patch) -> Self {
        let mut merged = self.clone();
        for (prefix, meaning) in patch {
            merged.insert(prefix.clone(), meaning.clone());
        }
        merged
    }
}

impl Merge for LanguageProfile {
    type Patch = OverrideProfile;

    fn merge(&self, patch: &OverrideProfile) -> Self {
        Self {
            id: replace(&self.id, &patch.id),
            name: replace(&self.name, &patch.name),
            phonemes: merge_nested(&self.phonemes, &patch.phonemes),
            patterns: replace(&self.patterns, &patch.patterns),
            endings: replace(&self.endings, &patch.endings),
            prefixes: replace(&self.prefixes, &patch.prefixes),
            meanings: merge_nested(&self.meanings, &patch.meanings),
            plural_rule: replace(&self.plural_rule, &patch.plural_rule),
            tone: merge_nested(&self.tone, &patch.tone),
            extra: merge_json_maps(&self.extra, &patch.extra),
        }
    }
}

/// Recurse policy: merge when the patch carries the record, else keep base.
fn merge_nested<T: Merge + Clone>(base: &T, patch: &Option<T::Patch>) -> T {
    match patch {
        Some(patch) => base.merge(patch),
        None => base.clone(),
    }
}

/// Merge `override_profile` into `base`.
///
/// With no override the result is a copy of `base`.
pub fn merge_profile(
    base: &LanguageProfile,
    override_profile: Option<&OverrideProfile>,
) -> LanguageProfile {
    match override_profile {
        None => base.clone(),
        Some(patch) => {
            if !patch.extra.is_empty() {
                log::warn!(
                    "Override for '{}' carries unrecognized keys: {:?}",
                    base.id,
                    patch.extra.keys().collect::<Vec<_>>()
                );
            }
            base.merge(patch)
        }
    }
}

/// Deep-merge two JSON maps. `null` in the patch means "leave as is".
pub fn merge_json_maps(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in patch {
        if value.is_null() {
            continue;
        }
        let next = match merged.get(key) {
            Some(existing) => merge_json_values(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// Deep-merge two JSON values: objects recurse, anything else replaces.
pub fn merge_json_values(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (_, Value::Null) => base.clone(),
        (Value::Object(base), Value::Object(patch)) => Value::Object(merge_json_maps(base, patch)),
        _ => patch.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
