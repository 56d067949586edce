//! Language Profile Data Models
//!
//! Defines the data structures that describe a generated language:
//! - Phoneme inventories (consonants, vowels, unused clusters)
//! - Syllable patterns built from `C`/`V` symbols and literal characters
//! - Endings, prefixes and the meanings attached to prefixes
//! - Plural rule and a three-axis tone descriptor
//!
//! # Architecture
//!
//! ```text
//! LanguageProfile                 OverrideProfile (all fields optional)
//!   +-- id, name                    +-- id?, name?
//!   +-- phonemes: Phonemes          +-- phonemes?: PhonemesOverride
//!   +-- patterns: Vec<String>       +-- patterns?
//!   +-- endings: Vec<String>        +-- endings?
//!   +-- prefixes: Vec<String>       +-- prefixes?
//!   +-- meanings: IndexMap          +-- meanings?
//!   +-- plural_rule: PluralRule     +-- plural_rule?
//!   +-- tone: Tone                  +-- tone?: ToneOverride
//!   +-- extra: unknown keys         +-- extra: unknown keys
//! ```
//!
//! Wire names are camelCase (`pluralRule`) so profiles exchanged as JSON
//! keep the shape used by the web collaborators.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{NameGenError, Result};

/// Pattern symbol replaced by a random consonant.
pub const CONSONANT_SYMBOL: char = 'C';
/// Pattern symbol replaced by a random vowel.
pub const VOWEL_SYMBOL: char = 'V';

// ============================================================================
// Plural Rule
// ============================================================================

/// How the plural form of a name is derived from its singular.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PluralRule {
    /// Append "s"
    #[default]
    S,
    /// "a" -> "ae", otherwise append "ae"
    Ae,
    /// Append "uk"
    Uk,
    /// "e" -> "es", otherwise append "es"
    Es,
    /// Heuristic on the last letters (see [`super::plural::custom_plural`])
    Custom,
    /// Any tag not listed above; pluralizes like [`PluralRule::S`].
    Other(String),
}

impl PluralRule {
    /// Parse a rule tag. Unrecognized tags are kept as [`PluralRule::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "s" => Self::S,
            "ae" => Self::Ae,
            "uk" => Self::Uk,
            "es" => Self::Es,
            "custom" => Self::Custom,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag for this rule.
    pub fn as_str(&self) -> &str {
        match self {
            Self::S => "s",
            Self::Ae => "ae",
            Self::Uk => "uk",
            Self::Es => "es",
            Self::Custom => "custom",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this is one of the five documented rules.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for PluralRule {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PluralRule> for String {
    fn from(rule: PluralRule) -> Self {
        rule.as_str().to_string()
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Phonemes and Tone
// ============================================================================

/// Sound inventory of a language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phonemes {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
    /// Carried for UI purposes; synthesis does not read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Phonemes {
    pub fn new<C, V>(consonants: C, vowels: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            consonants: consonants.into_iter().map(Into::into).collect(),
            vowels: vowels.into_iter().map(Into::into).collect(),
            clusters: None,
            extra: Map::new(),
        }
    }
}

/// Emotional tone of a language, each axis conventionally in [0, 1].
///
/// Not read by the synthesizer and never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub harshness: f64,
    pub darkness: f64,
    pub elegance: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tone {
    pub fn new(harshness: f64, darkness: f64, elegance: f64) -> Self {
        Self {
            harshness,
            darkness,
            elegance,
            extra: Map::new(),
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}

// ============================================================================
// Language Profile
// ============================================================================

/// A fully specified language profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProfile {
    /// Unique identifier ("noble", "custom_1718000000000", ...)
    pub id: String,

    /// Display label
    pub name: String,

    pub phonemes: Phonemes,

    /// Templates of `C`, `V` and literal characters
    pub patterns: Vec<String>,

    /// Suffixes; an empty list appends nothing
    #[serde(default)]
    pub endings: Vec<String>,

    /// Optional leading syllables; an empty list disables prefixing
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Prefix -> gloss; need not cover every prefix
    #[serde(default)]
    pub meanings: IndexMap<String, String>,

    #[serde(default)]
    pub plural_rule: PluralRule,

    #[serde(default)]
    pub tone: Tone,

    /// Keys this crate does not know about, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LanguageProfile {
    /// Create an empty profile. It will not validate until patterns are set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phonemes: Phonemes::default(),
            patterns: Vec::new(),
            endings: Vec::new(),
            prefixes: Vec::new(),
            meanings: IndexMap::new(),
            plural_rule: PluralRule::default(),
            tone: Tone::default(),
            extra: Map::new(),
        }
    }

    /// Set the phoneme inventory.
    pub fn with_phonemes(mut self, phonemes: Phonemes) -> Self {
        self.phonemes = phonemes;
        self
    }

    /// Set the syllable patterns.
    pub fn with_patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the endings.
    pub fn with_endings<I>(mut self, endings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.endings = endings.into_iter().map(Into::into).collect();
        self
    }

    /// Set the prefixes.
    pub fn with_prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a meaning to a prefix.
    pub fn with_meaning(mut self, prefix: impl Into<String>, meaning: impl Into<String>) -> Self {
        self.meanings.insert(prefix.into(), meaning.into());
        self
    }

    /// Set the plural rule.
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural_rule = rule;
        self
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Check that the profile has everything the synthesizer draws from.
    ///
    /// Empty endings and prefixes are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(NameGenError::invalid_profile(
                &self.id,
                "patterns must not be empty",
            ));
        }

        if self.phonemes.consonants.is_empty() && self.uses_symbol(CONSONANT_SYMBOL) {
            return Err(NameGenError::invalid_profile(
                &self.id,
                "phonemes.consonants must not be empty when a pattern uses 'C'",
            ));
        }

        if self.phonemes.vowels.is_empty() && self.uses_symbol(VOWEL_SYMBOL) {
            return Err(NameGenError::invalid_profile(
                &self.id,
                "phonemes.vowels must not be empty when a pattern uses 'V'",
            ));
        }

        Ok(())
    }

    /// Whether any pattern contains the given symbol.
    pub fn uses_symbol(&self, symbol: char) -> bool {
        self.patterns.iter().any(|p| p.contains(symbol))
    }

    /// Look up the meaning of a prefix.
    pub fn meaning_of(&self, prefix: &str) -> Option<&str> {
        self.meanings.get(prefix).map(String::as_str)
    }
}

// ============================================================================
// Override Profile
// ============================================================================

/// Partial phoneme inventory used as merge input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhonemesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consonants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vowels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial tone used as merge input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToneOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harshness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elegance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Tone> for ToneOverride {
    fn from(tone: Tone) -> Self {
        Self {
            harshness: Some(tone.harshness),
            darkness: Some(tone.darkness),
            elegance: Some(tone.elegance),
            extra: tone.extra,
        }
    }
}

/// A [`LanguageProfile`] with every field optional.
///
/// Only ever used as input to [`super::merge::merge_profile`]. A JSON
/// `null` deserializes to `None` and therefore leaves the base untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonemes: Option<PhonemesOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_rule: Option<PluralRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<ToneOverride>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OverrideProfile {
    /// Create an empty override (merging it changes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the consonant inventory.
    pub fn with_consonants<I>(mut self, consonants: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.phonemes.get_or_insert_with(Default::default).consonants =
            Some(consonants.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the vowel inventory.
    pub fn with_vowels<I>(mut self, vowels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.phonemes.get_or_insert_with(Default::default).vowels =
            Some(vowels.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the patterns.
    pub fn with_patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the endings.
    pub fn with_endings<I>(mut self, endings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.endings = Some(endings.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the prefixes.
    pub fn with_prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Add or replace one prefix meaning.
    pub fn with_meaning(mut self, prefix: impl Into<String>, meaning: impl Into<String>) -> Self {
        self.meanings
            .get_or_insert_with(IndexMap::new)
            .insert(prefix.into(), meaning.into());
        self
    }

    /// Replace the plural rule.
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.plural_rule = Some(rule);
        self
    }

    /// Replace all three tone axes.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone.into());
        self
    }

    /// Replace the harshness axis only.
    pub fn with_harshness(mut self, value: f64) -> Self {
        self.tone.get_or_insert_with(Default::default).harshness = Some(value);
        self
    }

    /// Replace the darkness axis only.
    pub fn with_darkness(mut self, value: f64) -> Self {
        self.tone.get_or_insert_with(Default::default).darkness = Some(value);
        self
    }

    /// Replace the elegance axis only.
    pub fn with_elegance(mut self, value: f64) -> Self {
        self.tone.get_or_insert_with(Default::default).elegance = Some(value);
        self
    }

    /// True when merging this override would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Split a comma-separated phoneme list ("k, r ,th") into trimmed items.
///
/// Empty items are dropped.
pub fn parse_phoneme_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Generated Name
// ============================================================================

/// One synthesized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub singular: String,
    pub plural: String,
    /// Present only when meanings were requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
