//! Name Synthesizer
//!
//! Builds names from a fully specified [`LanguageProfile`]:
//!
//! ```text
//! pattern --expand--> core
//! [prefix] + core + [ending] = singular (raw)
//! capitalize(raw)            = singular
//! capitalize(pluralize(raw)) = plural
//! prefix meaning(s) joined   = meaning ("unknown" when none)
//! ```
//!
//! Randomness comes from the synthesizer's own [`RandomSource`]; nothing
//! is shared between synthesizers.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::errors::{NameGenError, Result};
use super::plural::pluralize;
use super::profile::{GeneratedName, LanguageProfile, CONSONANT_SYMBOL, VOWEL_SYMBOL};
use super::random::{choose, RandomSource};

/// Chance that a name gets one of the profile's prefixes.
pub const DEFAULT_PREFIX_PROBABILITY: f64 = 0.3;

/// Meaning reported when no component contributes one.
pub const UNKNOWN_MEANING: &str = "unknown";

/// Separator between meaning contributions.
pub const MEANING_SEPARATOR: &str = "-";

// ============================================================================
// Options
// ============================================================================

/// Tunables for the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisOptions {
    /// Probability of prefixing a name, in [0, 1]
    pub prefix_probability: f64,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            prefix_probability: DEFAULT_PREFIX_PROBABILITY,
        }
    }
}

// ============================================================================
// Meaning Assembly
// ============================================================================

/// Ordered meaning contributions of one name's components.
///
/// Only the prefix contributes today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeaningParts {
    parts: Vec<String>,
}

impl MeaningParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contribution; missing or empty glosses are skipped.
    pub fn push(&mut self, gloss: Option<&str>) {
        if let Some(gloss) = gloss.filter(|g| !g.is_empty()) {
            self.parts.push(gloss.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Join contributions with `-`, or [`UNKNOWN_MEANING`] if there are none.
    pub fn finish(self) -> String {
        if self.is_empty() {
            UNKNOWN_MEANING.to_string()
        } else {
            self.parts.join(MEANING_SEPARATOR)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pick_required<'a, S: RandomSource + ?Sized>(
    items: &'a [String],
    field: &str,
    profile_id: &str,
    source: &mut S,
) -> Result<&'a str> {
    choose(items, source)
        .map(String::as_str)
        .ok_or_else(|| NameGenError::invalid_profile(profile_id, format!("{field} must not be empty")))
}

/// Replace each `C`/`V` in `pattern` with a random consonant/vowel.
///
/// Every other character is copied through.
pub fn expand_pattern<S: RandomSource + ?Sized>(
    pattern: &str,
    profile: &LanguageProfile,
    source: &mut S,
) -> Result<String> {
    let mut core = String::with_capacity(pattern.len() * 2);
    for symbol in pattern.chars() {
        match symbol {
            CONSONANT_SYMBOL => core.push_str(pick_required(
                &profile.phonemes.consonants,
                "phonemes.consonants",
                &profile.id,
                source,
            )?),
            VOWEL_SYMBOL => core.push_str(pick_required(
                &profile.phonemes.vowels,
                "phonemes.vowels",
                &profile.id,
                source,
            )?),
            literal => core.push(literal),
        }
    }
    Ok(core)
}

// ============================================================================
// Synthesizer
// ============================================================================

/// Generates names from language profiles.
#[derive(Debug, Clone)]
pub struct NameSynthesizer<R = StdRng> {
    source: R,
    options: SynthesisOptions,
}

impl NameSynthesizer<StdRng> {
    /// Entropy-seeded synthesizer.
    pub fn new() -> Self {
        Self::with_source(StdRng::from_entropy())
    }

    /// Create with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(StdRng::seed_from_u64(seed))
    }
}

impl Default for NameSynthesizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> NameSynthesizer<R> {
    /// Use a caller-supplied random source.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            options: SynthesisOptions::default(),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Access the random source (e.g. to inspect a scripted source).
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Generate one name.
    pub fn generate(&mut self, profile: &LanguageProfile, with_meaning: bool) -> Result<GeneratedName> {
        profile.validate()?;
        self.synthesize(profile, with_meaning)
    }

    /// Generate `count` independent names; any failure fails the batch.
    pub fn generate_batch(
        &mut self,
        profile: &LanguageProfile,
        count: usize,
        with_meaning: bool,
    ) -> Result<Vec<GeneratedName>> {
        profile.validate()?;
        (0..count)
            .map(|_| self.synthesize(profile, with_meaning))
            .collect()
    }

    fn synthesize(&mut self, profile: &LanguageProfile, with_meaning: bool) -> Result<GeneratedName> {
        let source = &mut self.source;

        let pattern = pick_required(&profile.patterns, "patterns", &profile.id, source)?;
        let core = expand_pattern(pattern, profile, source)?;

        let ending = choose(&profile.endings, source)
            .map(String::as_str)
            .unwrap_or("");

        let wants_prefix = source.chance(self.options.prefix_probability);
        let prefix = if wants_prefix {
            choose(&profile.prefixes, source)
                .map(String::as_str)
                .unwrap_or("")
        } else {
            ""
        };

        let singular_raw = format!("{prefix}{core}{ending}");
        let singular = capitalize(&singular_raw);
        let plural = capitalize(&pluralize(&singular_raw, &profile.plural_rule));

        let meaning = with_meaning.then(|| {
            let mut parts = MeaningParts::new();
            if !prefix.is_empty() {
                parts.push(profile.meaning_of(prefix));
            }
            parts.finish()
        });

        Ok(GeneratedName {
            singular,
            plural,
            meaning,
        })
    }
}

/// Generate one name with a fresh entropy-seeded synthesizer.
pub fn generate_name(profile: &LanguageProfile, with_meaning: bool) -> Result<GeneratedName> {
    NameSynthesizer::new().generate(profile, with_meaning)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::name_gen::presets::{builtin_preset, builtin_presets};
    use crate::core::name_gen::profile::{Phonemes, PluralRule};
    use crate::core::name_gen::random::ScriptedSource;

    fn scripted(indices: &[usize], chances: &[bool]) -> NameSynthesizer<ScriptedSource> {
        NameSynthesizer::with_source(
            ScriptedSource::new()
                .with_indices(indices.iter().copied())
                .with_chances(chances.iter().copied()),
        )
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tarae"), "Tarae");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("'x"), "'x");
    }

    #[test]
    fn test_meaning_parts() {
        assert_eq!(MeaningParts::new().finish(), "unknown");

        let mut blank = MeaningParts::new();
        blank.push(Some(""));
        assert!(blank.is_empty());
        assert_eq!(blank.finish(), "unknown");

        let mut parts = MeaningParts::new();
        parts.push(Some("ancient"));
        parts.push(None);
        parts.push(Some(""));
        parts.push(Some("void"));
        assert_eq!(parts.finish(), "ancient-void");
    }

    #[test]
    fn test_exact_output_without_prefix() {
        // noble: pattern[1]=CVVC -> c[0]=l v[0]=a v[1]=e c[1]=r; ending[1]=ar
        let noble = builtin_preset("noble").unwrap();
        let mut synth = scripted(&[1, 0, 0, 1, 1, 1], &[false]);
        let name = synth.generate(&noble, true).unwrap();
        assert_eq!(name.singular, "Laerar");
        assert_eq!(name.plural, "Laerars");
        assert_eq!(name.meaning.as_deref(), Some("unknown"));
        assert_eq!(synth.source().remaining(), (0, 0));
    }

    #[test]
    fn test_exact_output_with_prefix_meaning() {
        // shadow: pattern[0]=CVC -> k o r; ending[3]=or; prefix[0]=sil
        let shadow = builtin_preset("shadow").unwrap();
        let mut synth = scripted(&[0, 2, 2, 3, 3, 0], &[true]);
        let name = synth.generate(&shadow, true).unwrap();
        assert_eq!(name.singular, "Silkoror");
        assert_eq!(name.plural, "Silkorores");
        assert_eq!(name.meaning.as_deref(), Some("silence"));
    }

    #[test]
    fn test_prefix_without_meaning_is_unknown() {
        // cthulhu: "xul" has no meaning entry
        let cthulhu = builtin_preset("cthulhu").unwrap();
        let mut synth = scripted(&[2, 0, 0, 0, 0, 1, 1], &[true]);
        let name = synth.generate(&cthulhu, true).unwrap();
        // VCVC -> u x u x, ending ul, prefix xul
        assert_eq!(name.singular, "Xuluxuxul");
        assert_eq!(name.plural, "Xuluxuxuli");
        assert_eq!(name.meaning.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_meaning_absent_when_not_requested() {
        let noble = builtin_preset("noble").unwrap();
        let mut synth = scripted(&[0, 0, 0, 0, 0, 0, 0], &[true]);
        let name = synth.generate(&noble, false).unwrap();
        assert!(name.meaning.is_none());
        assert!(name.singular.starts_with("Val"));
    }

    #[test]
    fn test_literals_pass_through() {
        let profile = LanguageProfile::new("lit", "Literal")
            .with_phonemes(Phonemes::new(["k"], ["a"]))
            .with_patterns(["C'V-C"])
            .with_endings(["!"]);
        let name = scripted(&[], &[]).generate(&profile, false).unwrap();
        assert_eq!(name.singular, "K'a-k!");
    }

    #[test]
    fn test_empty_endings_contribute_nothing() {
        let profile = LanguageProfile::new("bare", "Bare")
            .with_phonemes(Phonemes::new(["t"], ["o"]))
            .with_patterns(["CV"])
            .with_plural_rule(PluralRule::Custom);
        let name = scripted(&[], &[]).generate(&profile, false).unwrap();
        assert_eq!(name.singular, "To");
        assert_eq!(name.plural, "Toth");
    }

    #[test]
    fn test_prefix_chance_ignored_without_prefixes() {
        let profile = LanguageProfile::new("np", "No Prefix")
            .with_phonemes(Phonemes::new(["t"], ["o"]))
            .with_patterns(["CV"])
            .with_meaning("x", "unused");
        let name = scripted(&[], &[true]).generate(&profile, true).unwrap();
        assert_eq!(name.singular, "To");
        assert_eq!(name.meaning.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_invalid_profile_fails_whole_batch() {
        let profile = LanguageProfile::new("broken", "Broken").with_patterns(["CV"]);
        let err = NameSynthesizer::with_seed(3)
            .generate_batch(&profile, 4, false)
            .unwrap_err();
        assert!(matches!(err, NameGenError::InvalidProfile { ref profile_id, .. } if profile_id == "broken"));

        let no_patterns = LanguageProfile::new("empty", "Empty");
        assert!(generate_name(&no_patterns, false).is_err());
    }

    #[test]
    fn test_batch_count() {
        let mystic = builtin_preset("mystic").unwrap();
        let mut synth = NameSynthesizer::with_seed(42);
        assert_eq!(synth.generate_batch(&mystic, 12, true).unwrap().len(), 12);
        assert!(synth.generate_batch(&mystic, 0, true).unwrap().is_empty());
    }

    #[test]
    fn test_reproducible_with_seed() {
        let barbar = builtin_preset("barbar").unwrap();
        let a = NameSynthesizer::with_seed(12345).generate_batch(&barbar, 10, true).unwrap();
        let b = NameSynthesizer::with_seed(12345).generate_batch(&barbar, 10, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_probability_extremes() {
        let noble = builtin_preset("noble").unwrap();

        let mut never = NameSynthesizer::with_seed(9)
            .with_options(SynthesisOptions { prefix_probability: 0.0 });
        for name in never.generate_batch(&noble, 50, true).unwrap() {
            assert_eq!(name.meaning.as_deref(), Some("unknown"));
        }

        // "el" carries no meaning in noble, so only check that some do
        let mut always = NameSynthesizer::with_seed(9)
            .with_options(SynthesisOptions { prefix_probability: 1.0 });
        let names = always.generate_batch(&noble, 50, true).unwrap();
        assert!(names.iter().any(|n| n.meaning.as_deref() != Some("unknown")));
    }

    #[test]
    fn test_builtins_capitalized() {
        let mut synth = NameSynthesizer::with_seed(7);
        for preset in builtin_presets() {
            for name in synth.generate_batch(&preset, 25, false).unwrap() {
                assert!(name.singular.chars().next().unwrap().is_uppercase());
                assert!(name.plural.chars().next().unwrap().is_uppercase());
                assert!(name.meaning.is_none());
            }
        }
    }
}
