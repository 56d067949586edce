//! Property-based tests for the Name Synthesizer
//!
//! Tests invariants:
//! - Output is non-empty and starts with an uppercase letter
//! - Plural matches the rule table applied to the raw singular
//! - Deterministic given same seed

use proptest::prelude::*;

use crate::core::name_gen::{
    builtin_preset, capitalize, pluralize, LanguageProfile, NameSynthesizer, OverrideProfile,
    Phonemes, PluralRule, BUILTIN_PRESET_IDS,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate a built-in preset id
fn arb_preset_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BUILTIN_PRESET_IDS.to_vec())
}

/// Generate an arbitrary PluralRule, including unrecognized tags
fn arb_plural_rule() -> impl Strategy<Value = PluralRule> {
    prop_oneof![
        Just(PluralRule::S),
        Just(PluralRule::Ae),
        Just(PluralRule::Uk),
        Just(PluralRule::Es),
        Just(PluralRule::Custom),
        "[a-z]{2,4}".prop_map(|tag| PluralRule::from_tag(&tag)),
    ]
}

/// Generate a lowercase phoneme inventory
fn arb_inventory() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,3}", 1..6)
}

/// Generate a pattern that always starts with a phoneme symbol
fn arb_pattern() -> impl Strategy<Value = String> {
    ("[CV]", "[CV'\\-]{0,6}").prop_map(|(head, tail)| format!("{head}{tail}"))
}

/// Generate a complete, valid profile with lowercase material
fn arb_profile() -> impl Strategy<Value = LanguageProfile> {
    (
        arb_inventory(),
        arb_inventory(),
        prop::collection::vec(arb_pattern(), 1..4),
        prop::collection::vec("[a-z]{0,4}", 0..4),
        prop::collection::vec("[a-z]{1,4}", 0..4),
        arb_plural_rule(),
    )
        .prop_map(|(consonants, vowels, patterns, endings, prefixes, rule)| {
            LanguageProfile::new("arb", "Arbitrary")
                .with_phonemes(Phonemes::new(consonants, vowels))
                .with_patterns(patterns)
                .with_endings(endings)
                .with_prefixes(prefixes)
                .with_plural_rule(rule)
        })
}

/// Undo `capitalize` for names whose raw form starts lowercase
fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Built-in presets give non-empty, capitalized names
    #[test]
    fn prop_builtin_names_capitalized(
        seed in any::<u64>(),
        preset_id in arb_preset_id()
    ) {
        let profile = builtin_preset(preset_id).unwrap();
        let mut synth = NameSynthesizer::with_seed(seed);
        let name = synth.generate(&profile, false).unwrap();

        prop_assert!(!name.singular.is_empty());
        prop_assert!(!name.plural.is_empty());
        prop_assert!(name.singular.chars().next().unwrap().is_uppercase(),
            "Singular '{}' should start uppercase", name.singular);
        prop_assert!(name.plural.chars().next().unwrap().is_uppercase(),
            "Plural '{}' should start uppercase", name.plural);
        prop_assert!(name.meaning.is_none());
    }

    /// Property: Plural is capitalize(pluralize(raw singular))
    #[test]
    fn prop_plural_follows_rule_table(
        seed in any::<u64>(),
        profile in arb_profile()
    ) {
        let mut synth = NameSynthesizer::with_seed(seed);
        let name = synth.generate(&profile, false).unwrap();

        let raw = uncapitalize(&name.singular);
        prop_assert_eq!(capitalize(&raw), name.singular.clone());
        prop_assert_eq!(name.plural, capitalize(&pluralize(&raw, &profile.plural_rule)));
    }

    /// Property: Overridden consonants fully replace the preset's
    #[test]
    fn prop_consonant_override_replaces(
        seed in any::<u64>(),
        preset_id in arb_preset_id(),
        consonants in prop::collection::vec("[bdfgjkpqvwz]", 1..4)
    ) {
        // Only consonant slots, no endings or prefixes
        let ov = OverrideProfile::new()
            .with_consonants(consonants.clone())
            .with_patterns(["C", "CC", "CCC"])
            .with_endings(Vec::<String>::new())
            .with_prefixes(Vec::<String>::new());
        let profile = crate::core::name_gen::build_profile(preset_id, Some(&ov)).unwrap();

        let mut synth = NameSynthesizer::with_seed(seed);
        let name = synth.generate(&profile, false).unwrap();

        for c in name.singular.to_lowercase().chars() {
            prop_assert!(consonants.iter().any(|k| k.starts_with(c)),
                "'{}' uses '{}' which is not among {:?}", name.singular, c, consonants);
        }
    }

    /// Property: Meaning is present iff requested; "unknown" without prefixes
    #[test]
    fn prop_meaning_presence(
        seed in any::<u64>(),
        profile in arb_profile(),
        with_meaning in any::<bool>()
    ) {
        let mut synth = NameSynthesizer::with_seed(seed);
        let name = synth.generate(&profile, with_meaning).unwrap();

        prop_assert_eq!(name.meaning.is_some(), with_meaning);
        // arb_profile attaches no meanings at all
        if with_meaning {
            prop_assert_eq!(name.meaning.as_deref(), Some("unknown"));
        }
    }

    /// Property: Name generation is deterministic given the same seed
    #[test]
    fn prop_deterministic_with_same_seed(
        seed in any::<u64>(),
        preset_id in arb_preset_id(),
        count in 0usize..12
    ) {
        let profile = builtin_preset(preset_id).unwrap();
        let a = NameSynthesizer::with_seed(seed).generate_batch(&profile, count, true).unwrap();
        let b = NameSynthesizer::with_seed(seed).generate_batch(&profile, count, true).unwrap();

        prop_assert_eq!(a.len(), count);
        prop_assert_eq!(a, b, "Same seed should produce same names");
    }

    /// Property: Names only contain printable characters (no control chars)
    #[test]
    fn prop_generated_name_contains_only_printable(
        seed in any::<u64>(),
        profile in arb_profile()
    ) {
        let mut synth = NameSynthesizer::with_seed(seed);
        let name = synth.generate(&profile, true).unwrap();

        for c in name.singular.chars().chain(name.plural.chars()) {
            prop_assert!(!c.is_control(), "Name '{}' contains control character: {:?}", name.singular, c);
        }
    }
}
