//! Property-based tests for the Profile Merger

use proptest::prelude::*;

use crate::core::name_gen::{builtin_preset, merge_profile, OverrideProfile, BUILTIN_PRESET_IDS};

fn arb_preset_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BUILTIN_PRESET_IDS.to_vec())
}

/// Generate a sparse override touching a random subset of fields
fn arb_override() -> impl Strategy<Value = OverrideProfile> {
    (
        prop::option::of(prop::collection::vec("[a-z]{1,2}", 0..4)),
        prop::option::of(prop::collection::vec("[CV]{1,5}", 1..3)),
        prop::option::of(-1.0f64..2.0),
        prop::option::of(-1.0f64..2.0),
        prop::option::of(("[a-z]{2,3}", "[a-z]{3,8}")),
    )
        .prop_map(|(consonants, patterns, harshness, darkness, meaning)| {
            let mut ov = OverrideProfile::new();
            if let Some(c) = consonants {
                ov = ov.with_consonants(c);
            }
            if let Some(p) = patterns {
                ov = ov.with_patterns(p);
            }
            if let Some(h) = harshness {
                ov = ov.with_harshness(h);
            }
            if let Some(d) = darkness {
                ov = ov.with_darkness(d);
            }
            if let Some((prefix, gloss)) = meaning {
                ov = ov.with_meaning(prefix, gloss);
            }
            ov
        })
}

proptest! {
    /// Property: merge(merge(base, o), {}) == merge(base, o)
    #[test]
    fn prop_merge_idempotent(preset_id in arb_preset_id(), ov in arb_override()) {
        let base = builtin_preset(preset_id).unwrap();
        let once = merge_profile(&base, Some(&ov));
        let twice = merge_profile(&once, Some(&OverrideProfile::new()));
        prop_assert_eq!(once, twice);
    }

    /// Property: merging never mutates base or override
    #[test]
    fn prop_merge_isolated(preset_id in arb_preset_id(), ov in arb_override()) {
        let base = builtin_preset(preset_id).unwrap();
        let (base_before, ov_before) = (base.clone(), ov.clone());
        let _ = merge_profile(&base, Some(&ov));
        prop_assert_eq!(base, base_before);
        prop_assert_eq!(ov, ov_before);
    }

    /// Property: untouched tone axes keep the base values
    #[test]
    fn prop_tone_axes_independent(preset_id in arb_preset_id(), darkness in -1.0f64..2.0) {
        let base = builtin_preset(preset_id).unwrap();
        let merged = merge_profile(&base, Some(&OverrideProfile::new().with_darkness(darkness)));
        prop_assert_eq!(merged.tone.darkness, darkness);
        prop_assert_eq!(merged.tone.harshness, base.tone.harshness);
        prop_assert_eq!(merged.tone.elegance, base.tone.elegance);
    }

    /// Property: base meanings survive unless the override names the same prefix
    #[test]
    fn prop_meanings_preserved(preset_id in arb_preset_id(), ov in arb_override()) {
        let base = builtin_preset(preset_id).unwrap();
        let merged = merge_profile(&base, Some(&ov));
        for (prefix, gloss) in &base.meanings {
            let overridden = ov.meanings.as_ref().and_then(|m| m.get(prefix));
            let expected = overridden.unwrap_or(gloss);
            prop_assert_eq!(merged.meanings.get(prefix), Some(expected));
        }
    }
}
