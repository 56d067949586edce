//! Built-in Language Presets
//!
//! The five stock languages. Their data must stay exactly as listed here:
//! generated output is only comparable across implementations when the
//! inventories, patterns and meanings match.

use std::sync::OnceLock;

use super::profile::{LanguageProfile, Phonemes, PluralRule, Tone};

/// Ids of the built-in presets, in catalog order.
pub const BUILTIN_PRESET_IDS: [&str; 5] = ["noble", "cthulhu", "shadow", "barbar", "mystic"];

static CATALOG: OnceLock<Vec<LanguageProfile>> = OnceLock::new();

fn catalog() -> &'static [LanguageProfile] {
    CATALOG.get_or_init(|| vec![noble(), cthulhu(), shadow(), barbar(), mystic()])
}

/// All built-in presets, in catalog order.
pub fn builtin_presets() -> Vec<LanguageProfile> {
    catalog().to_vec()
}

/// Look up a built-in preset by id.
pub fn builtin_preset(id: &str) -> Option<LanguageProfile> {
    catalog().iter().find(|p| p.id == id).cloned()
}

/// Whether `id` names a built-in preset.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_PRESET_IDS.contains(&id)
}

// ============================================================================
// Catalog
// ============================================================================

fn noble() -> LanguageProfile {
    LanguageProfile::new("noble", "Honored Kingdom")
        .with_phonemes(Phonemes::new(
            ["l", "r", "n", "v", "th", "s", "m"],
            ["a", "e", "ia", "ae", "o"],
        ))
        .with_patterns(["CVCV", "CVVC", "CVCVC"])
        .with_endings(["ion", "ar", "eth", "or"])
        .with_prefixes(["val", "el", "aer", "gal"])
        .with_meaning("val", "honor")
        .with_meaning("gal", "power")
        .with_meaning("aer", "light")
        .with_plural_rule(PluralRule::S)
        .with_tone(Tone::new(0.2, 0.1, 0.9))
}

fn cthulhu() -> LanguageProfile {
    LanguageProfile::new("cthulhu", "Elder Void")
        .with_phonemes(Phonemes::new(
            ["x", "z", "q", "gh", "th", "kr", "rr"],
            ["u", "oo", "aa", "ia"],
        ))
        .with_patterns(["CVCVC", "CVCCVC", "VCVC"])
        .with_endings(["oth", "ul", "rax", "naar"])
        .with_prefixes(["cth", "xul", "qor", "zha"])
        .with_meaning("cth", "ancient")
        .with_meaning("qor", "void")
        .with_meaning("zha", "madness")
        .with_plural_rule(PluralRule::Custom)
        .with_tone(Tone::new(0.8, 1.0, 0.1))
}

fn shadow() -> LanguageProfile {
    LanguageProfile::new("shadow", "Shadow Dominion")
        .with_phonemes(Phonemes::new(
            ["s", "z", "k", "r", "th", "sh", "x"],
            ["i", "e", "o", "u"],
        ))
        .with_patterns(["CVC", "CVCC", "CVCVC"])
        .with_endings(["is", "ith", "ex", "or"])
        .with_prefixes(["sil", "zar", "nek"])
        .with_meaning("sil", "silence")
        .with_meaning("zar", "poison")
        .with_meaning("nek", "shadow")
        .with_plural_rule(PluralRule::Es)
        .with_tone(Tone::new(0.7, 0.9, 0.3))
}

fn barbar() -> LanguageProfile {
    LanguageProfile::new("barbar", "War Clans")
        .with_phonemes(Phonemes::new(
            ["g", "k", "r", "b", "d", "m", "th"],
            ["a", "o", "u"],
        ))
        .with_patterns(["CVC", "CVCC", "CVCVC"])
        .with_endings(["gar", "mok", "ruk", "tar"])
        .with_prefixes(["gor", "kar", "bruk"])
        .with_meaning("gor", "war")
        .with_meaning("kar", "blood")
        .with_meaning("bruk", "clan")
        .with_plural_rule(PluralRule::Uk)
        .with_tone(Tone::new(1.0, 0.5, 0.0))
}

fn mystic() -> LanguageProfile {
    LanguageProfile::new("mystic", "Hidden Order")
        .with_phonemes(Phonemes::new(
            ["l", "s", "n", "v", "h", "m", "r"],
            ["a", "e", "i", "ia", "ou"],
        ))
        .with_patterns(["CVVC", "CVCV", "VCVC"])
        .with_endings(["iel", "ion", "ara", "en"])
        .with_prefixes(["vae", "sil", "el"])
        .with_meaning("vae", "mind")
        .with_meaning("sil", "secret")
        .with_meaning("el", "self")
        .with_plural_rule(PluralRule::Ae)
        .with_tone(Tone::new(0.3, 0.4, 0.8))
}
