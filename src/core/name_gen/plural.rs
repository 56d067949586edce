//! Pluralization rules applied to the uncapitalized singular.

use super::profile::PluralRule;

/// Pluralize `name` according to `rule`.
///
/// Unrecognized rules behave like [`PluralRule::S`].
pub fn pluralize(name: &str, rule: &PluralRule) -> String {
    match rule {
        PluralRule::S | PluralRule::Other(_) => format!("{name}s"),
        PluralRule::Ae if name.ends_with('a') => format!("{name}e"),
        PluralRule::Ae => format!("{name}ae"),
        PluralRule::Uk => format!("{name}uk"),
        PluralRule::Es if name.ends_with('e') => format!("{name}s"),
        PluralRule::Es => format!("{name}es"),
        PluralRule::Custom => custom_plural(name),
    }
}

/// Heuristic used by the `custom` rule, checked in order:
/// 1. sibilant end (`s`, `x`, `z`, `ch`, `sh`, `th`) -> `es`
/// 2. vowel end -> `th`
/// 3. anything else -> `i`
pub fn custom_plural(name: &str) -> String {
    let last = name.chars().last().map(|c| c.to_lowercase().to_string());
    let last = last.as_deref().unwrap_or("");

    let sibilant = matches!(last, "s" | "x" | "z")
        || name.ends_with("ch")
        || name.ends_with("sh")
        || name.ends_with("th");

    if sibilant {
        format!("{name}es")
    } else if matches!(last, "a" | "e" | "i" | "o" | "u") {
        format!("{name}th")
    } else {
        format!("{name}i")
    }
}
