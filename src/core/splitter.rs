// File: src/core/splitter.rs
use crate::core::inventory::PhonemeInventory;

/// Splits a syllable into `(consonant, vowel with tone)`.
///
/// The consonant is matched against the toneless `syllable_group` so tone
/// marks cannot interfere with prefix matching. Tone marks only ever follow
/// the consonant, so the same byte offset cuts `plain_form` too.
///
/// If no catalog consonant prefixes the syllable the first character is
/// taken as the consonant. That only happens with data outside the
/// inventory and is logged, not raised.
pub fn split(inventory: &PhonemeInventory, plain_form: &str, syllable_group: &str) -> (String, String) {
    if let Some(consonant) = inventory.longest_consonant_prefix(syllable_group) {
        let letter = consonant.letter.as_str();
        if let Some(vowel) = plain_form.strip_prefix(letter) {
            return (letter.to_string(), vowel.to_string());
        }
    }

    tracing::warn!(
        target: "roots.splitter",
        plain_form,
        syllable_group,
        "no catalog consonant prefix, splitting after first character"
    );
    let mut chars = plain_form.chars();
    match chars.next() {
        Some(first) => (first.to_string(), chars.as_str().to_string()),
        None => (String::new(), String::new()),
    }
}
