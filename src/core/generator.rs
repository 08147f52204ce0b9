// File: src/core/generator.rs
use crate::core::inventory::PhonemeInventory;
use crate::core::splitter::split;
use crate::core::tone::ToneTable;
use crate::core::types::{PrimeRoot, Syllable, Tone};

/// Every consonant × vowel × tone combination, in inventory order with
/// tones in [high, mid, low] order. Re-running over the same inventory
/// gives the same sequence.
pub fn generate_syllables(inventory: &PhonemeInventory, tones: &ToneTable) -> Vec<Syllable> {
    let consonants = inventory.consonants();
    let vowels = inventory.vowels();
    let mut syllables = Vec::with_capacity(consonants.len() * vowels.len() * Tone::ALL.len());

    for consonant in consonants {
        for vowel in vowels {
            let syllable_group = format!("{}{}", consonant.letter, vowel.letter);
            for tone in Tone::ALL {
                syllables.push(Syllable {
                    consonant: consonant.letter.clone(),
                    vowel: vowel.letter.clone(),
                    tone,
                    plain_form: tones.apply_tone(&syllable_group, tone),
                    syllable_group: syllable_group.clone(),
                    vowel_group: Some(vowel.group),
                    main_vowel: vowel.letter.clone(),
                });
            }
        }
    }

    tracing::debug!(target: "roots.generator", count = syllables.len(), "generated syllables");
    syllables
}

impl PrimeRoot {
    /// An unnumbered root for `syllable`; the merger assigns the id.
    pub fn from_syllable(syllable: &Syllable, inventory: &PhonemeInventory) -> Self {
        let (consonant, vowel) = split(inventory, &syllable.plain_form, &syllable.syllable_group);
        PrimeRoot {
            id: String::new(),
            plain_name: syllable.plain_form.clone(),
            main_vowel: syllable.main_vowel.clone(),
            tone: syllable.tone,
            syllable_group: syllable.syllable_group.clone(),
            vowel_group: syllable.vowel_group,
            phonemes: [consonant, vowel],
            ndebe: String::new(),
            unicode: String::new(),
        }
    }
}
