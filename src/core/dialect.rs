// File: src/core/dialect.rs
use crate::core::inventory::PhonemeInventory;
use crate::core::types::{DialectalPair, Syllable, PAIR_SEPARATOR};
use std::collections::{BTreeMap, HashSet};

/// The documented major dialectal alternation patterns.
pub const DOCUMENTED_PATTERNS: [&str; 12] = [
    "L/R", "B/V", "G/V", "F/H/SH", "S/SH", "Y/H", "N/L/Y", "J/Z", "S/T", "F/P", "B/W", "W/GH",
];

/// The patterns that produce dialectal pairs during generation.
pub const GENERATION_PATTERNS: [&str; 7] = ["L/R", "B/V", "G/V", "F/P", "J/Z", "S/T", "Y/H"];

/// Which pattern tags are recognized, and which of those generate pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    pub generation: Vec<String>,
    pub documented: Vec<String>,
}

impl PatternCatalog {
    pub fn new(generation: Vec<String>, documented: Vec<String>) -> Self {
        Self {
            generation,
            documented,
        }
    }

    pub fn generates(&self, tag: &str) -> bool {
        self.generation.iter().any(|t| t == tag)
    }

    pub fn is_documented(&self, tag: &str) -> bool {
        self.documented.iter().any(|t| t == tag)
    }

    /// Documented tags that at least one consonant in `inventory` carries.
    pub fn documented_in<'a>(&self, inventory: &'a PhonemeInventory) -> HashSet<&'a str> {
        inventory
            .consonants()
            .iter()
            .flat_map(|c| c.pattern_tags())
            .filter(|tag| self.is_documented(tag))
            .collect()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new(
            GENERATION_PATTERNS.iter().map(|s| s.to_string()).collect(),
            DOCUMENTED_PATTERNS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub consonant: String,
    pub pattern: String,
}

/// Symmetric consonant → partners relation restricted to generation patterns.
#[derive(Debug, Clone, Default)]
pub struct AlternationMap {
    partners: BTreeMap<String, Vec<Alternate>>,
}

impl AlternationMap {
    pub fn build(inventory: &PhonemeInventory, catalog: &PatternCatalog) -> Self {
        let mut map = Self::default();
        for consonant in inventory.consonants().iter().filter(|c| c.shifting) {
            for set in &consonant.alternation_sets {
                if !catalog.generates(&set.pattern) {
                    continue;
                }
                for alt in &set.alternates_with {
                    let partner_shifts = inventory.consonant(alt).is_some_and(|c| c.shifting);
                    if *alt == consonant.letter || !partner_shifts {
                        continue;
                    }
                    map.link(&consonant.letter, alt, &set.pattern);
                    map.link(alt, &consonant.letter, &set.pattern);
                }
            }
        }
        map
    }

    fn link(&mut self, from: &str, to: &str, pattern: &str) {
        let list = self.partners.entry(from.to_string()).or_default();
        if !list.iter().any(|a| a.consonant == to) {
            list.push(Alternate {
                consonant: to.to_string(),
                pattern: pattern.to_string(),
            });
        }
    }

    pub fn partners(&self, consonant: &str) -> &[Alternate] {
        self.partners.get(consonant).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Builds one pair per unordered (form, alternate form), keeping each tone
/// variant separate.
pub fn derive_alternations(syllables: &[Syllable], map: &AlternationMap) -> Vec<DialectalPair> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut pairs = Vec::new();

    for syllable in syllables {
        let partners = map.partners(&syllable.consonant);
        if partners.is_empty() {
            continue;
        }
        let Some(toned_vowel) = syllable.plain_form.strip_prefix(syllable.consonant.as_str()) else {
            tracing::warn!(
                target: "roots.dialect",
                plain_form = %syllable.plain_form,
                consonant = %syllable.consonant,
                "syllable does not start with its consonant, skipped"
            );
            continue;
        };

        for alt in partners {
            let base_form = syllable.plain_form.clone();
            let dialectal_form = format!("{}{}", alt.consonant, toned_vowel);
            let key = if base_form <= dialectal_form {
                (base_form.clone(), dialectal_form.clone())
            } else {
                (dialectal_form.clone(), base_form.clone())
            };
            if !seen.insert(key) {
                continue;
            }
            pairs.push(DialectalPair {
                id: format!("{base_form}_{dialectal_form}_dialectal"),
                combined_form: format!("{base_form}{PAIR_SEPARATOR}{dialectal_form}"),
                base_form,
                dialectal_form,
                base_consonant: syllable.consonant.clone(),
                dialectal_consonant: alt.consonant.clone(),
                vowel: syllable.vowel.clone(),
                tone: syllable.tone,
                vowel_group: syllable.vowel_group,
                pattern: alt.pattern.clone(),
            });
        }
    }

    tracing::debug!(target: "roots.dialect", count = pairs.len(), "derived dialectal pairs");
    pairs
}
