// Phoneme inventory: the consonant and vowel catalogs, loaded once from JSON
// into an immutable value that every other component borrows.
//
// The JSON shapes match `language-data/consonants.json` and
// `language-data/vowels.json`. Consonants keep their declaration order for
// generation; a second, longest-first ordering is kept for prefix matching
// so that digraphs ("gb", "kp", "nw") and the syllabic nasals ("m̩") win
// over their single-letter prefixes.

use crate::core::tone::ToneTable;
use crate::core::types::VowelGroup;
use crate::error::InventoryError;
use serde::Deserialize;
use std::collections::HashSet;

/// One named alternation and the consonants it links this one to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlternationSet {
    pub pattern: String,
    #[serde(default)]
    pub alternates_with: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Consonant {
    pub letter: String,
    pub uppercase: String,
    pub ipa: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Syllabic nasals behave as pseudo-vowels.
    #[serde(default)]
    pub syllabic: bool,
    /// Whether this consonant takes part in any dialectal alternation.
    #[serde(default)]
    pub shifting: bool,
    #[serde(default)]
    pub alternation_sets: Vec<AlternationSet>,
}

impl Consonant {
    pub fn pattern_tags(&self) -> impl Iterator<Item = &str> {
        self.alternation_sets.iter().map(|set| set.pattern.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VowelDef {
    pub letter: String,
    pub uppercase: String,
    pub ipa: String,
    pub description: String,
}

/// A vowel together with its harmony group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vowel {
    pub letter: String,
    pub group: VowelGroup,
}

#[derive(Debug, Deserialize)]
struct ConsonantFile {
    consonants: Vec<Consonant>,
}

#[derive(Debug, Deserialize)]
struct VowelGroupDef {
    vowels: Vec<VowelDef>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct VowelGroupsDef {
    A: VowelGroupDef,
    E: VowelGroupDef,
}

#[derive(Debug, Deserialize)]
struct VowelFile {
    #[serde(rename = "vowelGroups")]
    vowel_groups: VowelGroupsDef,
}

#[derive(Debug, Clone)]
pub struct PhonemeInventory {
    consonants: Vec<Consonant>,
    /// Indices into `consonants`, longest letter first, ties in declaration order.
    longest_first: Vec<usize>,
    vowels: Vec<Vowel>,
}

impl PhonemeInventory {
    /// Parse both catalogs and check the invariants the generator relies on.
    pub fn from_json(
        consonants_json: &str,
        vowels_json: &str,
        tones: &ToneTable,
    ) -> Result<Self, InventoryError> {
        let consonants: ConsonantFile =
            serde_json::from_str(consonants_json).map_err(|source| InventoryError::Malformed {
                catalog: "consonant",
                source,
            })?;
        let vowels: VowelFile =
            serde_json::from_str(vowels_json).map_err(|source| InventoryError::Malformed {
                catalog: "vowel",
                source,
            })?;

        let groups = vowels.vowel_groups;
        let vowels = groups
            .A
            .vowels
            .into_iter()
            .map(|v| (v, VowelGroup::A))
            .chain(groups.E.vowels.into_iter().map(|v| (v, VowelGroup::E)))
            .map(|(def, group)| Vowel {
                letter: def.letter,
                group,
            })
            .collect();

        Self::new(consonants.consonants, vowels, tones)
    }

    pub fn new(
        consonants: Vec<Consonant>,
        vowels: Vec<Vowel>,
        tones: &ToneTable,
    ) -> Result<Self, InventoryError> {
        if consonants.is_empty() {
            return Err(InventoryError::EmptyCatalog {
                catalog: "consonant",
            });
        }
        if vowels.is_empty() {
            return Err(InventoryError::EmptyCatalog { catalog: "vowel" });
        }

        let mut seen = HashSet::new();
        for c in &consonants {
            if c.letter.is_empty() {
                return Err(InventoryError::EmptyLetter {
                    catalog: "consonant",
                });
            }
            if !seen.insert(c.letter.as_str()) {
                return Err(InventoryError::DuplicateConsonant {
                    letter: c.letter.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for v in &vowels {
            let mut chars = v.letter.chars();
            let base = match (chars.next(), chars.next()) {
                (None, _) => return Err(InventoryError::EmptyLetter { catalog: "vowel" }),
                (Some(c), None) => c,
                (Some(_), Some(_)) => {
                    return Err(InventoryError::MultiCharVowel {
                        letter: v.letter.clone(),
                    })
                }
            };
            if !seen.insert(base) {
                return Err(InventoryError::DuplicateVowel {
                    letter: v.letter.clone(),
                });
            }
            if !tones.contains(base) {
                return Err(InventoryError::MissingToneEntry {
                    letter: v.letter.clone(),
                });
            }
        }

        let mut longest_first: Vec<usize> = (0..consonants.len()).collect();
        // sort_by_key is stable, so equal lengths keep declaration order
        longest_first.sort_by_key(|&i| std::cmp::Reverse(consonants[i].letter.chars().count()));

        Ok(Self {
            consonants,
            longest_first,
            vowels,
        })
    }

    /// Consonants in declaration order.
    pub fn consonants(&self) -> &[Consonant] {
        &self.consonants
    }

    pub fn consonants_longest_first(&self) -> impl Iterator<Item = &Consonant> + '_ {
        self.longest_first.iter().map(move |&i| &self.consonants[i])
    }

    pub fn consonant(&self, letter: &str) -> Option<&Consonant> {
        self.consonants.iter().find(|c| c.letter == letter)
    }

    /// Vowels, group A first, each group in declaration order.
    pub fn vowels(&self) -> &[Vowel] {
        &self.vowels
    }

    pub fn vowel_group(&self, letter: &str) -> Option<VowelGroup> {
        self.vowels
            .iter()
            .find(|v| v.letter == letter)
            .map(|v| v.group)
    }

    pub fn is_valid_vowel(&self, letter: &str) -> bool {
        self.vowel_group(letter).is_some()
    }

    /// Longest catalog consonant that `text` starts with.
    pub fn longest_consonant_prefix(&self, text: &str) -> Option<&Consonant> {
        self.consonants_longest_first()
            .find(|c| text.starts_with(c.letter.as_str()))
    }

    pub fn regular_consonant_count(&self) -> usize {
        self.consonants.iter().filter(|c| !c.syllabic).count()
    }

    pub fn syllabic_consonant_count(&self) -> usize {
        self.consonants.iter().filter(|c| c.syllabic).count()
    }

    pub fn vowel_count(&self, group: VowelGroup) -> usize {
        self.vowels.iter().filter(|v| v.group == group).count()
    }
}

/// The standard Igbo inventory, embedded at compile time.
///
/// Panics if the embedded catalogs are malformed, which the tests below rule out.
pub fn default_inventory() -> PhonemeInventory {
    PhonemeInventory::from_json(
        include_str!("../../data/consonants.json"),
        include_str!("../../data/vowels.json"),
        &ToneTable::standard(),
    )
    .expect("embedded phoneme catalogs are malformed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consonant(letter: &str) -> Consonant {
        Consonant {
            letter: letter.to_string(),
            uppercase: letter.to_uppercase(),
            ipa: letter.to_string(),
            kind: "plosive".to_string(),
            description: String::new(),
            syllabic: false,
            shifting: false,
            alternation_sets: Vec::new(),
        }
    }

    fn vowel(letter: &str, group: VowelGroup) -> Vowel {
        Vowel {
            letter: letter.to_string(),
            group,
        }
    }

    #[test]
    fn default_inventory_loads() {
        let inv = default_inventory();
        assert_eq!(inv.consonants().len(), 30);
        assert_eq!(inv.vowels().len(), 9);
        assert_eq!(inv.syllabic_consonant_count(), 2);
    }

    #[test]
    fn digraphs_come_before_their_prefixes() {
        let inv = default_inventory();
        let order: Vec<&str> = inv
            .consonants_longest_first()
            .map(|c| c.letter.as_str())
            .collect();
        let pos = |l: &str| order.iter().position(|&x| x == l).unwrap();
        assert!(pos("gb") < pos("g"));
        assert!(pos("kp") < pos("k"));
        assert!(pos("nw") < pos("n"));
        assert!(pos("gh") < pos("g"));
        assert!(pos("m\u{329}") < pos("m"));
    }

    #[test]
    fn longest_first_is_stable_for_equal_lengths() {
        let inv = PhonemeInventory::new(
            vec![consonant("k"), consonant("gb"), consonant("b"), consonant("kp")],
            vec![vowel("a", VowelGroup::A)],
            &ToneTable::standard(),
        )
        .unwrap();
        let order: Vec<&str> = inv
            .consonants_longest_first()
            .map(|c| c.letter.as_str())
            .collect();
        assert_eq!(order, vec!["gb", "kp", "k", "b"]);
    }

    #[test]
    fn vowel_groups_resolve() {
        let inv = default_inventory();
        assert_eq!(inv.vowel_group("a"), Some(VowelGroup::A));
        assert_eq!(inv.vowel_group("ụ"), Some(VowelGroup::A));
        assert_eq!(inv.vowel_group("o"), Some(VowelGroup::E));
        assert_eq!(inv.vowel_group("x"), None);
        assert!(inv.is_valid_vowel("ẹ"));
        assert!(!inv.is_valid_vowel("á"));
    }

    #[test]
    fn rejects_duplicate_consonants() {
        let err = PhonemeInventory::new(
            vec![consonant("b"), consonant("b")],
            vec![vowel("a", VowelGroup::A)],
            &ToneTable::standard(),
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateConsonant { .. }));
    }

    #[test]
    fn rejects_vowel_in_both_groups() {
        let err = PhonemeInventory::new(
            vec![consonant("b")],
            vec![vowel("a", VowelGroup::A), vowel("a", VowelGroup::E)],
            &ToneTable::standard(),
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateVowel { .. }));
    }

    #[test]
    fn rejects_vowel_without_tone_entry() {
        let err = PhonemeInventory::new(
            vec![consonant("b")],
            vec![vowel("y", VowelGroup::E)],
            &ToneTable::standard(),
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::MissingToneEntry { .. }));
    }

    #[test]
    fn rejects_malformed_catalog() {
        let err = PhonemeInventory::from_json(
            r#"{"consonants": [{"letter": "b"}]}"#,
            r#"{"vowelGroups": {"A": {"vowels": []}, "E": {"vowels": []}}}"#,
            &ToneTable::standard(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Malformed {
                catalog: "consonant",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_catalogs() {
        let err = PhonemeInventory::new(vec![], vec![], &ToneTable::standard()).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyCatalog { .. }));
    }
}
