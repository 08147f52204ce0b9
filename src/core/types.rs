// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the two members of a dialectal form, e.g. "la / ra".
pub const PAIR_SEPARATOR: &str = " / ";

/// Lexical tone of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    High,
    Mid,
    Low,
}

impl Tone {
    /// Generation order, which is also rank order.
    pub const ALL: [Tone; 3] = [Tone::High, Tone::Mid, Tone::Low];

    /// Fixed ordering used for id assignment: high=1, mid=2, low=3.
    pub fn rank(self) -> u8 {
        match self {
            Tone::High => 1,
            Tone::Mid => 2,
            Tone::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::High => "high",
            Tone::Mid => "mid",
            Tone::Low => "low",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Vowel harmony group. Decides the infinitive prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelGroup {
    A,
    E,
}

impl fmt::Display for VowelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VowelGroup::A => f.write_str("A"),
            VowelGroup::E => f.write_str("E"),
        }
    }
}

/// Where a root came from while it is being merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Manual,
    Generated,
}

/// One consonant-vowel syllable with a tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub consonant: String,
    /// Base (toneless) vowel.
    pub vowel: String,
    pub tone: Tone,
    /// Tone-marked spelling, e.g. "má".
    pub plain_form: String,
    /// Toneless spelling shared by the three tone variants, e.g. "ma".
    pub syllable_group: String,
    pub vowel_group: Option<VowelGroup>,
    pub main_vowel: String,
}

/// A monosyllabic verb root as persisted in `prime-verb-roots.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeRoot {
    pub id: String,
    pub plain_name: String,
    pub main_vowel: String,
    pub tone: Tone,
    pub syllable_group: String,
    #[serde(rename = "vowelGroup")]
    pub vowel_group: Option<VowelGroup>,
    /// `[consonant, vowel with tone]`; concatenated they give `plain_name`.
    pub phonemes: [String; 2],
    #[serde(default)]
    pub ndebe: String,
    #[serde(default)]
    pub unicode: String,
}

/// Two regional pronunciations of the same root, e.g. "la / ra".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectalPair {
    pub id: String,
    pub base_form: String,
    pub dialectal_form: String,
    pub combined_form: String,
    pub base_consonant: String,
    pub dialectal_consonant: String,
    pub vowel: String,
    pub tone: Tone,
    #[serde(rename = "vowelGroup")]
    pub vowel_group: Option<VowelGroup>,
    /// Alternation pattern tag, e.g. "L/R".
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infinitive {
    pub id: String,
    pub infinitive_form: String,
    pub base_root_id: String,
    pub base_root: String,
    pub prefix: String,
    #[serde(rename = "vowelGroup")]
    pub vowel_group: VowelGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectalInfinitive {
    pub id: String,
    /// Both infinitives joined with [`PAIR_SEPARATOR`].
    pub infinitive_form: String,
    pub base_infinitive: String,
    pub dialectal_infinitive: String,
    pub base_root: String,
    pub dialectal_root: String,
    /// Id of the [`DialectalPair`] this was derived from.
    pub base_root_id: String,
    pub prefix: String,
    #[serde(rename = "vowelGroup")]
    pub vowel_group: VowelGroup,
}

/// Everything one pipeline run produces, ready to be written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub prime_roots: Vec<PrimeRoot>,
    pub dialectal_roots: Vec<DialectalPair>,
    pub infinitives: Vec<Infinitive>,
    pub dialectal_infinitives: Vec<DialectalInfinitive>,
}
