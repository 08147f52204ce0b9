use crate::core::dialect::{derive_alternations, AlternationMap, PatternCatalog};
use crate::core::generator::generate_syllables;
use crate::core::infinitive::{dialectal_infinitives, infinitives_for_roots};
use crate::core::inventory::PhonemeInventory;
use crate::core::tone::ToneTable;
use crate::core::types::{Dataset, PrimeRoot, Syllable};
use crate::merge::merge;

// The pipeline is composed of the inventory, the tone table and the pattern
// catalog. It holds no mutable state: every build starts from these inputs.
pub struct RootEngine {
    pub inventory: PhonemeInventory,
    pub tones: ToneTable,
    pub patterns: PatternCatalog,
    alternations: AlternationMap,
}

impl RootEngine {
    pub fn new(inventory: PhonemeInventory, patterns: PatternCatalog) -> Self {
        let alternations = AlternationMap::build(&inventory, &patterns);
        Self {
            inventory,
            tones: ToneTable::standard(),
            patterns,
            alternations,
        }
    }

    pub fn syllables(&self) -> Vec<Syllable> {
        generate_syllables(&self.inventory, &self.tones)
    }

    pub fn generated_roots(&self, syllables: &[Syllable]) -> Vec<PrimeRoot> {
        syllables
            .iter()
            .map(|s| PrimeRoot::from_syllable(s, &self.inventory))
            .collect()
    }

    /// Runs the whole pipeline against the roots already on record.
    ///
    /// Dialectal pairs come from the generated syllables; infinitives come
    /// from the merged roots so their `base_root_id` always resolves.
    pub fn build(&self, existing: Vec<PrimeRoot>) -> Dataset {
        // 1. Enumerate and mark every syllable
        let syllables = self.syllables();

        // 2. Merge generated roots into the existing ones
        let existing_count = existing.len();
        let prime_roots = merge(existing, self.generated_roots(&syllables));

        // 3. Regional variants
        let dialectal_roots = derive_alternations(&syllables, &self.alternations);

        // 4. Infinitives for roots and for dialectal pairs
        let infinitives = infinitives_for_roots(&prime_roots);
        let dialectal_infinitives = dialectal_infinitives(&dialectal_roots);

        tracing::info!(
            target: "roots.engine",
            syllables = syllables.len(),
            existing = existing_count,
            prime_roots = prime_roots.len(),
            dialectal_roots = dialectal_roots.len(),
            infinitives = infinitives.len(),
            dialectal_infinitives = dialectal_infinitives.len(),
            "dataset built"
        );

        Dataset {
            prime_roots,
            dialectal_roots,
            infinitives,
            dialectal_infinitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::default_inventory;

    fn engine() -> RootEngine {
        RootEngine::new(default_inventory(), PatternCatalog::default())
    }

    #[test]
    fn builds_every_collection() {
        let dataset = engine().build(Vec::new());
        assert_eq!(dataset.prime_roots.len(), 810);
        assert_eq!(dataset.dialectal_roots.len(), 189);
        assert_eq!(dataset.infinitives.len(), 810);
        assert_eq!(dataset.dialectal_infinitives.len(), 189);
    }

    #[test]
    fn rebuilding_from_own_output_is_stable() {
        let engine = engine();
        let first = engine.build(Vec::new());
        let second = engine.build(first.prime_roots.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn harmony_prefixes_follow_vowel_group() {
        let dataset = engine().build(Vec::new());
        let forms: Vec<&str> = dataset
            .infinitives
            .iter()
            .map(|i| i.infinitive_form.as_str())
            .collect();
        for expected in ["ịba", "ịbẹ", "ịbị", "ịbọ", "ịbụ", "ibe", "ibi", "ibo", "ibu", "igo"] {
            assert!(forms.contains(&expected), "missing {expected}");
        }
        let dialectal: Vec<&str> = dataset
            .dialectal_infinitives
            .iter()
            .map(|i| i.infinitive_form.as_str())
            .collect();
        assert!(dialectal.contains(&"ịla / ịra"));
        assert!(dialectal.contains(&"ile / ire"));
    }
}
