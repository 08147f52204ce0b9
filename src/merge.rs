// File: src/merge.rs
use crate::core::types::{Origin, PrimeRoot};
use std::collections::BTreeMap;

/// A merged root together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRoot {
    pub origin: Origin,
    pub root: PrimeRoot,
}

/// Consolidates existing and generated roots into one numbered set.
///
/// Roots are grouped by `syllable_group`. Existing roots are always kept.
/// A generated root is added only when nothing in its group has the same
/// tone yet. Each group is ordered by tone rank and numbered
/// `{syllable_group}_001`, `_002`, ... from scratch, groups in ascending order.
pub fn merge_tagged(existing: Vec<PrimeRoot>, generated: Vec<PrimeRoot>) -> Vec<TaggedRoot> {
    let mut groups: BTreeMap<String, Vec<TaggedRoot>> = BTreeMap::new();

    for root in existing {
        groups
            .entry(root.syllable_group.clone())
            .or_default()
            .push(TaggedRoot {
                origin: Origin::Manual,
                root,
            });
    }

    let mut skipped = 0usize;
    for root in generated {
        let group = groups.entry(root.syllable_group.clone()).or_default();
        if group.iter().any(|entry| entry.root.tone == root.tone) {
            skipped += 1;
            continue;
        }
        group.push(TaggedRoot {
            origin: Origin::Generated,
            root,
        });
    }

    let mut merged = Vec::new();
    for (syllable_group, mut entries) in groups {
        // stable: same-tone entries keep their insertion order
        entries.sort_by_key(|entry| entry.root.tone.rank());
        for (idx, mut entry) in entries.into_iter().enumerate() {
            entry.root.id = format!("{}_{:03}", syllable_group, idx + 1);
            merged.push(entry);
        }
    }

    let manual = merged.iter().filter(|e| e.origin == Origin::Manual).count();
    tracing::debug!(
        target: "roots.merge",
        total = merged.len(),
        manual,
        generated = merged.len() - manual,
        skipped,
        "merged prime roots"
    );
    merged
}

/// [`merge_tagged`] without the provenance tags.
pub fn merge(existing: Vec<PrimeRoot>, generated: Vec<PrimeRoot>) -> Vec<PrimeRoot> {
    merge_tagged(existing, generated)
        .into_iter()
        .map(|entry| entry.root)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Tone, VowelGroup};

    fn root(group: &str, plain: &str, tone: Tone, ndebe: &str) -> PrimeRoot {
        PrimeRoot {
            id: String::new(),
            plain_name: plain.into(),
            main_vowel: "a".into(),
            tone,
            syllable_group: group.into(),
            vowel_group: Some(VowelGroup::A),
            phonemes: [plain[..1].to_string(), plain[1..].to_string()],
            ndebe: ndebe.into(),
            unicode: String::new(),
        }
    }

    fn generated_for(group: &str, forms: [&str; 3]) -> Vec<PrimeRoot> {
        Tone::ALL
            .iter()
            .zip(forms)
            .map(|(&tone, form)| root(group, form, tone, ""))
            .collect()
    }

    #[test]
    fn numbers_each_group_by_tone_rank() {
        let generated = generate_reversed();
        let merged = merge(Vec::new(), generated);
        let ids: Vec<(&str, Tone)> = merged.iter().map(|r| (r.id.as_str(), r.tone)).collect();
        assert_eq!(
            ids,
            vec![
                ("ba_001", Tone::High),
                ("ba_002", Tone::Mid),
                ("ba_003", Tone::Low),
                ("ma_001", Tone::High),
                ("ma_002", Tone::Mid),
                ("ma_003", Tone::Low),
            ]
        );
    }

    fn generate_reversed() -> Vec<PrimeRoot> {
        let mut roots = generated_for("ma", ["má", "ma", "mà"]);
        roots.extend(generated_for("ba", ["bá", "ba", "bà"]));
        roots.reverse();
        roots
    }

    #[test]
    fn existing_roots_win_over_generated_ones() {
        let existing = vec![root("ma", "má", Tone::High, "manual")];
        let merged = merge_tagged(existing, generated_for("ma", ["má", "ma", "mà"]));
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].origin, Origin::Manual);
        assert_eq!(merged[0].root.ndebe, "manual");
        assert_eq!(merged[0].root.id, "ma_001");
        assert!(merged[1..].iter().all(|e| e.origin == Origin::Generated));
    }

    #[test]
    fn existing_duplicates_are_all_kept() {
        let existing = vec![
            root("ma", "má", Tone::High, "first"),
            root("ma", "má", Tone::High, "second"),
        ];
        let merged = merge(existing, generated_for("ma", ["má", "ma", "mà"]));
        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ma_001", "ma_002", "ma_003", "ma_004"]);
        assert_eq!(merged[0].ndebe, "first");
        assert_eq!(merged[1].ndebe, "second");
        assert_eq!(merged[2].tone, Tone::Mid);
    }

    #[test]
    fn generated_duplicates_collapse() {
        let mut generated = generated_for("ma", ["má", "ma", "mà"]);
        generated.extend(generated_for("ma", ["má", "ma", "mà"]));
        assert_eq!(merge(Vec::new(), generated).len(), 3);
    }

    #[test]
    fn stale_ids_are_rederived() {
        let mut existing = root("ma", "ma", Tone::Mid, "");
        existing.id = "ma_007".into();
        let merged = merge(vec![existing], Vec::new());
        assert_eq!(merged[0].id, "ma_001");
    }

    #[test]
    fn merging_output_again_is_a_fixed_point() {
        let existing = vec![
            root("ma", "mà", Tone::Low, "manual"),
            root("wa", "wá", Tone::High, "manual"),
        ];
        let mut generated = generated_for("ma", ["má", "ma", "mà"]);
        generated.extend(generated_for("ba", ["bá", "ba", "bà"]));

        let once = merge(existing, generated);
        let twice = merge(once.clone(), Vec::new());
        assert_eq!(once, twice);
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }
}
