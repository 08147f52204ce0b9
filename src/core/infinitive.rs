// File: src/core/infinitive.rs
use crate::core::types::{
    DialectalInfinitive, DialectalPair, Infinitive, PrimeRoot, VowelGroup, PAIR_SEPARATOR,
};

/// Infinitive prefix for a harmony group: "ị" for A, "i" for E.
pub fn infinitive_prefix(group: VowelGroup) -> &'static str {
    match group {
        VowelGroup::A => "\u{1ecb}",
        VowelGroup::E => "i",
    }
}

/// Prefixes `form` with the infinitive marker. Forms without a single
/// harmony group get no infinitive.
pub fn derive_infinitive(form: &str, group: Option<VowelGroup>) -> Option<String> {
    group.map(|g| format!("{}{}", infinitive_prefix(g), form))
}

pub fn infinitives_for_roots(roots: &[PrimeRoot]) -> Vec<Infinitive> {
    roots
        .iter()
        .filter_map(|root| {
            let group = root.vowel_group?;
            let infinitive_form = derive_infinitive(&root.plain_name, Some(group))?;
            Some(Infinitive {
                id: format!("{}_infinitive", root.id),
                infinitive_form,
                base_root_id: root.id.clone(),
                base_root: root.plain_name.clone(),
                prefix: infinitive_prefix(group).to_string(),
                vowel_group: group,
            })
        })
        .collect()
}

/// Applies the deriver to both members of every pair.
pub fn dialectal_infinitives(pairs: &[DialectalPair]) -> Vec<DialectalInfinitive> {
    pairs
        .iter()
        .filter_map(|pair| {
            let group = pair.vowel_group?;
            let base_infinitive = derive_infinitive(&pair.base_form, Some(group))?;
            let dialectal_infinitive = derive_infinitive(&pair.dialectal_form, Some(group))?;
            Some(DialectalInfinitive {
                id: format!("{base_infinitive}_{dialectal_infinitive}_dialectal_inf"),
                infinitive_form: format!("{base_infinitive}{PAIR_SEPARATOR}{dialectal_infinitive}"),
                base_infinitive,
                dialectal_infinitive,
                base_root: pair.base_form.clone(),
                dialectal_root: pair.dialectal_form.clone(),
                base_root_id: pair.id.clone(),
                prefix: infinitive_prefix(group).to_string(),
                vowel_group: group,
            })
        })
        .collect()
}
