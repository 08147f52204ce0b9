// Dataset validator.
//
// Works on raw JSON values rather than the typed records so that a
// half-broken file can still be inspected: a record with a missing field
// is a finding, not a deserialization error that hides everything else.
// Every check runs to completion and reports independently; nothing here
// mutates the corpus.

use crate::core::dialect::PatternCatalog;
use crate::core::inventory::PhonemeInventory;
use crate::core::types::{Dataset, VowelGroup};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// How many unresolved ids a reference finding lists before truncating.
const MAX_LISTED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    PrimeRoot,
    DialectalRoot,
    Infinitive,
    DialectalInfinitive,
}

impl RecordKind {
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::PrimeRoot => &[
                "id",
                "plain_name",
                "main_vowel",
                "tone",
                "syllable_group",
                "vowelGroup",
                "phonemes",
            ],
            RecordKind::DialectalRoot => &[
                "id",
                "base_form",
                "dialectal_form",
                "combined_form",
                "vowelGroup",
            ],
            RecordKind::Infinitive => &["id", "infinitive_form", "base_root_id", "prefix", "vowelGroup"],
            RecordKind::DialectalInfinitive => &[
                "id",
                "infinitive_form",
                "base_infinitive",
                "dialectal_infinitive",
                "base_root_id",
                "prefix",
            ],
        }
    }

    /// The collection whose ids `base_root_id` must point into.
    pub fn reference_target(self) -> Option<RecordKind> {
        match self {
            RecordKind::Infinitive => Some(RecordKind::PrimeRoot),
            RecordKind::DialectalInfinitive => Some(RecordKind::DialectalRoot),
            _ => None,
        }
    }
}

/// One named collection of records, or the reason it could not be read.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub kind: RecordKind,
    pub records: Result<Vec<Value>, String>,
}

impl Collection {
    pub fn new(name: impl Into<String>, kind: RecordKind, records: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            records: Ok(records),
        }
    }

    /// Parses a collection file. A top-level object counts as a single record.
    pub fn from_json_str(name: impl Into<String>, kind: RecordKind, text: &str) -> Self {
        let records = match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(obj @ Value::Object(_)) => Ok(vec![obj]),
            Ok(_) => Err("expected a JSON array of records".to_string()),
            Err(e) => Err(format!("invalid JSON: {e}")),
        };
        Self {
            name: name.into(),
            kind,
            records,
        }
    }

    pub fn unreadable(name: impl Into<String>, kind: RecordKind, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            records: Err(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub collections: Vec<Collection>,
}

impl Corpus {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, serde_json::Error> {
        Ok(Self {
            collections: vec![
                Collection::new("prime roots", RecordKind::PrimeRoot, to_values(&dataset.prime_roots)?),
                Collection::new(
                    "dialectal roots",
                    RecordKind::DialectalRoot,
                    to_values(&dataset.dialectal_roots)?,
                ),
                Collection::new("infinitives", RecordKind::Infinitive, to_values(&dataset.infinitives)?),
                Collection::new(
                    "dialectal infinitives",
                    RecordKind::DialectalInfinitive,
                    to_values(&dataset.dialectal_infinitives)?,
                ),
            ],
        })
    }
}

fn to_values<T: Serialize>(items: &[T]) -> Result<Vec<Value>, serde_json::Error> {
    items.iter().map(serde_json::to_value).collect()
}

/// Catalog sizes the inventory is expected to have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedCounts {
    pub regular_consonants: usize,
    pub syllabic_nasals: usize,
    pub base_consonants: usize,
    pub dialect_patterns: usize,
    pub consonants_with_variants: usize,
    pub a_vowels: usize,
    pub e_vowels: usize,
    pub vowels: usize,
}

impl Default for ExpectedCounts {
    fn default() -> Self {
        Self {
            regular_consonants: 28,
            syllabic_nasals: 2,
            base_consonants: 30,
            dialect_patterns: 12,
            consonants_with_variants: 42,
            a_vowels: 5,
            e_vowels: 4,
            vowels: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    Syntax,
    UniqueIds,
    RequiredFields,
    PhonemeCounts,
    References,
    PhonemeReconstruction,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Check::Syntax => "syntax",
            Check::UniqueIds => "unique ids",
            Check::RequiredFields => "required fields",
            Check::PhonemeCounts => "phoneme counts",
            Check::References => "references",
            Check::PhonemeReconstruction => "phoneme reconstruction",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: Check,
    /// Collection name or catalog the finding is about.
    pub subject: String,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    fn pass(&mut self, check: Check, subject: &str, detail: impl Into<String>) {
        self.findings.push(Finding {
            check,
            subject: subject.to_string(),
            passed: true,
            detail: detail.into(),
        });
    }

    fn fail(&mut self, check: Check, subject: &str, detail: impl Into<String>) {
        self.findings.push(Finding {
            check,
            subject: subject.to_string(),
            passed: false,
            detail: detail.into(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.findings.iter().all(|f| f.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.passed)
    }

    pub fn failures_for(&self, check: Check) -> usize {
        self.failures().filter(|f| f.check == check).count()
    }
}

pub fn validate(
    corpus: &Corpus,
    inventory: &PhonemeInventory,
    catalog: &PatternCatalog,
    expected: &ExpectedCounts,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut ids_by_kind: HashMap<RecordKind, HashSet<String>> = HashMap::new();

    for collection in &corpus.collections {
        let records = match &collection.records {
            Ok(records) => records,
            Err(reason) => {
                report.fail(Check::Syntax, &collection.name, reason.clone());
                continue;
            }
        };
        report.pass(Check::Syntax, &collection.name, format!("{} records", records.len()));

        check_unique_ids(&mut report, &collection.name, records);
        check_required_fields(&mut report, collection, records);
        if collection.kind == RecordKind::PrimeRoot {
            check_reconstruction(&mut report, &collection.name, records);
        }

        ids_by_kind
            .entry(collection.kind)
            .or_default()
            .extend(records.iter().filter_map(record_id).map(str::to_string));
    }

    for collection in &corpus.collections {
        let (Some(target), Ok(records)) = (collection.kind.reference_target(), &collection.records)
        else {
            continue;
        };
        match ids_by_kind.get(&target) {
            Some(known) => check_references(&mut report, &collection.name, records, known),
            None => report.fail(
                Check::References,
                &collection.name,
                "referenced collection is missing or unreadable",
            ),
        }
    }

    check_phoneme_counts(&mut report, inventory, catalog, expected);

    tracing::info!(
        target: "roots.validate",
        findings = report.findings.len(),
        failures = report.failures().count(),
        "validation finished"
    );
    report
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn check_unique_ids(report: &mut ValidationReport, name: &str, records: &[Value]) {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for id in records.iter().filter_map(record_id) {
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    if duplicates.is_empty() {
        report.pass(Check::UniqueIds, name, format!("{} unique ids", seen.len()));
    } else {
        report.fail(
            Check::UniqueIds,
            name,
            format!("duplicate ids: {}", duplicates.join(", ")),
        );
    }
}

fn check_required_fields(report: &mut ValidationReport, collection: &Collection, records: &[Value]) {
    let required = collection.kind.required_fields();
    let mut failed = false;
    for (index, record) in records.iter().enumerate() {
        let missing: Vec<&str> = match record.as_object() {
            Some(obj) => required
                .iter()
                .copied()
                .filter(|field| !obj.contains_key(*field))
                .collect(),
            None => required.to_vec(),
        };
        if !missing.is_empty() {
            failed = true;
            let label = record_id(record)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{index}"));
            report.fail(
                Check::RequiredFields,
                &collection.name,
                format!("record {label} is missing {}", missing.join(", ")),
            );
        }
    }
    if !failed {
        report.pass(Check::RequiredFields, &collection.name, "all records complete");
    }
}

fn check_reconstruction(report: &mut ValidationReport, name: &str, records: &[Value]) {
    let mut failed = false;
    for record in records {
        let Some(plain) = record.get("plain_name").and_then(Value::as_str) else {
            continue;
        };
        let Some(parts) = record.get("phonemes").and_then(Value::as_array) else {
            continue;
        };
        let joined: Option<String> = parts.iter().map(Value::as_str).collect();
        if parts.len() != 2 || joined.as_deref() != Some(plain) {
            failed = true;
            report.fail(
                Check::PhonemeReconstruction,
                name,
                format!(
                    "record {}: phonemes do not spell '{plain}'",
                    record_id(record).unwrap_or("?")
                ),
            );
        }
    }
    if !failed {
        report.pass(Check::PhonemeReconstruction, name, "phonemes rebuild every plain name");
    }
}

fn check_references(
    report: &mut ValidationReport,
    name: &str,
    records: &[Value],
    known: &HashSet<String>,
) {
    let unresolved: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("base_root_id").and_then(Value::as_str))
        .filter(|id| !known.contains(*id))
        .collect();
    if unresolved.is_empty() {
        report.pass(Check::References, name, "every base_root_id resolves");
    } else {
        let mut listed = unresolved
            .iter()
            .take(MAX_LISTED)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if unresolved.len() > MAX_LISTED {
            listed.push_str(", ...");
        }
        report.fail(
            Check::References,
            name,
            format!("{} unresolved base_root_id: {listed}", unresolved.len()),
        );
    }
}

fn check_phoneme_counts(
    report: &mut ValidationReport,
    inventory: &PhonemeInventory,
    catalog: &PatternCatalog,
    expected: &ExpectedCounts,
) {
    let base = inventory.consonants().len();
    let patterns = catalog.documented_in(inventory).len();
    let a = inventory.vowel_count(VowelGroup::A);
    let e = inventory.vowel_count(VowelGroup::E);

    let counts = [
        ("regular consonants", inventory.regular_consonant_count(), expected.regular_consonants),
        ("syllabic nasals", inventory.syllabic_consonant_count(), expected.syllabic_nasals),
        ("base consonants", base, expected.base_consonants),
        ("dialect patterns", patterns, expected.dialect_patterns),
        ("consonants with dialectal variants", base + patterns, expected.consonants_with_variants),
        ("A-group vowels", a, expected.a_vowels),
        ("E-group vowels", e, expected.e_vowels),
        ("vowels", a + e, expected.vowels),
    ];
    for (label, actual, wanted) in counts {
        if actual == wanted {
            report.pass(Check::PhonemeCounts, label, format!("{actual}"));
        } else {
            report.fail(
                Check::PhonemeCounts,
                label,
                format!("expected {wanted}, found {actual}"),
            );
        }
    }
}
