// File: src/persistence.rs
use crate::core::inventory::PhonemeInventory;
use crate::core::tone::ToneTable;
use crate::core::types::{Dataset, PrimeRoot};
use crate::error::ForgeError;
use crate::validate::{Collection, Corpus, RecordKind};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where every catalog and collection lives under the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn consonants(&self) -> PathBuf {
        self.root.join("consonants.json")
    }

    pub fn vowels(&self) -> PathBuf {
        self.root.join("vowels.json")
    }

    pub fn prime_roots(&self) -> PathBuf {
        self.root.join("verbs").join("prime-roots").join("prime-verb-roots.json")
    }

    pub fn dialectal_roots(&self) -> PathBuf {
        self.root.join("verbs").join("generated-dialectal-roots.json")
    }

    pub fn infinitives(&self) -> PathBuf {
        self.root.join("verbs").join("generated-infinitives.json")
    }

    pub fn dialectal_infinitives(&self) -> PathBuf {
        self.root.join("verbs").join("generated-dialectal-infinitives.json")
    }
}

pub fn load_inventory(layout: &DataLayout, tones: &ToneTable) -> Result<PhonemeInventory, ForgeError> {
    let consonants = fs::read_to_string(layout.consonants())?;
    let vowels = fs::read_to_string(layout.vowels())?;
    let inventory = PhonemeInventory::from_json(&consonants, &vowels, tones)?;
    tracing::info!(
        target: "roots.persistence",
        consonants = inventory.consonants().len(),
        vowels = inventory.vowels().len(),
        "loaded phoneme inventory"
    );
    Ok(inventory)
}

/// Roots already on record. A missing file means a first run.
pub fn load_prime_roots(path: &Path) -> Result<Vec<PrimeRoot>, ForgeError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                target: "roots.persistence",
                path = %path.display(),
                "no existing prime roots, starting from generated data only"
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let roots: Vec<PrimeRoot> = serde_json::from_reader(BufReader::new(file))?;
    Ok(roots)
}

/// Writes `value` as pretty JSON through a temp file in the same directory,
/// so a reader never sees a half-written collection.
fn write_json_atomic<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), ForgeError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn save_dataset(dataset: &Dataset, layout: &DataLayout) -> Result<(), ForgeError> {
    write_json_atomic(&dataset.prime_roots, &layout.prime_roots())?;
    write_json_atomic(&dataset.dialectal_roots, &layout.dialectal_roots())?;
    write_json_atomic(&dataset.infinitives, &layout.infinitives())?;
    write_json_atomic(&dataset.dialectal_infinitives, &layout.dialectal_infinitives())?;
    tracing::info!(
        target: "roots.persistence",
        root = %layout.root().display(),
        "saved dataset"
    );
    Ok(())
}

/// Reads the four collections as raw JSON for the validator. Files that
/// cannot be read or parsed become unreadable collections instead of errors.
pub fn load_corpus(layout: &DataLayout) -> Corpus {
    let sources = [
        ("prime-verb-roots.json", RecordKind::PrimeRoot, layout.prime_roots()),
        ("generated-dialectal-roots.json", RecordKind::DialectalRoot, layout.dialectal_roots()),
        ("generated-infinitives.json", RecordKind::Infinitive, layout.infinitives()),
        (
            "generated-dialectal-infinitives.json",
            RecordKind::DialectalInfinitive,
            layout.dialectal_infinitives(),
        ),
    ];
    let collections = sources
        .into_iter()
        .map(|(name, kind, path)| match fs::read_to_string(&path) {
            Ok(text) => Collection::from_json_str(name, kind, &text),
            Err(e) => Collection::unreadable(name, kind, format!("cannot read {}: {e}", path.display())),
        })
        .collect();
    Corpus { collections }
}

/// Binary snapshot of a whole dataset, for fast reloads between runs.
pub fn save_snapshot(dataset: &Dataset, path: &Path) -> Result<(), ForgeError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, dataset)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Dataset, ForgeError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset: Dataset = bincode::deserialize_from(reader)?;
    Ok(dataset)
}
