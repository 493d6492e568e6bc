use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::Value;

/// Process-wide cache for the default candidate vocabulary.
///
/// The vocabulary is the deduplicated union, in encounter order, of every
/// record's canonical display name and alias list from an on-disk product
/// dictionary. It is loaded on first use and never again: the dictionary is
/// assumed static for the process lifetime, and a restart is the only
/// refresh. A missing or malformed dictionary degrades to an empty
/// vocabulary rather than an error; proximity lookups then simply find
/// nothing until the file is fixed and the process restarted.
pub struct VocabularyCache {
    path: PathBuf,
    entries: OnceCell<Vec<String>>,
}

/// One dictionary record. Extra fields in the file are ignored; only the
/// display name and aliases feed the vocabulary.
#[derive(Debug, Deserialize)]
struct DictionaryRecord {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

impl VocabularyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    /// Return the cached vocabulary, loading it on the first call.
    ///
    /// Racing first callers are serialized by the `OnceCell`, so the
    /// dictionary file is read at most once per process and every caller
    /// observes the same sequence.
    pub fn get_or_load(&self) -> &[String] {
        self.entries.get_or_init(|| match load_dictionary(&self.path) {
            Ok(entries) => {
                tracing::info!(
                    path = %self.path.display(),
                    count = entries.len(),
                    "loaded candidate vocabulary"
                );
                entries
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "candidate vocabulary unavailable, using empty list"
                );
                Vec::new()
            }
        })
    }
}

/// Read and flatten the dictionary file.
///
/// The file is a JSON object keyed by product identifier; file order is the
/// encounter order (serde_json is built with `preserve_order`). Per record
/// the canonical name comes first (the key itself when the display name is
/// blank), followed by the aliases. Entries are trimmed before the emptiness
/// and duplicate checks; the duplicate check is exact-string on the trimmed
/// form.
fn load_dictionary(path: &Path) -> Result<Vec<String>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("read failed: {e}"))?;
    let records: serde_json::Map<String, Value> =
        serde_json::from_str(&raw).map_err(|e| format!("parse failed: {e}"))?;

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut push = |candidate: &str| {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_string()) {
            entries.push(trimmed.to_string());
        }
    };

    for (key, value) in records {
        let record: DictionaryRecord =
            serde_json::from_value(value).map_err(|e| format!("parse failed for {key}: {e}"))?;

        if record.display_name.trim().is_empty() {
            push(&key);
        } else {
            push(&record.display_name);
        }
        for alias in &record.aliases {
            push(alias);
        }
    }

    Ok(entries)
}
