//! Term store implementation

use crate::columns;
use crate::StoreError;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Read access to term metadata, keyed by term IRI
pub trait TermLookup {
    fn label(&self, uri: &str) -> Option<&str>;
    fn synonyms(&self, uri: &str) -> &[String];
    fn definitions(&self, uri: &str) -> &[String];
    fn parents(&self, uri: &str) -> &[String];
}

/// Immutable term store
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    labels: HashMap<String, String>,
    synonyms: HashMap<String, Vec<String>>,
    definitions: HashMap<String, Vec<String>>,
    parents: HashMap<String, Vec<String>>,
}

impl TermStore {
    pub fn builder() -> TermStoreBuilder {
        TermStoreBuilder::new()
    }

    /// Whether any column holds a value for `uri`
    pub fn contains(&self, uri: &str) -> bool {
        self.labels.contains_key(uri)
            || self.synonyms.contains_key(uri)
            || self.definitions.contains_key(uri)
            || self.parents.contains_key(uri)
    }

    /// Number of distinct term IRIs with at least one value
    pub fn len(&self) -> usize {
        let mut keys: Vec<&String> = self
            .labels
            .keys()
            .chain(self.synonyms.keys())
            .chain(self.definitions.keys())
            .chain(self.parents.keys())
            .collect();
        keys.sort();
        keys.dedup();
        keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TermLookup for TermStore {
    fn label(&self, uri: &str) -> Option<&str> {
        self.labels.get(uri).map(String::as_str)
    }

    fn synonyms(&self, uri: &str) -> &[String] {
        self.synonyms.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }

    fn definitions(&self, uri: &str) -> &[String] {
        self.definitions.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }

    fn parents(&self, uri: &str) -> &[String] {
        self.parents.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One parsed table row. `None` means the column is absent from the source.
#[derive(Debug)]
struct TermRow {
    id: String,
    label: String,
    synonyms: Vec<String>,
    parents: Option<Vec<String>>,
    definition: Option<String>,
}

/// Accumulates term tables into a [`TermStore`].
///
/// Each source is parsed completely before any of its rows is applied, so a
/// source that fails to load leaves the builder unchanged.
/// Maps a `Class ID` cell to the key the store is queried with
pub type KeyNormalizer = Box<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Default)]
pub struct TermStoreBuilder {
    store: TermStore,
    sources: usize,
    normalize: Option<KeyNormalizer>,
}

impl std::fmt::Debug for TermStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermStoreBuilder")
            .field("store", &self.store)
            .field("sources", &self.sources)
            .field("normalize", &self.normalize.is_some())
            .finish()
    }
}

impl TermStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite every `Class ID` with `normalize` before it is stored, so
    /// prefixed ids such as `NCIT:C1` land under their canonical IRI.
    /// Applies to sources loaded after the call.
    pub fn with_key_normalizer<F>(mut self, normalize: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.normalize = Some(Box::new(normalize));
        self
    }

    /// Load a plain CSV table. Returns the number of rows applied.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<usize, StoreError> {
        let rows = parse_rows(reader)?;
        let count = rows.len();
        for row in rows {
            self.apply(row);
        }
        self.sources += 1;
        debug!("Applied {} term rows from source #{}", count, self.sources);
        Ok(count)
    }

    /// Load a gzip-compressed CSV table
    pub fn load_gzip<R: Read>(&mut self, reader: R) -> Result<usize, StoreError> {
        self.load_csv(GzDecoder::new(reader))
    }

    /// Load a table from disk; files ending in `.gz` are decompressed
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, StoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let count = if path.extension().map_or(false, |ext| ext == "gz") {
            self.load_gzip(reader)?
        } else {
            self.load_csv(reader)?
        };
        info!("Loaded {} terms from {}", count, path.display());
        Ok(count)
    }

    pub fn build(self) -> TermStore {
        self.store
    }

    fn apply(&mut self, mut row: TermRow) {
        if let Some(normalize) = &self.normalize {
            row.id = normalize(&row.id);
        }
        let store = &mut self.store;

        if row.label.is_empty() {
            store.labels.remove(&row.id);
        } else {
            store.labels.insert(row.id.clone(), row.label);
        }

        if row.synonyms.is_empty() {
            store.synonyms.remove(&row.id);
        } else {
            store.synonyms.insert(row.id.clone(), row.synonyms);
        }

        if let Some(parents) = row.parents {
            if parents.is_empty() {
                store.parents.remove(&row.id);
            } else {
                store.parents.insert(row.id.clone(), parents);
            }
        }

        if let Some(definition) = row.definition {
            if definition.is_empty() {
                store.definitions.remove(&row.id);
            } else {
                store.definitions.insert(row.id, vec![definition]);
            }
        }
    }
}

fn parse_rows<R: Read>(reader: R) -> Result<Vec<TermRow>, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let id_index = position(columns::CLASS_ID).ok_or(StoreError::MissingColumn(columns::CLASS_ID))?;
    let label_index =
        position(columns::PREFERRED_LABEL).ok_or(StoreError::MissingColumn(columns::PREFERRED_LABEL))?;
    let synonyms_index = position(columns::SYNONYMS).ok_or(StoreError::MissingColumn(columns::SYNONYMS))?;
    let parents_index = position(columns::PARENTS);
    let definition_index = position(columns::DEFINITION);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cell = |index: usize| record.get(index).unwrap_or("");

        let id = cell(id_index).trim();
        if id.is_empty() {
            continue;
        }

        rows.push(TermRow {
            id: id.to_string(),
            label: cell(label_index).to_string(),
            synonyms: split_list(cell(synonyms_index)),
            parents: parents_index.map(|i| split_list(cell(i))),
            definition: definition_index.map(|i| cell(i).to_string()),
        });
    }

    Ok(rows)
}

/// Split a pipe-delimited cell, trimming elements and dropping empty ones
pub fn split_list(cell: &str) -> Vec<String> {
    cell.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a | b||c "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" | ").is_empty());
    }

    #[test]
    fn test_rows_without_id_are_skipped() {
        let data = "Class ID,Preferred Label,Synonyms\n,orphan,\nhttp://x/A,A,\n";
        let rows = parse_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "http://x/A");
        assert!(rows[0].parents.is_none());
        assert!(rows[0].definition.is_none());
    }
}
