use crate::error::DictionaryError;
use crate::trie::TrieStore;
use crate::{info_log, warn_log};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

const CONFIG_DIR_NAME: &str = "trie-hangman";
const DICTIONARY_FILE_NAME: &str = "dictionary.txt";

/// Outcome of loading a dictionary: how many lines went in and which were
/// turned away.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub rejected: Vec<String>,
}

impl LoadReport {
    fn record(&mut self, store: &mut TrieStore, line: &str) {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            return;
        }
        match store.insert(word) {
            Ok(()) => self.inserted += 1,
            Err(e) => {
                warn_log!("Skipping dictionary entry: {}", e);
                self.rejected.push(word.to_string());
            }
        }
    }

    fn record_bytes(&mut self, store: &mut TrieStore, line: &[u8]) {
        match std::str::from_utf8(line) {
            Ok(text) => self.record(store, text),
            Err(e) => {
                let word = String::from_utf8_lossy(line).trim().to_string();
                warn_log!("Skipping dictionary entry {:?}: {}", word, e);
                self.rejected.push(word);
            }
        }
    }
}

/// Inserts every word of a newline-delimited list into `store`.
///
/// Blank lines and lines starting with `#` are ignored. Malformed words are
/// left out of the store and listed in the report.
pub fn load_dictionary_from_str(data: &str, store: &mut TrieStore) -> LoadReport {
    let mut report = LoadReport::default();
    for line in data.lines() {
        report.record(store, line);
    }
    info_log!(
        "Loaded {} entries ({} rejected)",
        report.inserted,
        report.rejected.len()
    );
    report
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(
    path: P,
    store: &mut TrieStore,
) -> Result<LoadReport, DictionaryError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);
    let mut report = LoadReport::default();
    // Lines are read as bytes so one badly encoded entry is rejected on its own.
    let mut line = Vec::new();
    while reader.read_until(b'\n', &mut line).map_err(io_error)? > 0 {
        report.record_bytes(store, &line);
        line.clear();
    }
    info_log!(
        "Loaded {} entries from {} ({} rejected)",
        report.inserted,
        path.display(),
        report.rejected.len()
    );
    Ok(report)
}

/// `<config dir>/trie-hangman/dictionary.txt`, if the platform has a config dir.
#[must_use]
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DICTIONARY_FILE_NAME))
}

/// Picks the dictionary to load: an explicit path, then the user's config file
/// if it exists, then the embedded list.
pub fn load_dictionary(
    explicit: Option<&Path>,
    store: &mut TrieStore,
) -> Result<LoadReport, DictionaryError> {
    if let Some(path) = explicit {
        return load_dictionary_from_file(path, store);
    }
    if let Some(path) = default_dictionary_path()
        && path.is_file()
    {
        return load_dictionary_from_file(&path, store);
    }
    Ok(load_dictionary_from_str(EMBEDDED_DICTIONARY, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(test_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "trie_hangman_{}_{}.txt",
            std::process::id(),
            test_name
        ))
    }

    #[test]
    fn test_embedded_dictionary_loads_cleanly() {
        let mut store = TrieStore::new();
        let report = load_dictionary_from_str(EMBEDDED_DICTIONARY, &mut store);
        assert!(report.rejected.is_empty());
        assert_eq!(report.inserted, 11);
        assert_eq!(store.count(), 11);
        assert!(store.contains("abacaxi"));
        assert!(store.contains("vermelho"));
    }

    #[test]
    fn test_load_skips_blank_and_comment_lines() {
        let mut store = TrieStore::new();
        let report = load_dictionary_from_str("# fruits\n\npera\n   \n  uva  \n", &mut store);
        assert_eq!(report.inserted, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(store.list_all().collect::<Vec<_>>(), vec!["pera", "uva"]);
    }

    #[test]
    fn test_load_reports_malformed_words() {
        let mut store = TrieStore::new();
        let report = load_dictionary_from_str("azul\nVerde\nr2d2\nroxo\n", &mut store);
        assert_eq!(report.inserted, 2);
        assert_eq!(report.rejected, vec!["Verde".to_string(), "r2d2".to_string()]);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_duplicates_count_as_inserted_once_stored() {
        let mut store = TrieStore::new();
        let report = load_dictionary_from_str("pera\npera\n", &mut store);
        assert_eq!(report.inserted, 2);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("load_from_file");
        fs::write(&path, "morango\nmelancia\nBAD\n").unwrap();

        let mut store = TrieStore::new();
        let report = load_dictionary_from_file(&path, &mut store).unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.rejected, vec!["BAD".to_string()]);
        assert_eq!(store.list_all().collect::<Vec<_>>(), vec!["melancia", "morango"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = temp_path("missing_file");
        let _ = fs::remove_file(&path);

        let mut store = TrieStore::new();
        match load_dictionary_from_file(&path, &mut store) {
            Err(DictionaryError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_dictionary_prefers_explicit_path() {
        let path = temp_path("explicit_path");
        fs::write(&path, "kiwi\n").unwrap();

        let mut store = TrieStore::new();
        load_dictionary(Some(path.as_path()), &mut store).unwrap();
        assert_eq!(store.list_all().collect::<Vec<_>>(), vec!["kiwi"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_default_dictionary_path_shape() {
        if let Some(path) = default_dictionary_path() {
            assert!(path.ends_with("trie-hangman/dictionary.txt"));
        }
    }

    #[test]
    fn test_load_from_file_rejects_badly_encoded_line() {
        let path = temp_path("bad_encoding");
        fs::write(&path, b"azul\nma\xE7a\r\npera\nverde").unwrap();

        let mut store = TrieStore::new();
        let report = load_dictionary_from_file(&path, &mut store).unwrap();
        assert_eq!(report.inserted, 3);
        assert_eq!(report.rejected, vec!["ma\u{FFFD}a".to_string()]);
        assert_eq!(store.list_all().collect::<Vec<_>>(), vec!["azul", "pera", "verde"]);

        let _ = fs::remove_file(&path);
    }
}
