use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

/// Label identifiers used by the original mixing screen
pub const LABEL_BLUE: &str = "Blue";
pub const LABEL_RED: &str = "Red";
pub const LABEL_PURPLE: &str = "Purple";

/// Localized string table keyed by label identifier
///
/// Lookups for a key that has no entry return the key itself, so an empty
/// table renders the identifiers verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: HashMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the localized text for `key`, or `key` when the table has no entry
    pub fn localized<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(value) => value.as_str(),
            None => {
                if !self.entries.is_empty() {
                    debug!("No localized text for label '{}', using identifier", key);
                }
                key
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};
    use std::sync::Mutex;

    struct RecordingLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for RecordingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn empty_table_falls_back_to_key() {
        let table = LabelTable::new();
        assert!(table.is_empty());
        assert_eq!(table.localized(LABEL_PURPLE), "Purple");
    }

    #[test]
    fn lookup_uses_entries() {
        let table: LabelTable = [(LABEL_BLUE, "Синий"), (LABEL_RED, "Красный")]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.localized(LABEL_BLUE), "Синий");
        assert_eq!(table.localized(LABEL_RED), "Красный");
        assert_eq!(table.localized("Green"), "Green");
    }

    #[test]
    fn deserializes_from_json_object() {
        let table: LabelTable = serde_json::from_str(r#"{"Purple": "Violet"}"#).unwrap();
        assert_eq!(table.localized(LABEL_PURPLE), "Violet");
    }

    #[test]
    fn insert_overrides() {
        let mut table = LabelTable::new();
        table.insert(LABEL_RED, "Rouge");
        table.insert(LABEL_RED, "Rojo");
        assert_eq!(table.localized(LABEL_RED), "Rojo");
    }

    #[test]
    fn missing_label_is_not_a_warning() {
        // set_logger only succeeds once per process
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let table: LabelTable = [(LABEL_BLUE, "Bleu")].into_iter().collect();
        assert_eq!(table.localized("Teal"), "Teal");

        let records = LOGGER.records.lock().unwrap();
        let fallback: Vec<_> = records
            .iter()
            .filter(|(_, message)| message.contains("'Teal'"))
            .collect();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].0, Level::Debug);
    }
}
