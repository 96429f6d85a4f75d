//! Flat locale table for item and category display names

use crate::model::LocaleDocument;
use indexmap::IndexMap;

/// Language the generated table is written under
pub const DEFAULT_LANGUAGE: &str = "en";

/// `item.<ns>.<key>` and `category.<ns>.<name>` -> display text
#[derive(Debug, Clone)]
pub struct LocaleTable {
    language: String,
    entries: IndexMap<String, String>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LocaleTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn item_key(namespace: &str, key: &str) -> String {
        format!("item.{namespace}.{key}")
    }

    pub fn category_key(namespace: &str, name: &str) -> String {
        format!("category.{namespace}.{name}")
    }

    pub fn record_item(&mut self, namespace: &str, key: &str, text: impl Into<String>) {
        self.entries
            .insert(Self::item_key(namespace, key), text.into());
    }

    pub fn record_category(&mut self, namespace: &str, name: &str, text: impl Into<String>) {
        self.entries
            .insert(Self::category_key(namespace, name), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_document(self) -> LocaleDocument {
        let mut i18n = IndexMap::new();
        i18n.insert(self.language, self.entries);
        LocaleDocument { i18n }
    }
}
