//! Category taxonomy
//!
//! One root category per namespace (`<ns>:<ns>`, priority 1) lists a hidden
//! subcategory for every source file that produced at least one item. The
//! root icon is taken from the first registered subcategory and never changes
//! afterwards.

use crate::diagnostics::DiagnosticSink;
use crate::model::{Category, CategoryDocument, NamespacedKey};
use indexmap::IndexMap;

pub const ROOT_PRIORITY: u32 = 1;

/// Pick an icon: the first key whose local part contains `logo`, else the first key
pub fn select_icon(keys: &[String]) -> Option<&str> {
    keys.iter()
        .find(|key| local_part(key).contains("logo"))
        .or_else(|| keys.first())
        .map(String::as_str)
}

fn local_part(key: &str) -> &str {
    key.split_once(':').map_or(key, |(_, local)| local)
}

/// Builds the category document for one run
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    namespace: String,
    root_key: String,
    categories: IndexMap<String, Category>,
    root_icon_set: bool,
}

impl CategoryBuilder {
    /// Create the builder with an empty root category for `namespace`
    pub fn new(namespace: &str) -> Self {
        let root_key = NamespacedKey::new(namespace, namespace).to_string();
        let root = Category {
            priority: Some(ROOT_PRIORITY),
            name: format!("<!i><white><i18n:category.{namespace}.name></white>"),
            lore: vec![format!("<!i><gray><i18n:category.{namespace}.lore>")],
            hidden: None,
            icon: String::new(),
            list: Vec::new(),
        };

        let mut categories = IndexMap::new();
        categories.insert(root_key.clone(), root);

        Self {
            namespace: namespace.to_string(),
            root_key,
            categories,
            root_icon_set: false,
        }
    }

    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    pub fn root(&self) -> Option<&Category> {
        self.categories.get(&self.root_key)
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Number of subcategories registered so far
    pub fn subcategory_count(&self) -> usize {
        self.categories.len() - 1
    }

    /// Register the subcategory for one source file
    ///
    /// `item_keys` are the namespaced keys the file actually produced, in
    /// file order. Returns the subcategory key, or `None` when `item_keys` is
    /// empty or `name` would collide with the root key. A second file with the same `name` replaces the earlier
    /// subcategory in place and is reported to `sink`.
    pub fn register_subcategory<D>(
        &mut self,
        name: &str,
        item_keys: Vec<String>,
        sink: &mut D,
    ) -> Option<String>
    where
        D: DiagnosticSink + ?Sized,
    {
        let key = NamespacedKey::new(&self.namespace, name).to_string();
        let Some(icon) = select_icon(&item_keys).map(str::to_string) else {
            sink.warn(format!("Skipping empty subcategory: {key}"));
            return None;
        };

        let subcategory = Category {
            priority: None,
            name: format!(
                "<!i><green><i18n:category.{}.{}></green>",
                self.namespace, name
            ),
            lore: Vec::new(),
            hidden: Some(true),
            icon: icon.clone(),
            list: item_keys,
        };

        if key == self.root_key {
            sink.warn(format!(
                "Subcategory {key} has the same key as the root category and was skipped"
            ));
            return None;
        }

        if self.categories.insert(key.clone(), subcategory).is_some() {
            sink.warn(format!(
                "Subcategory {key} was defined by an earlier file with the same name and has been replaced"
            ));
            return Some(key);
        }

        let root_key = self.root_key.clone();
        if let Some(root) = self.categories.get_mut(&root_key) {
            root.list.push(format!("#{key}"));
            if !self.root_icon_set {
                root.icon = icon;
                self.root_icon_set = true;
            }
        }

        Some(key)
    }

    pub fn into_document(self) -> CategoryDocument {
        CategoryDocument {
            categories: self.categories,
        }
    }
}
