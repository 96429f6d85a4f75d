//! Source and target data models
//!
//! Source side: Nexo item definitions, keyed by item id inside each YAML file.
//! Target side: CraftEngine item, category and locale documents. Every map on
//! the target side is an [`IndexMap`] so serialized output follows insertion
//! order and two runs over the same input produce identical bytes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Model type emitted for items that ship their own 3D model
pub const MODEL_TYPE: &str = "minecraft:model";

/// A Nexo item definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Display name; falls back to the item key when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemname: Option<String>,

    #[serde(default, rename = "Pack", skip_serializing_if = "Option::is_none")]
    pub pack: Option<PackSection>,
}

/// The `Pack` block of a Nexo item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_model: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i64>,
}

impl ItemDefinition {
    /// The `Pack` block, or an empty one
    pub fn pack(&self) -> PackSection {
        self.pack.clone().unwrap_or_default()
    }

    /// Locale display text for this item
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self.itemname.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => key,
        }
    }
}

/// `<namespace>:<key>`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    pub namespace: String,
    pub key: String,
}

impl NamespacedKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// A converted CraftEngine item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedItem {
    #[serde(
        rename = "custom-model-data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_model_data: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    pub data: ItemData,

    pub model: ModelDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(rename = "item-name")]
    pub item_name: String,
}

/// How the client renders an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelDescriptor {
    /// Pre-built 3D model referenced by path
    Model {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    /// Flat item generated from a texture through a model template
    Template {
        template: String,
        arguments: TemplateArguments,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateArguments {
    pub path: String,
}

/// A CraftEngine category entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    pub icon: String,

    pub list: Vec<String>,
}

/// `items:` document written once per converted source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub items: IndexMap<String, ConvertedItem>,
}

/// `i18n:` document keyed by language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDocument {
    pub i18n: IndexMap<String, IndexMap<String, String>>,
}

/// `categories:` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDocument {
    pub categories: IndexMap<String, Category>,
}
