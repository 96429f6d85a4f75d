//! Static model templates referenced by converted 2D items

use crate::model::MODEL_TYPE;
use crate::transform::SIMPLIFIED_TEMPLATE;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section key CraftEngine reads 2D model templates from
pub const TEMPLATE_SECTION: &str = "templates#models#2d";

const GENERATED_PARENT: &str = "minecraft:item/generated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
    pub generation: ModelGeneration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelGeneration {
    pub parent: String,
    pub textures: IndexMap<String, String>,
}

fn generated(path: &str, layer0: &str) -> ModelTemplate {
    let mut textures = IndexMap::new();
    textures.insert("layer0".to_string(), layer0.to_string());
    ModelTemplate {
        kind: MODEL_TYPE.to_string(),
        path: path.to_string(),
        generation: ModelGeneration {
            parent: GENERATED_PARENT.to_string(),
            textures,
        },
    }
}

/// Template document for `namespace`; independent of item content
pub fn template_document(namespace: &str) -> IndexMap<String, IndexMap<String, ModelTemplate>> {
    let mut templates = IndexMap::new();
    templates.insert(
        format!("{namespace}:model/generated"),
        generated("${model}", "${texture}"),
    );
    templates.insert(
        format!("{namespace}:{SIMPLIFIED_TEMPLATE}"),
        generated("${path}", "${path}"),
    );

    let mut document = IndexMap::new();
    document.insert(TEMPLATE_SECTION.to_string(), templates);
    document
}
