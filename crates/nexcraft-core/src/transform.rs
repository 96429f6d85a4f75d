//! Nexo item -> CraftEngine item conversion
//!
//! Each item is rendered in one of two ways:
//!
//! 1. `Pack.generate_model: false` -> the item ships its own 3D model and is
//!    emitted as `{type: minecraft:model, path: <Pack.model>}`.
//! 2. otherwise, a non-empty `Pack.texture` -> a flat item built from the
//!    namespace's `model/simplified_generated` template.
//!
//! Items matching neither rule produce no output.

use crate::diagnostics::DiagnosticSink;
use crate::identifiers::{Collision, IdentifierTracker};
use crate::model::{
    ConvertedItem, ItemData, ItemDefinition, MODEL_TYPE, ModelDescriptor, NamespacedKey,
    PackSection, TemplateArguments,
};
use indexmap::IndexMap;

/// Template used for texture-only items, relative to the namespace
pub const SIMPLIFIED_TEMPLATE: &str = "model/simplified_generated";

/// Which shape an item is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Model,
    Generated,
}

/// Select the render mode for a `Pack` block; first matching rule wins
pub fn render_mode(pack: &PackSection) -> Option<RenderMode> {
    if pack.generate_model == Some(false) {
        Some(RenderMode::Model)
    } else if pack.texture.as_deref().is_some_and(|t| !t.is_empty()) {
        Some(RenderMode::Generated)
    } else {
        None
    }
}

/// `<!i><white><i18n:item.<namespace>.<key>></white>`
pub fn item_name_reference(namespace: &str, key: &str) -> String {
    format!("<!i><white><i18n:item.{namespace}.{key}></white>")
}

/// Convert a single item, or `None` when no render mode applies
pub fn convert_item(namespace: &str, key: &str, item: &ItemDefinition) -> Option<ConvertedItem> {
    let pack = item.pack();
    let model = match render_mode(&pack)? {
        RenderMode::Model => ModelDescriptor::Model {
            kind: MODEL_TYPE.to_string(),
            path: pack.model.clone(),
        },
        RenderMode::Generated => ModelDescriptor::Template {
            template: format!("{namespace}:{SIMPLIFIED_TEMPLATE}"),
            arguments: TemplateArguments {
                path: pack.texture.clone().unwrap_or_default(),
            },
        },
    };

    Some(ConvertedItem {
        custom_model_data: pack.custom_model_data,
        material: item.material.as_deref().map(str::to_uppercase),
        data: ItemData {
            item_name: item_name_reference(namespace, key),
        },
        model,
    })
}

/// Result of converting the surviving items of one file
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    /// Namespaced key -> converted item, in file order
    pub items: IndexMap<String, ConvertedItem>,
    /// Local keys that matched no render mode
    pub unrendered: Vec<String>,
    pub collisions: Vec<Collision>,
}

/// Convert every item of one file
///
/// Custom model data of each converted item is registered in `tracker`;
/// collisions are reported to `sink` but never block conversion.
pub fn convert_items<D>(
    namespace: &str,
    items: &IndexMap<String, ItemDefinition>,
    tracker: &mut IdentifierTracker,
    sink: &mut D,
) -> TransformOutcome
where
    D: DiagnosticSink + ?Sized,
{
    let mut outcome = TransformOutcome::default();

    for (key, item) in items {
        let Some(converted) = convert_item(namespace, key, item) else {
            outcome.unrendered.push(key.clone());
            continue;
        };

        let namespaced = NamespacedKey::new(namespace, key).to_string();
        if let (Some(material), Some(cmd)) = (&converted.material, converted.custom_model_data)
            && let Some(collision) = tracker.register(material, cmd, &namespaced)
        {
            sink.warn(format!("Identifier collision: {collision}"));
            outcome.collisions.push(collision);
        }

        outcome.items.insert(namespaced, converted);
    }

    outcome
}
