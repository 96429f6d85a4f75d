//! End-to-end conversion tests over temporary Nexo packs

use nexcraft_core::diagnostics::Level;
use nexcraft_core::model::{CategoryDocument, ItemDocument, LocaleDocument, ModelDescriptor};
use nexcraft_core::{Converter, OutputLayout};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to write a source file under the items root
fn write_items(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let content = fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

struct Pack {
    _temp: TempDir,
    items: std::path::PathBuf,
    output: std::path::PathBuf,
}

fn pack() -> Pack {
    let temp = TempDir::new().unwrap();
    let items = temp.path().join("input/items");
    let output = temp.path().join("output");
    fs::create_dir_all(&items).unwrap();
    Pack {
        _temp: temp,
        items,
        output,
    }
}

#[test]
fn test_duplicate_key_across_files() {
    let pack = pack();
    write_items(
        &pack.items,
        "a.yml",
        "x:\n  material: stick\n  Pack:\n    texture: t1\n",
    );
    write_items(
        &pack.items,
        "b.yml",
        "x:\n  material: stone\n  Pack:\n    generate_model: false\n    model: m1\n",
    );

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    let a: ItemDocument = read_yaml(&layout.item_document(Path::new("a.yml")));
    assert_eq!(a.items.keys().collect::<Vec<_>>(), vec!["pack:x"]);
    let x = &a.items["pack:x"];
    assert_eq!(x.material.as_deref(), Some("STICK"));
    assert!(matches!(
        &x.model,
        ModelDescriptor::Template { arguments, .. } if arguments.path == "t1"
    ));
    assert!(!layout.item_document(Path::new("b.yml")).exists());

    let categories: CategoryDocument = read_yaml(&layout.categories());
    assert_eq!(categories.categories["pack:a"].list, vec!["pack:x"]);
    assert!(!categories.categories.contains_key("pack:b"));
    assert_eq!(categories.categories["pack:pack"].list, vec!["#pack:a"]);

    assert_eq!(report.summary.duplicates_dropped, 1);
    assert_eq!(report.summary.files_converted, 1);
    assert_eq!(report.summary.files_skipped, 1);
    assert!(
        report
            .diagnostics
            .warnings()
            .any(|w| w.contains("pack:x") && w.contains("b.yml"))
    );
}

#[test]
fn test_collision_in_same_file() {
    let pack = pack();
    write_items(
        &pack.items,
        "blocks.yml",
        r#"
granite_tile:
  material: STONE
  Pack:
    texture: blocks/granite_tile
    custom_model_data: 5
marble_tile:
  material: stone
  Pack:
    generate_model: false
    model: blocks/marble_tile
    custom_model_data: 5
"#,
    );

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();

    assert_eq!(report.summary.items_converted, 2);
    assert_eq!(report.summary.collisions, 1);
    let collision_warnings = report
        .diagnostics
        .warnings()
        .filter(|w| w.contains("collision"))
        .count();
    assert_eq!(collision_warnings, 1);
    assert_eq!(report.identifier_report, "STONE: 5");
}

#[test]
fn test_render_modes_and_unrendered_items() {
    let pack = pack();
    write_items(
        &pack.items,
        "furniture/chairs.yml",
        r#"
oak_chair:
  itemname: Oak Chair
  material: paper
  Pack:
    generate_model: false
    model: furniture/oak_chair
    custom_model_data: 10
chair_logo:
  material: paper
  Pack:
    texture: furniture/chair_logo
    custom_model_data: 11
placeholder:
  material: paper
"#,
    );

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "deco")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    let doc: ItemDocument = read_yaml(&layout.item_document(Path::new("furniture/chairs.yml")));
    assert_eq!(
        doc.items.keys().collect::<Vec<_>>(),
        vec!["deco:oak_chair", "deco:chair_logo"]
    );
    assert_eq!(
        doc.items["deco:oak_chair"].model,
        ModelDescriptor::Model {
            kind: "minecraft:model".to_string(),
            path: Some("furniture/oak_chair".to_string()),
        }
    );
    assert_eq!(report.summary.items_unrendered, 1);
    // Unrendered items are excluded quietly
    assert_eq!(report.diagnostics.count(Level::Warning), 0);

    let categories: CategoryDocument = read_yaml(&layout.categories());
    let chairs = &categories.categories["deco:chairs"];
    assert_eq!(chairs.icon, "deco:chair_logo");
    assert_eq!(chairs.hidden, Some(true));
    assert_eq!(categories.categories["deco:deco"].icon, "deco:chair_logo");

    let locale: LocaleDocument = read_yaml(&layout.locale());
    let en = &locale.i18n["en"];
    assert_eq!(en["item.deco.oak_chair"], "Oak Chair");
    assert_eq!(en["item.deco.chair_logo"], "chair_logo");
    assert_eq!(en["category.deco.name"], "deco");
    assert_eq!(en["category.deco.lore"], "deco Items");
    assert_eq!(en["category.deco.chairs"], "chairs");

    assert_eq!(report.identifier_report, "PAPER: 10-11");
}

#[test]
fn test_file_with_only_unrendered_items_has_no_subcategory() {
    let pack = pack();
    write_items(&pack.items, "misc.yml", "thing:\n  material: stick\n");

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    let categories: CategoryDocument = read_yaml(&layout.categories());
    assert_eq!(categories.categories.len(), 1);
    assert_eq!(categories.categories["pack:pack"].icon, "");
    assert!(!layout.item_document(Path::new("misc.yml")).exists());
    assert!(
        report
            .diagnostics
            .warnings()
            .any(|w| w.contains("Skipping empty subcategory: pack:misc"))
    );
}

#[test]
fn test_malformed_file_is_skipped() {
    let pack = pack();
    write_items(&pack.items, "a_broken.yml", "x: [unterminated\n");
    write_items(&pack.items, "b_good.yml", "y:\n  material: stick\n  Pack:\n    texture: t\n");

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();

    assert_eq!(report.summary.files_found, 2);
    assert_eq!(report.summary.files_skipped, 1);
    assert_eq!(report.summary.files_converted, 1);

    let categories: CategoryDocument = read_yaml(&OutputLayout::new(&pack.output).categories());
    assert_eq!(categories.categories["pack:pack"].list, vec!["#pack:b_good"]);
}

#[test]
fn test_empty_tree_still_writes_aggregates() {
    let pack = pack();

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    assert!(layout.locale().exists());
    assert!(layout.categories().exists());
    assert!(layout.templates().exists());
    assert!(layout.identifier_report().exists());
    assert_eq!(fs::read_to_string(layout.identifier_report()).unwrap(), "");
    assert_eq!(report.summary.documents_written, 4);
    assert_eq!(report.summary.items_converted, 0);
}

#[test]
fn test_blacklisted_folder_is_ignored() {
    let pack = pack();
    write_items(
        &pack.items,
        "nexo_defaults/armor.yml",
        "helmet:\n  material: leather_helmet\n  Pack:\n    texture: armor/helmet\n",
    );
    write_items(&pack.items, "gems.yml", "ruby:\n  material: paper\n  Pack:\n    texture: gems/ruby\n");

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();

    assert_eq!(report.summary.files_found, 1);
    let categories: CategoryDocument = read_yaml(&OutputLayout::new(&pack.output).categories());
    assert!(!categories.categories.contains_key("pack:armor"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let pack = pack();
    write_items(
        &pack.items,
        "gems.yml",
        r#"
ruby:
  material: paper
  Pack:
    texture: gems/ruby
    custom_model_data: 3
sapphire:
  material: paper
  Pack:
    texture: gems/sapphire
    custom_model_data: 1
"#,
    );
    write_items(
        &pack.items,
        "tools/pickaxe.yml",
        "mythril_pickaxe:\n  material: diamond_pickaxe\n  Pack:\n    generate_model: false\n    model: tools/mythril\n    custom_model_data: 2\n",
    );

    let converter = Converter::new();
    let layout = OutputLayout::new(&pack.output);
    let files = [
        layout.item_document(Path::new("gems.yml")),
        layout.item_document(Path::new("tools/pickaxe.yml")),
        layout.locale(),
        layout.categories(),
        layout.templates(),
        layout.identifier_report(),
    ];

    converter.convert(&pack.items, &pack.output, "pack").unwrap();
    let first: Vec<String> = files.iter().map(|f| fs::read_to_string(f).unwrap()).collect();

    converter.convert(&pack.items, &pack.output, "pack").unwrap();
    let second: Vec<String> = files.iter().map(|f| fs::read_to_string(f).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(first[5], "DIAMOND_PICKAXE: 2\nPAPER: 1, 3\n");
}

#[test]
fn test_file_named_after_namespace_keeps_its_items() {
    let pack = pack();
    write_items(
        &pack.items,
        "pack.yml",
        "chair:\n  material: stone\n  Pack:\n    generate_model: false\n    model: furniture/chair\n    custom_model_data: 9\n",
    );

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    let doc: ItemDocument = read_yaml(&layout.item_document(Path::new("pack.yml")));
    assert_eq!(
        doc.items["pack:chair"].model,
        ModelDescriptor::Model {
            kind: "minecraft:model".to_string(),
            path: Some("furniture/chair".to_string()),
        }
    );
    assert_eq!(report.summary.items_converted, 1);
    assert_eq!(report.summary.files_converted, 1);
    assert_eq!(report.identifier_report, "STONE: 9");

    // The root category is left untouched
    let categories: CategoryDocument = read_yaml(&layout.categories());
    assert_eq!(categories.categories.len(), 1);
    assert!(categories.categories["pack:pack"].list.is_empty());
    assert!(
        report
            .diagnostics
            .warnings()
            .any(|w| w.contains("same key as the root category"))
    );
}

#[test]
fn test_same_file_name_in_two_folders() {
    let pack = pack();
    write_items(
        &pack.items,
        "a/gems.yml",
        "ruby:\n  material: paper\n  Pack:\n    texture: gems/ruby\n",
    );
    write_items(
        &pack.items,
        "b/gems.yml",
        "emerald:\n  material: paper\n  Pack:\n    texture: gems/emerald\n",
    );

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    let a: ItemDocument = read_yaml(&layout.item_document(Path::new("a/gems.yml")));
    let b: ItemDocument = read_yaml(&layout.item_document(Path::new("b/gems.yml")));
    assert!(a.items.contains_key("pack:ruby"));
    assert!(b.items.contains_key("pack:emerald"));
    assert_eq!(report.summary.items_converted, 2);

    let categories: CategoryDocument = read_yaml(&layout.categories());
    assert_eq!(categories.categories["pack:pack"].list, vec!["#pack:gems"]);
    assert_eq!(categories.categories["pack:gems"].list, vec!["pack:emerald"]);
    assert!(
        report
            .diagnostics
            .warnings()
            .any(|w| w.contains("pack:gems") && w.contains("replaced"))
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_entry_does_not_stop_the_run() {
    let pack = pack();
    write_items(&pack.items, "gems.yml", "ruby:\n  material: paper\n  Pack:\n    texture: gems/ruby\n");
    std::os::unix::fs::symlink(pack.items.join("gone"), pack.items.join("linked")).unwrap();

    let report = Converter::new()
        .convert(&pack.items, &pack.output, "pack")
        .unwrap();
    let layout = OutputLayout::new(&pack.output);

    assert_eq!(report.summary.files_found, 1);
    assert_eq!(report.summary.items_converted, 1);
    assert!(layout.locale().exists());
    assert!(layout.categories().exists());
    assert!(layout.templates().exists());
    assert!(layout.identifier_report().exists());
    assert!(
        report
            .diagnostics
            .warnings()
            .any(|w| w.contains("linked"))
    );
}

#[test]
fn test_missing_input_root_is_an_error() {
    let pack = pack();
    let result = Converter::new().convert(&pack.items.join("missing"), &pack.output, "pack");
    assert!(result.is_err());
}
