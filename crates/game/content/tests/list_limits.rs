//! Spawn and loot lists are bounded by the one-byte count on the wire.
use std::{fs, path::Path};

use adventure_content::{LoadError, WorldLoader};

fn world_with(dir: &Path, monsters: usize, loot: usize) -> std::path::PathBuf {
    let monsters = vec!["1"; monsters].join(", ");
    let loot = vec!["\"w1\""; loot].join(", ");
    let path = dir.join("world.ron");
    fs::write(
        &path,
        format!(
            "{{ 1: (name: \"Crowded\", spawn: (monsters: [{monsters}]), loot: (entries: [{loot}])) }}"
        ),
    )
    .unwrap();
    path
}

#[test]
fn full_lists_load() {
    let temp = tempfile::tempdir().unwrap();
    let world = WorldLoader::load(&world_with(temp.path(), 255, 255)).unwrap();
    let location = world.values().next().unwrap();
    assert_eq!(location.spawn.monsters.len(), 255);
    assert_eq!(location.loot.entries.len(), 255);
}

#[test]
fn oversized_spawn_list_names_its_size() {
    let temp = tempfile::tempdir().unwrap();
    let path = world_with(temp.path(), 256, 1);
    let err = WorldLoader::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Ron { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("256 entries exceed capacity 255"), "{err}");
}

#[test]
fn oversized_loot_list_names_its_size() {
    let temp = tempfile::tempdir().unwrap();
    let path = world_with(temp.path(), 1, 256);
    let err = WorldLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("256 entries exceed capacity 255"), "{err}");
}
