//! Snapshot tests for generated C# units.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use entigen_codegen::{GeneratedUnit, Generator, GeneratorOptions};
use entigen_manifest::{Manifest, ManifestSource};

/// Generate every unit of a manifest, in manifest order.
fn generate_units(manifest_toml: &str) -> Vec<GeneratedUnit> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let options = GeneratorOptions::from(&manifest.generator);
    let report = Generator::new(options)
        .run(&ManifestSource::new(manifest))
        .expect("source failed");
    assert!(report.is_success(), "failures: {:?}", report.failures);
    report.units
}

#[test]
fn test_player_entity() {
    let units = generate_units(
        r#"
        [[entities]]
        name = "IPlayer"
        namespace = "Game"
        exclude = ["Game.Dead"]

        [[entities.fields]]
        name = "Entity"
        type = "Abg.Entities.Entity"

        [[entities.fields]]
        name = "Position"
        type = "Game.Position"
        kind = "value"
        by_ref = true

        [[entities.fields]]
        name = "Name"
        type = "Game.Name"
        "#,
    );

    assert_eq!(units[0].file_name, "Generated_Game_PlayerEntity.cs");
    let content = &units[0].content;
    insta::assert_snapshot!("player_entity", content);
}

#[test]
fn test_global_marker_entity() {
    let units = generate_units(
        r#"
        [[entities]]
        name = "IMarker"
        "#,
    );

    assert_eq!(units[0].file_name, "Generated_MarkerEntity.cs");
    let content = &units[0].content;
    insta::assert_snapshot!("global_marker_entity", content);
}
