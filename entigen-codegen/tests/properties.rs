//! Structural properties every generated unit must satisfy.

use entigen_codegen::{EntityGenerator, GeneratorOptions};
use entigen_emit::Indent;
use entigen_ir::{ComponentKind, EntityDescriptor, EntitySchema, FieldDescriptor, RuntimeContract};

fn schemas() -> Vec<EntitySchema> {
    let runtime = RuntimeContract::default();
    [
        EntityDescriptor::new("Game", "IPlayer")
            .field(FieldDescriptor::reference("Entity", "Abg.Entities.Entity"))
            .field(FieldDescriptor::value("Position", "Game.Position"))
            .field(FieldDescriptor::reference("Name", "Game.Name"))
            .exclude("Game.Dead"),
        EntityDescriptor::new("Game.World", "IBullet")
            .field(FieldDescriptor::value("Velocity", "Game.Velocity"))
            .field(FieldDescriptor::value("Damage", "int"))
            .exclude("Game.Spent")
            .exclude("Game.Frozen"),
        EntityDescriptor::new("", "IMarker"),
        EntityDescriptor::new("Game", "IOwned")
            .access("internal")
            .field(FieldDescriptor::reference("Owner", "Abg.Entities.Entity")),
    ]
    .iter()
    .map(|descriptor| EntitySchema::resolve(descriptor, &runtime).unwrap())
    .collect()
}

fn generate(options: GeneratorOptions, schema: &EntitySchema) -> String {
    EntityGenerator::new(options).generate(schema).unwrap().content
}

#[test]
fn test_generation_is_deterministic() {
    for schema in schemas() {
        let first = generate(GeneratorOptions::default(), &schema);
        let second = generate(GeneratorOptions::default(), &schema);
        assert_eq!(first, second, "{}", schema.qualified_name());
    }
}

#[test]
fn test_braces_balance() {
    for schema in schemas() {
        let content = generate(GeneratorOptions::default(), &schema);
        let mut depth: i64 = 0;
        for c in content.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "closing brace without opener in {}", schema.qualified_name());
        }
        assert_eq!(depth, 0, "unbalanced braces in {}", schema.qualified_name());
    }
}

#[test]
fn test_closing_brace_matches_opener_indent() {
    for schema in schemas() {
        let content = generate(GeneratorOptions::default(), &schema);
        let mut open: Vec<(usize, usize)> = Vec::new();
        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            if trimmed.starts_with('}') {
                let (opened_at, opener) = open
                    .pop()
                    .unwrap_or_else(|| panic!("line {number} closes nothing in {content}"));
                assert_eq!(
                    indent, opener,
                    "line {number} closes the brace opened on line {opened_at}"
                );
            }
            if trimmed.ends_with('{') {
                open.push((number, indent));
            }
        }
        assert!(open.is_empty(), "unclosed braces {open:?} in {}", schema.qualified_name());
    }
}

#[test]
fn test_indentation_is_whole_units() {
    for schema in schemas() {
        let content = generate(GeneratorOptions::default(), &schema);
        for line in content.lines() {
            let leading = line.len() - line.trim_start().len();
            assert_eq!(leading % 4, 0, "misaligned line {line:?}");
            assert!(!line.starts_with('\t'), "tab in {line:?}");
            assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
        }
    }
}

#[test]
fn test_block_bodies_are_one_level_deeper() {
    for schema in schemas() {
        let content = generate(GeneratorOptions::default(), &schema);
        let lines: Vec<&str> = content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if line.trim() != "{" {
                continue;
            }
            let open = line.len() - line.trim_start().len();
            let next = lines[i + 1];
            let inner = next.len() - next.trim_start().len();
            if next.trim() == "}" {
                assert_eq!(inner, open);
            } else {
                assert_eq!(inner, open + 4, "body after line {i} of {}", schema.qualified_name());
            }
        }
    }
}

#[test]
fn test_tab_indentation() {
    let options = GeneratorOptions {
        indent: Indent::Tab,
        ..GeneratorOptions::default()
    };
    let content = generate(options, &schemas()[0]);
    assert!(content.contains("\n\tpublic readonly struct PlayerEntity\n"));
    assert!(content.contains("\n\t\tprivate readonly Game.Name component_1;\n"));
    assert!(content.lines().all(|line| !line.starts_with(' ')));
}

#[test]
fn test_single_trailing_newline() {
    for schema in schemas() {
        let content = generate(GeneratorOptions::default(), &schema);
        assert!(content.ends_with("}\n"));
        assert!(!content.ends_with("\n\n"));
    }
}

#[test]
fn test_component_fields_numbered_by_position() {
    let schema = &schemas()[1];
    let content = generate(GeneratorOptions::default(), schema);
    assert!(
        content.contains("private readonly Abg.Entities.ComponentRef<Game.Velocity> component_0;")
    );
    assert!(content.contains("private readonly Abg.Entities.ComponentRef<int> component_1;"));
    assert!(content.contains("public ref int Damage\n"));
    assert!(!content.contains("component_2"));
}

#[test]
fn test_field_names_stable_under_unrelated_changes() {
    let runtime = RuntimeContract::default();
    let base = EntityDescriptor::new("Game", "IPlayer")
        .field(FieldDescriptor::value("Position", "Game.Position"))
        .field(FieldDescriptor::reference("Name", "Game.Name"));
    let changed = base
        .clone()
        .exclude("Game.Dead")
        .field(FieldDescriptor::reference("Entity", "Abg.Entities.Entity"));

    let names = |descriptor: &EntityDescriptor| -> Vec<(String, String)> {
        EntitySchema::resolve(descriptor, &runtime)
            .unwrap()
            .components
            .into_iter()
            .map(|c| (c.property_name, c.field_name))
            .collect()
    };
    assert_eq!(names(&base), names(&changed));
}

#[test]
fn test_reordering_components_renames_fields_but_keeps_mapping() {
    let runtime = RuntimeContract::default();
    let position = FieldDescriptor::value("Position", "Game.Position");
    let name = FieldDescriptor::reference("Name", "Game.Name");
    let before = EntityDescriptor::new("Game", "IPlayer")
        .field(position.clone())
        .field(name.clone());
    let after = EntityDescriptor::new("Game", "IPlayer").field(name).field(position);

    let before = EntitySchema::resolve(&before, &runtime).unwrap();
    let after = EntitySchema::resolve(&after, &runtime).unwrap();
    let find = |schema: &EntitySchema, property: &str| {
        schema
            .components
            .iter()
            .find(|c| c.property_name == property)
            .cloned()
            .unwrap()
    };

    for property in ["Position", "Name"] {
        let (old, new) = (find(&before, property), find(&after, property));
        assert_ne!(old.field_name, new.field_name, "{property}");
        assert_eq!(old.kind, new.kind, "{property}");
        assert_eq!(old.declared_type, new.declared_type, "{property}");
        assert_eq!(old.returns_by_ref, new.returns_by_ref, "{property}");
    }
    assert_eq!(find(&after, "Position").field_name, "component_1");
    assert_eq!(find(&after, "Position").kind, ComponentKind::Value);
    assert_eq!(find(&after, "Name").field_name, "component_0");

    let content = generate(GeneratorOptions::default(), &after);
    assert!(content.contains("private readonly Game.Name component_0;"));
    assert!(
        content.contains("private readonly Abg.Entities.ComponentRef<Game.Position> component_1;")
    );
    assert!(content.contains("public ref Game.Position Position\n"));
    assert!(content.contains("return ref component_1.Value;"));
    assert!(content.contains("return component_0;"));
    assert!(content.contains("typeof(Game.Name),\n            typeof(Game.Position)\n"));
    assert!(content.contains(
        "new Abg.Entities.ComponentRef<Game.Position>(component_1, indexInCollection)"
    ));
}

#[test]
fn test_degenerate_entity_is_well_formed() {
    let schema = &schemas()[2];
    let content = generate(GeneratorOptions::default(), schema);
    assert!(content.contains("public readonly struct MarkerEntity\n{\n}\n"));
    assert!(content.contains("base(world, new Type[] {}, new Type[] {})"));
}

#[test]
fn test_access_level_applies_to_view_and_collection() {
    let schema = &schemas()[3];
    let content = generate(GeneratorOptions::default(), schema);
    assert!(content.contains("    internal readonly struct OwnedEntity\n"));
    assert!(content.contains("    internal class OwnedEntities : Abg.Entities.Entities\n"));
    assert!(content.contains("        public struct Enumerator : IEnumerator<OwnedEntity>\n"));
}

#[test]
fn test_custom_runtime_namespace() {
    let runtime = RuntimeContract::new("Ecs.Core");
    let descriptor = EntityDescriptor::new("Game", "IPlayer")
        .field(FieldDescriptor::reference("Entity", "Ecs.Core.Entity"))
        .field(FieldDescriptor::value("Position", "Game.Position"));
    let schema = EntitySchema::resolve(&descriptor, &runtime).unwrap();
    let options = GeneratorOptions {
        runtime,
        ..GeneratorOptions::default()
    };
    let content = generate(options, &schema);
    assert!(content.contains("using Ecs.Core;\n"));
    assert!(content.contains("public readonly Ecs.Core.Entity Entity;"));
    assert!(content.contains("public class PlayerEntities : Ecs.Core.Entities"));
    assert!(
        content.contains("new Ecs.Core.ComponentRef<Game.Position>(component_0, indexInCollection)")
    );
    assert!(!content.contains("Abg.Entities"));
}
