//! Behavior of the enumerator state machine, checked against the cursor
//! model and against the generated C# text.

use std::rc::Rc;

use entigen_codegen::{
    EntityGenerator,
    cursor::{Column, ComponentRef, EntityCursor, Step, SubCollection, ViewCollection},
};
use entigen_ir::{EntityDescriptor, EntitySchema, FieldDescriptor, RuntimeContract};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Debug, PartialEq, Eq)]
struct Name(String);

/// A sub-collection holding Position by value and Name by reference.
struct Chunk {
    entities: Vec<u32>,
    positions: Column<Position>,
    names: Vec<Rc<Name>>,
}

/// The Rust counterpart of the generated `PlayerEntity`.
struct PlayerView<'a> {
    entity: u32,
    position: ComponentRef<'a, Position>,
    name: &'a Rc<Name>,
}

impl SubCollection for Chunk {
    fn count(&self) -> usize {
        self.entities.len()
    }
}

impl ViewCollection for Chunk {
    type View<'a> = PlayerView<'a>;

    fn view(&self, index: usize) -> PlayerView<'_> {
        PlayerView {
            entity: self.entities[index],
            position: self.positions.component_ref(index).unwrap(),
            name: &self.names[index],
        }
    }
}

fn sequence(cursor: &mut EntityCursor<'_, Vec<char>>) -> Vec<Step> {
    std::iter::from_fn(|| match cursor.step() {
        Step::Exhausted => None,
        step => Some(step),
    })
    .collect()
}

#[test]
fn test_skips_empty_sub_collections() {
    let collections = vec![vec![], vec!['a', 'b'], vec!['c']];
    let mut cursor = EntityCursor::new(&collections);
    assert_eq!(
        sequence(&mut cursor),
        [
            Step::Entity { collection: 1, index: 0 },
            Step::Entity { collection: 1, index: 1 },
            Step::Entity { collection: 2, index: 0 },
        ]
    );
}

#[test]
fn test_exhaustion_is_stable() {
    let collections = vec![vec![], vec!['a', 'b'], vec!['c']];
    let mut cursor = EntityCursor::new(&collections);
    assert_eq!(cursor.by_ref().count(), 3);
    for _ in 0..3 {
        assert!(!cursor.move_next());
        assert_eq!(cursor.step(), Step::Exhausted);
    }
}

#[test]
fn test_reset_reproduces_sequence() {
    let collections = vec![vec!['x'], vec![], vec!['y', 'z']];
    let mut cursor = EntityCursor::new(&collections);
    let first = sequence(&mut cursor);

    cursor.reset();
    assert_eq!(sequence(&mut cursor), first);

    // Reset in the middle of a walk as well.
    cursor.reset();
    cursor.move_next();
    cursor.reset();
    assert_eq!(sequence(&mut cursor), first);
}

#[test]
fn test_yields_items_in_storage_order() {
    let collections = vec![vec!['a', 'b'], vec![], vec!['c']];
    let items: Vec<char> = EntityCursor::new(&collections)
        .map(|(chunk, index)| chunk[index])
        .collect();
    assert_eq!(items, ['a', 'b', 'c']);
}

#[test]
fn test_position_by_reference_and_name_by_identity() {
    let names = Vec::from(["alice", "bob", "carol"].map(|n| Rc::new(Name(n.to_string()))));
    let chunks = [Chunk {
        entities: vec![7, 8, 9],
        positions: (1..=3).map(|i| Position { x: i, y: i }).collect(),
        names: names.clone(),
    }];

    let mut cursor = EntityCursor::new(&chunks);
    let mut visited = Vec::new();
    while cursor.move_next() {
        let view = cursor.current_view().unwrap();
        view.position.value_mut().x += 10;
        visited.push(view.entity);

        // Reading Current again at the same index sees the write.
        let again = cursor.current_view().unwrap();
        let index = again.position.index();
        let original = index as i32 + 1;
        assert_eq!(index, view.position.index());
        assert_eq!(
            *again.position.value(),
            Position {
                x: original + 10,
                y: original,
            }
        );
        assert!(Rc::ptr_eq(again.name, &names[index]));
        assert!(Rc::ptr_eq(again.name, view.name));
    }

    assert_eq!(visited, [7, 8, 9]);
    assert!(cursor.current_view().is_none());
    let stored: Vec<Position> = (0..3)
        .map(|i| *chunks[0].positions.component_ref(i).unwrap().value())
        .collect();
    assert_eq!(
        stored,
        [
            Position { x: 11, y: 1 },
            Position { x: 12, y: 2 },
            Position { x: 13, y: 3 },
        ]
    );
}

#[test]
fn test_generated_enumerator_matches_model() {
    let descriptor = EntityDescriptor::new("Game", "IPlayer")
        .field(FieldDescriptor::reference("Entity", "Abg.Entities.Entity"))
        .field(FieldDescriptor::value("Position", "Game.Position"))
        .field(FieldDescriptor::reference("Name", "Game.Name"));
    let schema = EntitySchema::resolve(&descriptor, &RuntimeContract::default()).unwrap();
    let content = EntityGenerator::default().generate(&schema).unwrap().content;

    // Initial state is set once, after preparing the collections.
    assert_eq!(content.matches("entities.PrepareCollections()").count(), 1);
    // Constructor and Reset both establish the initial state.
    assert_eq!(content.matches("collectionIndex = 0;").count(), 2);
    // Iterative advance, no recursion.
    assert!(content.contains("while (collectionIndex < collections.Count)"));
    assert!(!content.contains("return MoveNext();"));
    // Exhausting a sub-collection moves on to the next one.
    assert!(content.contains("indexInCollection = -1;\n                    ++collectionIndex;"));
    // Value components are handed out by reference, reference components as-is.
    assert!(content.contains("return ref component_0.Value;"));
    assert!(content.contains("return component_1;"));
    assert!(content.contains("component_1[indexInCollection]"));
    // Dispose returns to the initial state.
    assert!(content.contains("public void Dispose()\n            {\n                Reset();"));
}
