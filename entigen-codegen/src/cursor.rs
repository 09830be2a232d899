//! Executable model of the generated enumerator.
//!
//! [`EntityCursor`] runs the same two-index machine the generated C#
//! `Enumerator` runs, over any sequence of [`SubCollection`]s. It exists so
//! the traversal rules (skipping empty sub-collections, stable exhaustion,
//! reset) can be checked without a C# toolchain.
//!
//! [`ViewCollection`] and [`ComponentRef`] model the generated `Current`:
//! value components come back as a handle into their [`Column`], reference
//! components straight from storage.

use std::cell::{Ref, RefCell, RefMut};

/// One storage chunk of entities sharing a component layout.
pub trait SubCollection {
    /// Number of entities in the chunk.
    fn count(&self) -> usize;
}

impl<T> SubCollection for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> SubCollection for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

/// A sub-collection that can rebuild the view of one of its entities.
///
/// Implementations mirror the generated `Current` getter: the entity handle,
/// a [`ComponentRef`] per value component, and the stored object per reference
/// component.
pub trait ViewCollection: SubCollection {
    type View<'a>
    where
        Self: 'a;

    /// The view of the entity at `index`, which is below [`count`](SubCollection::count).
    fn view(&self, index: usize) -> Self::View<'_>;
}

/// Storage for one value component across a sub-collection.
#[derive(Debug, Clone, Default)]
pub struct Column<T> {
    cells: Vec<RefCell<T>>,
}

impl<T> Column<T> {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A handle to the component of the entity at `index`.
    pub fn component_ref(&self, index: usize) -> Option<ComponentRef<'_, T>> {
        self.cells.get(index).map(|cell| ComponentRef { cell, index })
    }
}

impl<T> From<Vec<T>> for Column<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Column<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(RefCell::new).collect(),
        }
    }
}

/// Handle to a value component: the storage slot plus the entity's index.
///
/// Reads and writes go through to the [`Column`], like `ref component.Value`
/// in the generated view.
#[derive(Debug)]
pub struct ComponentRef<'a, T> {
    cell: &'a RefCell<T>,
    index: usize,
}

impl<'a, T> ComponentRef<'a, T> {
    /// Index of the entity inside its sub-collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> Ref<'a, T> {
        self.cell.borrow()
    }

    pub fn value_mut(&self) -> RefMut<'a, T> {
        self.cell.borrow_mut()
    }
}

/// Position reported by [`EntityCursor::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor now points at `index` inside sub-collection `collection`.
    Entity { collection: usize, index: usize },
    /// Every sub-collection has been walked.
    Exhausted,
}

/// Cursor over prepared sub-collections.
///
/// Mirrors the generated fields: `collection_index` starts at 0 and
/// `index_in_collection` at -1, so the first advance visits index 0.
#[derive(Debug, Clone)]
pub struct EntityCursor<'a, C> {
    collections: &'a [C],
    collection_index: usize,
    index_in_collection: isize,
}

impl<'a, C: SubCollection> EntityCursor<'a, C> {
    pub fn new(collections: &'a [C]) -> Self {
        Self {
            collections,
            collection_index: 0,
            index_in_collection: -1,
        }
    }

    /// Advance to the next entity; false once every sub-collection is done.
    pub fn move_next(&mut self) -> bool {
        while let Some(active) = self.collections.get(self.collection_index) {
            self.index_in_collection += 1;
            if (self.index_in_collection as usize) < active.count() {
                return true;
            }
            self.index_in_collection = -1;
            self.collection_index += 1;
        }
        false
    }

    /// Advance and report where the cursor landed.
    pub fn step(&mut self) -> Step {
        if self.move_next() {
            Step::Entity {
                collection: self.collection_index,
                index: self.index_in_collection as usize,
            }
        } else {
            Step::Exhausted
        }
    }

    /// The sub-collection and index of the current entity, if any.
    pub fn current(&self) -> Option<(&'a C, usize)> {
        let index = usize::try_from(self.index_in_collection).ok()?;
        let collection = self.collections.get(self.collection_index)?;
        (index < collection.count()).then_some((collection, index))
    }

    /// The view of the current entity, as the generated `Current` builds it.
    pub fn current_view(&self) -> Option<C::View<'a>>
    where
        C: ViewCollection + 'a,
    {
        let (collection, index) = self.current()?;
        Some(collection.view(index))
    }

    /// Return to the initial state without re-preparing the collections.
    pub fn reset(&mut self) {
        self.collection_index = 0;
        self.index_in_collection = -1;
    }

    pub fn dispose(&mut self) {
        self.reset();
    }
}

impl<'a, C: SubCollection> Iterator for EntityCursor<'a, C> {
    type Item = (&'a C, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() { self.current() } else { None }
    }
}
