use std::collections::BTreeMap;

use crate::{model::is_blank, registry::SpriteClass};

/// Dense bitmap IDs of one sprite class, in first-reference order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassTable {
    first: u16,
    ids: BTreeMap<String, u16>,
    order: Vec<(String, Vec<u8>)>,
}

impl ClassTable {
    fn new(class: SpriteClass) -> Self {
        Self {
            first: class.first_id(),
            ids: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<u16> {
        self.ids.get(filename).copied()
    }

    /// Filenames in ascending ID order.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &str)> {
        self.bitmaps().map(|(id, filename, _)| (id, filename))
    }

    /// Filenames with their packed pixel bytes, in ascending ID order.
    pub fn bitmaps(&self) -> impl Iterator<Item = (u16, &str, &[u8])> {
        self.order
            .iter()
            .zip(self.first..)
            .map(|((filename, packed), id)| (id, filename.as_str(), packed.as_slice()))
    }

    fn assign(&mut self, filename: &str, packed: Vec<u8>) -> u16 {
        if let Some(id) = self.get(filename) {
            return id;
        }
        // Bounded by three tables of 256 characters with 21 frames each.
        let id = self.first + self.order.len() as u16;
        self.ids.insert(filename.to_owned(), id);
        self.order.push((filename.to_owned(), packed));
        id
    }
}

/// Filename to bitmap ID mapping for every sprite class, holding the packed
/// pixels of each bitmap.
///
/// Each distinct filename gets one ID per class no matter how many characters
/// reference it, so it is converted and stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitmapTable {
    classes: BTreeMap<SpriteClass, ClassTable>,
}

impl BitmapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID for `filename`, assigning the next free one on first
    /// sight. `packed` is kept only for a new filename.
    pub fn assign(&mut self, class: SpriteClass, filename: &str, packed: Vec<u8>) -> u16 {
        self.classes
            .entry(class)
            .or_insert_with(|| ClassTable::new(class))
            .assign(filename, packed)
    }

    pub fn contains(&self, class: SpriteClass, filename: &str) -> bool {
        self.class(class)
            .is_some_and(|table| table.get(filename).is_some())
    }

    /// Wire ID for a frame; blank filenames are always 0.
    pub fn id(&self, class: SpriteClass, filename: &str) -> Option<u16> {
        if is_blank(filename) {
            return Some(0);
        }
        self.class(class)?.get(filename)
    }

    pub fn class(&self, class: SpriteClass) -> Option<&ClassTable> {
        self.classes.get(&class)
    }

    /// Total distinct bitmaps across all classes.
    pub fn len(&self) -> usize {
        self.classes.values().map(ClassTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
