use slateboard_shared::{Bounds, Point};

pub type ItemId = u64;

/// Resolved render geometry. Every applied shape becomes exactly one
/// primitive; previews reuse the same constructors so a gesture looks the
/// way its finalized shape will.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Segment {
        start: Point,
        end: Point,
        color: String,
    },
    DashedSegment {
        start: Point,
        end: Point,
        gap: f64,
        color: String,
    },
    Ellipse {
        bounds: Bounds,
        color: String,
    },
    Rect {
        bounds: Bounds,
        color: String,
    },
    Path {
        points: Vec<Point>,
        color: String,
    },
}

/// What the engine needs from a render target. A GUI adapter maps these to
/// its scene graph; [`DisplayList`] records them for headless use and tests.
pub trait Surface {
    fn add(&mut self, primitive: Primitive) -> ItemId;
    fn update(&mut self, id: ItemId, primitive: Primitive);
    fn remove(&mut self, id: ItemId);
    fn clear(&mut self);
}

#[derive(Default)]
pub struct DisplayList {
    items: Vec<(ItemId, Primitive)>,
    next_id: ItemId,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Primitive> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, primitive)| primitive)
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().map(|(_, primitive)| primitive)
    }

    pub fn last(&self) -> Option<&Primitive> {
        self.items.last().map(|(_, primitive)| primitive)
    }
}

impl Surface for DisplayList {
    fn add(&mut self, primitive: Primitive) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, primitive));
        id
    }

    fn update(&mut self, id: ItemId, primitive: Primitive) {
        if let Some(slot) = self.items.iter_mut().find(|(item_id, _)| *item_id == id) {
            slot.1 = primitive;
        }
    }

    fn remove(&mut self, id: ItemId) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
