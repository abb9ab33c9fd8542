use slateboard_shared::Shape;

/// Append-only log of every finalized shape in arrival order. Replaying a
/// snapshot reconstructs the full scene for a late-joining viewer; entries
/// are never edited or removed except by a whole-board clear.
#[derive(Default)]
pub struct History {
    shapes: Vec<Shape>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }
}
