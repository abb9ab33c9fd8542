use slateboard_shared::{Point, Shape, ShapeKind};
use uuid::Uuid;

use crate::palette::{DEFAULT_TOOL, PALETTE};
use crate::scene::Scene;
use crate::surface::{DisplayList, Surface};
use crate::tracker::GestureTracker;

/// Where a finalized shape entered the system. The gateway uses this to
/// decide who hears about it: peers are excluded from their own echoes,
/// everything else fans out to every viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Local,
    Peer(Uuid),
    Api,
}

#[derive(Clone, Debug)]
pub enum Command {
    PointerDown { point: Point },
    PointerMove { point: Point },
    PointerUp { point: Point },
    SelectTool { tool: ShapeKind },
    SelectColor { color: String },
    Apply { shape: Shape, origin: Origin },
    Clear { origin: Origin },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Applied { shape: Shape, origin: Origin },
    Cleared { origin: Origin },
}

/// Owns the scene, history, and gesture state, and processes commands one
/// at a time. Every mutation flows through [`Board::handle`], so the order
/// commands are handed in is the only ordering there is.
pub struct Board<S: Surface = DisplayList> {
    scene: Scene<S>,
    tracker: GestureTracker,
    tool: ShapeKind,
    color: String,
}

impl Board<DisplayList> {
    pub fn new() -> Self {
        Self::with_surface(DisplayList::new())
    }
}

impl Default for Board<DisplayList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Board<S> {
    pub fn with_surface(surface: S) -> Self {
        Self {
            scene: Scene::with_surface(surface),
            tracker: GestureTracker::new(),
            tool: DEFAULT_TOOL,
            color: PALETTE[0].to_string(),
        }
    }

    pub fn handle(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::PointerDown { point } => {
                self.tracker
                    .pointer_down(self.tool, &self.color, point, self.scene.surface_mut());
                Vec::new()
            }
            Command::PointerMove { point } => {
                self.tracker.pointer_move(point, self.scene.surface_mut());
                Vec::new()
            }
            Command::PointerUp { point } => {
                match self.tracker.pointer_up(point, self.scene.surface_mut()) {
                    Some(shape) => {
                        self.scene.apply(&shape);
                        vec![Event::Applied {
                            shape,
                            origin: Origin::Local,
                        }]
                    }
                    None => Vec::new(),
                }
            }
            Command::SelectTool { tool } => {
                self.tracker.cancel(self.scene.surface_mut());
                self.tool = tool;
                Vec::new()
            }
            Command::SelectColor { color } => {
                self.tracker.cancel(self.scene.surface_mut());
                self.color = color;
                Vec::new()
            }
            Command::Apply { shape, origin } => {
                self.scene.apply(&shape);
                vec![Event::Applied { shape, origin }]
            }
            Command::Clear { origin } => {
                self.tracker.reset();
                self.scene.clear();
                vec![Event::Cleared { origin }]
            }
        }
    }

    pub fn snapshot(&self) -> Vec<Shape> {
        self.scene.history().snapshot()
    }

    pub fn scene(&self) -> &Scene<S> {
        &self.scene
    }

    pub fn tool(&self) -> ShapeKind {
        self.tool
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_drawing(&self) -> bool {
        self.tracker.is_active()
    }
}
