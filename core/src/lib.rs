pub mod board;
pub mod history;
pub mod palette;
pub mod scene;
pub mod surface;
pub mod tracker;

pub use board::{Board, Command, Event, Origin};
pub use history::History;
pub use scene::{primitive_for, Scene};
pub use surface::{DisplayList, ItemId, Primitive, Surface};
pub use tracker::GestureTracker;
