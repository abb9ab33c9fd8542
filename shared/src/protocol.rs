use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::payload::ShapePayload;
use crate::shape::Shape;

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    DrawShape { shape: ShapePayload },
    Clear,
}

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Init { shapes: Vec<Shape> },
    NewShape { shape: Shape },
    Clear,
    Error { message: String },
}
