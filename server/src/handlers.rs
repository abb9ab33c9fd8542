use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use slateboard_core::Origin;
use slateboard_shared::{
    ClientMessage, Point, PointsField, ServerMessage, Shape, ShapeKind, ShapePayload,
    ValidationError,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::logic::send_to;
use crate::state::AppState;

#[derive(Debug)]
pub struct ApiError(ValidationError);

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
pub struct CornerParams {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Deserialize)]
pub struct EllipseParams {
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
    pub color: String,
}

#[derive(Deserialize)]
pub struct CurveParams {
    pub points: String,
    pub color: String,
}

pub async fn history_handler(State(state): State<AppState>) -> Json<Vec<Shape>> {
    Json(state.board.snapshot().await)
}

pub async fn clear_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.board.clear(Origin::Api);
    Json(json!({ "status": "cleared" }))
}

pub async fn draw_line_handler(
    State(state): State<AppState>,
    Query(params): Query<CornerParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let shape = corner_payload(ShapeKind::Line, &params).validate()?;
    state.board.apply(shape, Origin::Api);
    Ok(Json(json!({ "status": "line drawn" })))
}

pub async fn draw_ellipse_handler(
    State(state): State<AppState>,
    Query(params): Query<EllipseParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = ShapePayload {
        kind: ShapeKind::Circle.as_str().to_string(),
        start: Some(Point::new(params.x, params.y).into()),
        end: Some(Point::new(params.x + params.rx, params.y + params.ry).into()),
        color: Some(params.color),
        ..Default::default()
    };
    let shape = payload.validate()?;
    state.board.apply(shape, Origin::Api);
    Ok(Json(json!({ "status": "ellipse drawn" })))
}

pub async fn draw_rect_handler(
    State(state): State<AppState>,
    Query(params): Query<CornerParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let shape = corner_payload(ShapeKind::Rect, &params).validate()?;
    state.board.apply(shape, Origin::Api);
    Ok(Json(json!({ "status": "rectangle drawn" })))
}

pub async fn draw_curve_handler(
    State(state): State<AppState>,
    Query(params): Query<CurveParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = ShapePayload {
        kind: ShapeKind::Curve.as_str().to_string(),
        points: Some(PointsField::Encoded(params.points)),
        color: Some(params.color),
        ..Default::default()
    };
    let shape = payload.validate()?;
    state.board.apply(shape, Origin::Api);
    Ok(Json(json!({ "status": "curve drawn" })))
}

fn corner_payload(kind: ShapeKind, params: &CornerParams) -> ShapePayload {
    ShapePayload {
        kind: kind.as_str().to_string(),
        start: Some(Point::new(params.x, params.y).into()),
        end: Some(Point::new(params.x + params.width, params.y + params.height).into()),
        color: Some(params.color.clone()),
        ..Default::default()
    }
}

pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut socket_sender, mut socket_receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();
    let connection_id = Uuid::new_v4();

    {
        let mut peers = state.peers.write().await;
        peers.insert(connection_id, tx);
        info!(conn = %connection_id, peers = peers.len(), "viewer connected");
    }

    let shapes = state.board.snapshot().await;
    let init = ServerMessage::Init { shapes };
    match serde_json::to_string(&init) {
        Ok(text) => {
            if let Err(error) = socket_sender.send(Message::Text(text)).await {
                warn!(conn = %connection_id, %error, "init send failed");
            }
        }
        Err(error) => warn!(conn = %connection_id, %error, "init serialize failed"),
    }

    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&message) else {
                continue;
            };
            if socket_sender.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = socket_receiver.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_message) => {
                    handle_client_message(&state, connection_id, client_message).await;
                }
                Err(error) => {
                    debug!(conn = %connection_id, %error, "undecodable text frame");
                    send_to(
                        &state.peers,
                        connection_id,
                        ServerMessage::Error {
                            message: format!("undecodable message: {error}"),
                        },
                    )
                    .await;
                }
            },
            Message::Binary(data) => {
                match bincode::decode_from_slice::<ClientMessage, _>(
                    &data,
                    bincode::config::standard(),
                ) {
                    Ok((client_message, _)) => {
                        handle_client_message(&state, connection_id, client_message).await;
                    }
                    Err(error) => {
                        debug!(conn = %connection_id, %error, "undecodable binary frame");
                        send_to(
                            &state.peers,
                            connection_id,
                            ServerMessage::Error {
                                message: format!("undecodable message: {error}"),
                            },
                        )
                        .await;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    {
        let mut peers = state.peers.write().await;
        peers.remove(&connection_id);
        info!(conn = %connection_id, peers = peers.len(), "viewer disconnected");
    }
    send_task.abort();
}

pub async fn handle_client_message(state: &AppState, sender: Uuid, message: ClientMessage) {
    match message {
        ClientMessage::DrawShape { shape } => match shape.validate() {
            Ok(shape) => state.board.apply(shape, Origin::Peer(sender)),
            Err(error) => {
                warn!(conn = %sender, %error, "rejected inbound shape");
                send_to(
                    &state.peers,
                    sender,
                    ServerMessage::Error {
                        message: error.to_string(),
                    },
                )
                .await;
            }
        },
        ClientMessage::Clear => state.board.clear(Origin::Peer(sender)),
    }
}
