//! Serialization of classified positions, plain or JSONP-wrapped.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tb_core::{MoveInfo, PositionInfo};

#[derive(Serialize)]
struct PositionBody<'a> {
    checkmate: bool,
    stalemate: bool,
    moves: Vec<MoveBody<'a>>,
}

#[derive(Serialize)]
struct MoveBody<'a> {
    uci: &'a str,
    san: &'a str,
    checkmate: bool,
    stalemate: bool,
    insufficient_material: bool,
    zeroing: bool,
    wdl: Option<i8>,
    dtz: Option<i32>,
    /// Outer `None` leaves the key out entirely, for deployments without DTM.
    #[serde(skip_serializing_if = "Option::is_none")]
    dtm: Option<Option<i32>>,
}

impl<'a> MoveBody<'a> {
    fn new(m: &'a MoveInfo, dtm_enabled: bool) -> Self {
        Self {
            uci: &m.uci,
            san: &m.san,
            checkmate: m.checkmate,
            stalemate: m.stalemate,
            insufficient_material: m.insufficient_material,
            zeroing: m.zeroing,
            wdl: m.wdl,
            dtz: m.dtz,
            dtm: dtm_enabled.then_some(m.dtm),
        }
    }
}

/// Render `info` as a JSON document.
pub fn to_json(info: &PositionInfo, dtm_enabled: bool) -> String {
    let body = PositionBody {
        checkmate: info.checkmate,
        stalemate: info.stalemate,
        moves: info.moves.iter().map(|m| MoveBody::new(m, dtm_enabled)).collect(),
    };
    // Only plain fields and string slices, serialization cannot fail
    serde_json::to_string(&body).unwrap_or_default()
}

/// Build the HTTP response, wrapping the document in `callback(...)` if a
/// callback name was given.
pub fn render(info: &PositionInfo, dtm_enabled: bool, callback: Option<&str>) -> Response {
    let json = to_json(info, dtm_enabled);

    match callback {
        Some(callback) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/javascript")],
            format!("{callback}({json})"),
        )
            .into_response(),
        None => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
    }
}
