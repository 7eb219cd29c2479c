#![allow(dead_code)]

use std::sync::Arc;

use reqwest::Client;
use tb_core::shakmaty::variant::VariantPosition;
use tb_core::shakmaty::{Color, Position};
use tb_core::{Probe, ProbeSettings, Prober, TablebaseVariant};
use tbserve::context::AppContext;

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Serve `ctx` on an ephemeral local port and return the base URL.
pub async fn spawn(ctx: AppContext) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, tbserve::app(ctx)).await.unwrap();
    });
    format!("http://{addr}")
}

/// Prober without any tables.
pub struct NoTables;

impl Prober for NoTables {
    fn probe_dtz(&self, _pos: &VariantPosition) -> Probe {
        Probe::Unavailable
    }
}

/// Prober claiming the side to move wins if it is white and loses otherwise,
/// with DTZ and DTM growing with the number of pieces.
pub struct WhiteWins;

impl Prober for WhiteWins {
    fn probe_dtz(&self, pos: &VariantPosition) -> Probe {
        Probe::Hit(signed(pos, pos.board().occupied().count() as i32))
    }

    fn probe_dtm(&self, pos: &VariantPosition) -> Probe {
        Probe::Hit(signed(pos, 10 * pos.board().occupied().count() as i32))
    }
}

fn signed(pos: &VariantPosition, plies: i32) -> i32 {
    match pos.turn() {
        Color::White => plies,
        Color::Black => -plies,
    }
}

pub fn context(prober: impl Prober + Send + Sync + 'static) -> AppContext {
    AppContext::new(ProbeSettings::new(TablebaseVariant::Chess, 7), Arc::new(prober))
}
