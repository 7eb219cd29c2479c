//! Move classification and ranking for tablebase queries.
//!
//! Given a position, every legal move is classified (mate, stalemate,
//! insufficient material, zeroing) and annotated with WDL, DTZ and optionally
//! DTM values from a [`classify::Prober`], then ranked for display.

pub use shakmaty;

pub mod classify;
pub mod fen;
pub mod position;
pub mod rank;
pub mod variant;

pub use classify::{classify_position, MoveInfo, PositionInfo, Probe, ProbeSettings, Prober};
pub use fen::validate_fen;
pub use position::build_position;
pub use rank::sort_moves;
pub use variant::TablebaseVariant;
