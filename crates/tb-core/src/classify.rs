//! Per-move classification.
//!
//! Every legal move of the requested position is played on a copy of the
//! position and the resulting position is checked for terminal conditions and
//! probed in the tablebases. The requested position itself is never mutated.

use shakmaty::san::San;
use shakmaty::variant::VariantPosition;
use shakmaty::{CastlingMode, Move, Position};
use tracing::{debug, warn};

use crate::position::cardinality;
use crate::variant::TablebaseVariant;

/// Outcome of a single tablebase probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Signed ply count from the point of view of the side to move.
    Hit(i32),
    /// Position is outside of table coverage.
    Unavailable,
    /// Position should be covered, but the lookup failed.
    Failed(String),
}

/// Source of DTZ and DTM values.
///
/// Implementations report positions outside of their coverage as
/// [`Probe::Unavailable`] instead of failing.
pub trait Prober {
    fn probe_dtz(&self, pos: &VariantPosition) -> Probe;

    fn probe_dtm(&self, _pos: &VariantPosition) -> Probe {
        Probe::Unavailable
    }
}

/// Deployment-wide probing options, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    pub variant: TablebaseVariant,
    /// Largest piece count covered by the DTZ tables.
    pub max_cardinality: usize,
    pub dtm_enabled: bool,
    /// Largest piece count covered by the DTM tables.
    pub dtm_max_pieces: usize,
}

impl ProbeSettings {
    pub fn new(variant: TablebaseVariant, max_cardinality: usize) -> Self {
        Self {
            variant,
            max_cardinality,
            dtm_enabled: false,
            dtm_max_pieces: 5,
        }
    }

    pub fn with_dtm(mut self, max_pieces: usize) -> Self {
        self.dtm_enabled = true;
        self.dtm_max_pieces = max_pieces;
        self
    }
}

/// Classification of a single legal move.
///
/// All values describe the position after the move, from the point of view of
/// the opponent who is then to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInfo {
    pub uci: String,
    pub san: String,
    pub checkmate: bool,
    pub stalemate: bool,
    pub insufficient_material: bool,
    pub zeroing: bool,
    pub wdl: Option<i8>,
    pub dtz: Option<i32>,
    pub dtm: Option<i32>,
}

/// Classification of a position and all of its legal moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInfo {
    pub checkmate: bool,
    pub stalemate: bool,
    pub moves: Vec<MoveInfo>,
}

/// Checkmate and stalemate flags of `pos`, given whether it has legal moves.
pub fn terminal_flags(pos: &VariantPosition, has_moves: bool, variant: TablebaseVariant) -> (bool, bool) {
    let checkmate = !has_moves && (pos.is_check() || variant.is_immediate_loss(pos));
    let stalemate = !has_moves && !checkmate;
    (checkmate, stalemate)
}

/// Classify `pos` and each of its legal moves, in move generation order.
pub fn classify_position<P: Prober + ?Sized>(
    pos: &VariantPosition,
    prober: &P,
    settings: &ProbeSettings,
) -> PositionInfo {
    let legals = pos.legal_moves();
    let (checkmate, stalemate) = terminal_flags(pos, !legals.is_empty(), settings.variant);

    let moves = legals
        .iter()
        .map(|m| classify_move(pos, m, prober, settings))
        .collect();

    PositionInfo {
        checkmate,
        stalemate,
        moves,
    }
}

/// Classify the legal move `m` of `pos`.
pub fn classify_move<P: Prober + ?Sized>(
    pos: &VariantPosition,
    m: &Move,
    prober: &P,
    settings: &ProbeSettings,
) -> MoveInfo {
    let uci = m.to_uci(CastlingMode::Chess960).to_string();
    let mut san = San::from_move(pos, *m).to_string();

    let mut after = pos.clone();
    after.play_unchecked(*m);

    let has_replies = !after.legal_moves().is_empty();
    let (checkmate, stalemate) = terminal_flags(&after, has_replies, settings.variant);
    let insufficient_material = settings.variant.is_insufficient_material(after.board());
    let halfmoves = after.halfmoves();

    if checkmate {
        san.push('#');
    } else if after.is_check() {
        san.push('+');
    }

    let mut info = MoveInfo {
        uci,
        san,
        checkmate,
        stalemate,
        insufficient_material,
        zeroing: halfmoves == 0,
        wdl: None,
        dtz: None,
        dtm: None,
    };

    if checkmate {
        info.wdl = Some(-2);
        if settings.dtm_enabled {
            info.dtm = Some(0);
        }
    } else if stalemate || insufficient_material {
        info.wdl = Some(0);
    } else if !after.castles().any() && cardinality(&after) <= settings.max_cardinality {
        match prober.probe_dtz(&after) {
            Probe::Hit(dtz) => {
                info.dtz = Some(dtz);
                info.wdl = Some(wdl_from_dtz(dtz, halfmoves));

                if settings.dtm_enabled && cardinality(&after) <= settings.dtm_max_pieces {
                    info.dtm = match prober.probe_dtm(&after) {
                        Probe::Hit(dtm) => Some(dtm),
                        Probe::Unavailable => None,
                        Probe::Failed(reason) => {
                            debug!(uci = %info.uci, %reason, "dtm probe failed");
                            None
                        }
                    };
                }
            }
            Probe::Unavailable => {}
            Probe::Failed(reason) => {
                warn!(uci = %info.uci, %reason, "dtz probe failed");
            }
        }
    }

    info
}

/// WDL category of a position with the given DTZ and halfmove clock.
///
/// A DTZ beyond 100 plies means the result is spoiled by the 50-move rule.
pub fn wdl_from_dtz(dtz: i32, halfmoves: u32) -> i8 {
    let halfmoves = i32::try_from(halfmoves).unwrap_or(i32::MAX);

    if dtz < -100 && dtz - halfmoves <= -100 {
        -1
    } else if dtz > 100 && dtz + halfmoves >= -100 {
        1
    } else if dtz < 0 {
        -2
    } else if dtz > 0 {
        2
    } else {
        0
    }
}
