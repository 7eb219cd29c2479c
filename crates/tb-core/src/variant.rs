//! Variant-specific rules, selected once at startup.
//!
//! Each deployment serves exactly one rule set. The selected variant is passed
//! explicitly into the validator and the classifier.

use std::fmt;
use std::str::FromStr;

use shakmaty::variant::{Variant, VariantPosition};
use shakmaty::{Bitboard, Board, Position};

/// Rule set a tablebase deployment serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TablebaseVariant {
    #[default]
    Chess,
    /// Atomic chess: a king blown up by a capture loses the game.
    Atomic,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown tablebase variant: {0}")]
pub struct UnknownVariant(pub String);

impl TablebaseVariant {
    pub fn name(self) -> &'static str {
        match self {
            TablebaseVariant::Chess => "chess",
            TablebaseVariant::Atomic => "atomic",
        }
    }

    pub fn shakmaty(self) -> Variant {
        match self {
            TablebaseVariant::Chess => Variant::Chess,
            TablebaseVariant::Atomic => Variant::Atomic,
        }
    }

    /// King-count rule applied by the FEN validator.
    pub fn kings_valid(self, white_kings: u32, black_kings: u32) -> bool {
        match self {
            TablebaseVariant::Chess => white_kings == 1 && black_kings == 1,
            TablebaseVariant::Atomic => white_kings + black_kings >= 1,
        }
    }

    /// Whether neither side can possibly deliver mate.
    pub fn is_insufficient_material(self, board: &Board) -> bool {
        match self {
            TablebaseVariant::Chess => chess_insufficient_material(board),
            TablebaseVariant::Atomic => board.occupied().count() <= 2,
        }
    }

    /// Whether the side to move has already lost without being mated, e.g. its
    /// king exploded in atomic.
    pub fn is_immediate_loss(self, pos: &VariantPosition) -> bool {
        match self {
            TablebaseVariant::Chess => false,
            TablebaseVariant::Atomic => {
                let board = pos.board();
                (board.by_color(pos.turn()) & board.kings()).is_empty()
            }
        }
    }

    /// Extension of the Syzygy WDL table files for this variant.
    pub fn wdl_extension(self) -> &'static str {
        match self {
            TablebaseVariant::Chess => "rtbw",
            TablebaseVariant::Atomic => "atbw",
        }
    }
}

fn chess_insufficient_material(board: &Board) -> bool {
    // Easy mating material
    if (board.pawns() | board.rooks() | board.queens()).any() {
        return false;
    }

    // A single knight or a single bishop
    if (board.knights() | board.bishops()).count() == 1 {
        return true;
    }

    // More than a single knight
    if board.knights().any() {
        return false;
    }

    // All bishops on the same color
    let bishops = board.bishops();
    (bishops & Bitboard::DARK_SQUARES).is_empty() || (bishops & Bitboard::LIGHT_SQUARES).is_empty()
}

impl fmt::Display for TablebaseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TablebaseVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chess" | "standard" => Ok(TablebaseVariant::Chess),
            "atomic" => Ok(TablebaseVariant::Atomic),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}
