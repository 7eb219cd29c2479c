//! Building positions from request FENs.

use shakmaty::fen::Fen;
use shakmaty::variant::VariantPosition;
use shakmaty::{CastlingMode, Position};

use crate::variant::TablebaseVariant;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("unparsable FEN: {0}")]
    Fen(String),

    #[error("illegal position: {0}")]
    Illegal(String),
}

/// Parse `fen` into a position of the given variant.
///
/// Castling rights are read in Chess960 mode so that both standard (`KQkq`)
/// and shredder-style (`HAha`) fields are accepted.
pub fn build_position(fen: &str, variant: TablebaseVariant) -> Result<VariantPosition, PositionError> {
    let fen: Fen = fen.parse().map_err(|e| PositionError::Fen(format!("{e}")))?;
    VariantPosition::from_setup(variant.shakmaty(), fen.into_setup(), CastlingMode::Chess960)
        .map_err(|e| PositionError::Illegal(format!("{e}")))
}

/// Number of pieces on the board, the tablebase cardinality of a position.
pub fn cardinality(pos: &VariantPosition) -> usize {
    pos.board().occupied().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_standard_position() {
        let pos = build_position("8/8/8/8/8/8/k1K5/8 w - - 0 1", TablebaseVariant::Chess).unwrap();
        assert_eq!(cardinality(&pos), 2);
        assert_eq!(pos.legal_moves().len(), 5);
    }

    #[test]
    fn test_build_rejects_illegal_positions() {
        // Kings next to each other
        let err = build_position("8/8/8/8/8/8/kK6/8 w - - 0 1", TablebaseVariant::Chess);
        assert!(matches!(err, Err(PositionError::Illegal(_))));

        // Side not to move is in check
        assert!(build_position("k7/8/8/8/8/8/8/R3K3 b - - 0 1", TablebaseVariant::Chess).is_ok());
        let err = build_position("k7/8/8/8/8/8/8/R3K3 w - - 0 1", TablebaseVariant::Chess);
        assert!(matches!(err, Err(PositionError::Illegal(_))));
    }

    #[test]
    fn test_build_rejects_unparsable_clock() {
        let err = build_position("8/8/8/8/8/8/k1K5/8 w - - x 1", TablebaseVariant::Chess);
        assert!(matches!(err, Err(PositionError::Fen(_))));
    }

    #[test]
    fn test_shredder_castling() {
        let pos = build_position("r3k2r/8/8/8/8/8/8/R3K2R w HAha - 0 1", TablebaseVariant::Chess).unwrap();
        assert!(pos.castles().any());
    }
}
