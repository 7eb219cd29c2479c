//! Display order of classified moves, best first.

use std::cmp::Ordering;

use crate::classify::MoveInfo;

/// Total order over classified moves.
///
/// Keys, most significant first: DTZ known, WDL known, ascending WDL,
/// checkmate, stalemate, insufficient material, DTM known, ascending DTM,
/// zeroing preference by side of zero, descending DTZ, and finally the UCI
/// string.
pub fn compare_moves(a: &MoveInfo, b: &MoveInfo) -> Ordering {
    known_first(a.dtz.is_some(), b.dtz.is_some())
        .then_with(|| known_first(a.wdl.is_some(), b.wdl.is_some()))
        .then_with(|| match (a.wdl, b.wdl) {
            (Some(a_wdl), Some(b_wdl)) => a_wdl.cmp(&b_wdl),
            _ => Ordering::Equal,
        })
        .then_with(|| known_first(a.checkmate, b.checkmate))
        .then_with(|| known_first(a.stalemate, b.stalemate))
        .then_with(|| known_first(a.insufficient_material, b.insufficient_material))
        .then_with(|| known_first(a.dtm.is_some(), b.dtm.is_some()))
        .then_with(|| match (a.dtm, b.dtm) {
            (Some(a_dtm), Some(b_dtm)) => a_dtm.cmp(&b_dtm),
            _ => Ordering::Equal,
        })
        .then_with(|| compare_zeroing(a, b))
        .then_with(|| match (a.dtz, b.dtz) {
            (Some(a_dtz), Some(b_dtz)) => b_dtz.cmp(&a_dtz),
            _ => Ordering::Equal,
        })
        .then_with(|| a.uci.cmp(&b.uci))
}

/// Sort moves in place into display order.
pub fn sort_moves(moves: &mut [MoveInfo]) {
    moves.sort_by(compare_moves);
}

fn known_first(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

fn compare_zeroing(a: &MoveInfo, b: &MoveInfo) -> Ordering {
    match (a.wdl, b.wdl) {
        // Losing: keep the clock running
        (Some(a_wdl), Some(b_wdl)) if a_wdl < 0 && b_wdl < 0 => a.zeroing.cmp(&b.zeroing),
        // Winning: reset the clock
        (Some(a_wdl), Some(b_wdl)) if a_wdl > 0 && b_wdl > 0 => b.zeroing.cmp(&a.zeroing),
        _ => Ordering::Equal,
    }
}
