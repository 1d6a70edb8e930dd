use board::Snapshot;
use chess::{Piece, Square, ALL_SQUARES};

use crate::def::BoardScan;
use crate::resolver::resolve;

/// Sweep all 64 squares (a1, b1, .. h8) of the board, skipping empties
/// and the excluded square of the piece under analysis.
///
/// A piece lands in `defends` when one of its defenders sits on the
/// excluded square; kings are never reported as defended. A piece is
/// hanging when it has at least one attacker and no defender at all.
pub fn scan_board(snapshot: &Snapshot, exclude: Square) -> BoardScan {
    let mut scan = BoardScan::default();

    for square in ALL_SQUARES {
        if square == exclude {
            continue;
        }
        let Some(piece) = resolve(snapshot, square, 1) else {
            continue;
        };

        if piece.kind != Piece::King && piece.defenders.iter().any(|d| d.square == exclude) {
            scan.defends.push(piece.clone());
        }

        if !piece.attackers.is_empty() && piece.defenders.is_empty() {
            scan.hanging.side_mut(piece.color).push(piece);
        }
    }

    scan
}
