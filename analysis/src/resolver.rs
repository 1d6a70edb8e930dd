use board::Snapshot;
use chess::{Color, Square};

use crate::def::PieceInEffect;

/// Build the attacker/defender description of the piece on `square`.
///
/// Returns None for empty squares. Attacking squares are gathered from
/// both sides and partitioned by side-equality with the occupant: same
/// side means defender, other side means attacker. The classification is
/// not legality-aware, so pinned pieces count like any other.
///
/// `depth` bounds the recursion: at 0 the lists stay empty no matter
/// what the board says, which keeps two mutually attacking pieces from
/// resolving each other forever. Top-level callers pass 1.
pub fn resolve(snapshot: &Snapshot, square: Square, depth: u8) -> Option<PieceInEffect> {
    let (kind, color) = snapshot.piece_at(square)?;

    let mut attackers = Vec::new();
    let mut defenders = Vec::new();

    if depth > 0 {
        let mut reaching = snapshot.attackers_of(square, Color::White);
        reaching.extend(snapshot.attackers_of(square, Color::Black));

        for attacker_square in reaching {
            let Some(piece) = resolve(snapshot, attacker_square, depth - 1) else {
                continue;
            };
            if piece.color == color {
                defenders.push(piece);
            } else {
                attackers.push(piece);
            }
        }
    }

    Some(PieceInEffect {
        square,
        kind,
        color,
        attackers,
        defenders,
    })
}
