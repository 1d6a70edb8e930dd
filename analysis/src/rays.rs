use board::square::{offset, Direction};
use board::Snapshot;
use chess::Square;

use crate::def::PieceInEffect;
use crate::resolver::resolve;

/// Walk outward from `start` along `direction` and collect the first
/// two occupied squares, resolved at depth 0. Anything beyond the
/// second occupant is irrelevant to pin/skewer geometry.
pub fn scan_ray(snapshot: &Snapshot, start: Square, direction: Direction) -> Vec<PieceInEffect> {
    let mut found = Vec::with_capacity(2);

    let mut steps = 1;
    while let Some(square) = offset(start, direction, steps) {
        if snapshot.piece_at(square).is_some() {
            match resolve(snapshot, square, 0) {
                Some(piece) => found.push(piece),
                None => break,
            }
            if found.len() == 2 {
                break;
            }
        }
        steps += 1;
    }

    found
}
