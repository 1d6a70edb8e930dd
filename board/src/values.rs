use chess::Piece;

/// Flat tactical piece values. Deliberately untapered: tactic
/// classification needs an ordering between pieces, not centipawns.
/// The king's value only exists so it outranks everything on a ray.
pub fn piece_value(piece: Piece) -> i16 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 100,
    }
}
