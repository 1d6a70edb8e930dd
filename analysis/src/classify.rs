use board::square::{offset, Direction};
use board::Snapshot;
use chess::{ChessMove, Color, Piece, Square};

use crate::def::{MoveKind, PieceInEffect};
use crate::resolver::resolve;

/// Outcome of move identification against a prior position.
#[derive(Debug, Clone)]
pub struct Classification {
    pub kind: MoveKind,
    pub matched: Option<ChessMove>,
    pub captured: Option<PieceInEffect>,
}

/// Identify the move that turned `previous` into `current` and derive
/// its move-type tag.
///
/// Without a previous snapshot no move-specific tag can be inferred and
/// the kind stays Normal. The stalemate override is evaluated against
/// the current snapshot either way.
pub fn classify(current: &Snapshot, previous: Option<&Snapshot>) -> Classification {
    let mut kind = MoveKind::Normal;
    let mut matched = None;
    let mut captured = None;

    if let Some(previous) = previous {
        if let Some(mv) = identify_move(current, previous) {
            kind = move_kind(previous, current, mv);
            captured = captured_piece(previous, mv);
            matched = Some(mv);
        }
    }

    if current.is_stalemate() {
        kind = MoveKind::Stalemate;
    }

    Classification {
        kind,
        matched,
        captured,
    }
}

/// The unique legal move whose application to `previous` reproduces
/// `current` exactly. Ambiguous or illegal transitions yield no match.
fn identify_move(current: &Snapshot, previous: &Snapshot) -> Option<ChessMove> {
    let target = current.fen();

    let mut found = None;
    for mv in previous.legal_moves() {
        if previous.apply(mv).fen() == target {
            if found.is_some() {
                return None;
            }
            found = Some(mv);
        }
    }
    found
}

fn move_kind(previous: &Snapshot, current: &Snapshot, mv: ChessMove) -> MoveKind {
    let source = mv.get_source();
    let dest = mv.get_dest();

    let mut kind = if mv.get_promotion().is_some() {
        MoveKind::Promotion
    } else if previous.piece_at(dest).is_some() {
        MoveKind::Capture
    } else if is_en_passant(previous, mv) {
        MoveKind::EnPassant
    } else if is_king_move(previous, source) && file_distance(source, dest) == 2 {
        if dest.get_file().to_index() > source.get_file().to_index() {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        }
    } else {
        MoveKind::Normal
    };

    // Check and mate are read off the resulting position and win over
    // whatever the move flags said.
    if current.in_check() {
        kind = MoveKind::Check;
    }
    if current.is_checkmate() {
        kind = MoveKind::Checkmate;
    }

    kind
}

/// The victim of `mv`, resolved at depth 0 from the pre-move position.
/// For en passant the destination is empty, so the victim is read from
/// the pawn's actual square instead.
fn captured_piece(previous: &Snapshot, mv: ChessMove) -> Option<PieceInEffect> {
    let dest = mv.get_dest();

    if previous.piece_at(dest).is_some() {
        return resolve(previous, dest, 0);
    }

    if is_en_passant(previous, mv) {
        let victim = Square::make_square(mv.get_source().get_rank(), dest.get_file());
        return resolve(previous, victim, 0);
    }

    None
}

fn is_en_passant(previous: &Snapshot, mv: ChessMove) -> bool {
    matches!(previous.piece_at(mv.get_source()), Some((Piece::Pawn, _)))
        && mv.get_source().get_file() != mv.get_dest().get_file()
        && previous.piece_at(mv.get_dest()).is_none()
}

fn is_king_move(previous: &Snapshot, source: Square) -> bool {
    matches!(previous.piece_at(source), Some((Piece::King, _)))
}

fn file_distance(a: Square, b: Square) -> usize {
    a.get_file().to_index().abs_diff(b.get_file().to_index())
}

const FIANCHETTO_OUTPOSTS: [Square; 4] = [Square::B2, Square::G2, Square::B7, Square::G7];

/// True for a bishop on one of the four fianchetto outposts with a
/// friendly pawn one or two ranks in front of it.
pub fn fianchetto(snapshot: &Snapshot, square: Square) -> bool {
    let Some((Piece::Bishop, color)) = snapshot.piece_at(square) else {
        return false;
    };
    if !FIANCHETTO_OUTPOSTS.contains(&square) {
        return false;
    }

    let forward: Direction = match color {
        Color::White => (0, 1),
        Color::Black => (0, -1),
    };

    (1..=2).any(|steps| {
        offset(square, forward, steps)
            .and_then(|sq| snapshot.piece_at(sq))
            .map_or(false, |(piece, side)| piece == Piece::Pawn && side == color)
    })
}
