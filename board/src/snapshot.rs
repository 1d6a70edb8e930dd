use std::str::FromStr;

use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, Board,
    BoardStatus, ChessMove, Color, MoveGen, Piece, Square, EMPTY,
};

/// An immutable position snapshot behind the query surface the analysis
/// engine consumes. The rules engine underneath handles legality; the
/// snapshot never mutates in place, every move yields a fresh one.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    board: Board,
}

impl Snapshot {
    #[inline(always)]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The piece occupying a square, if any.
    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((piece, color))
    }

    /// All squares holding pieces of `color` that attack `square`.
    ///
    /// Side-comparison only: a pinned piece still counts as an attacker
    /// even though it could not legally recapture.
    pub fn attackers_of(&self, square: Square, color: Color) -> Vec<Square> {
        let occupied = self.board.combined();
        let by_color = self.board.color_combined(color);

        let pawns = self.board.pieces(Piece::Pawn) & by_color;
        let knights = self.board.pieces(Piece::Knight) & by_color;
        let kings = self.board.pieces(Piece::King) & by_color;
        let diagonal = (self.board.pieces(Piece::Bishop) | self.board.pieces(Piece::Queen)) & by_color;
        let orthogonal = (self.board.pieces(Piece::Rook) | self.board.pieces(Piece::Queen)) & by_color;

        // Reverse lookup: a pawn of `color` attacks `square` iff it sits on
        // a square the opposite-colored pawn attack table reaches from there.
        let attackers = get_pawn_attacks(square, !color, pawns)
            | (get_knight_moves(square) & knights)
            | (get_king_moves(square) & kings)
            | (get_bishop_moves(square, *occupied) & diagonal)
            | (get_rook_moves(square, *occupied) & orthogonal);

        attackers.collect()
    }

    /// All legal moves in the position.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Legal moves for `color`, optionally restricted to one origin square,
    /// generated as if `color` were the side to move.
    ///
    /// When the turn has to be forced, a null move flips it; if the side to
    /// move is in check a FEN turn-rewrite is tried instead. When neither
    /// yields a valid position the destinations are derived from the attack
    /// tables directly, so a piece that just delivered check still reports
    /// its reach.
    pub fn moves_for(&self, color: Color, from: Option<Square>) -> Vec<ChessMove> {
        let board = if self.board.side_to_move() == color {
            Some(self.board)
        } else {
            self.flipped_turn()
        };

        match board {
            Some(board) => {
                let generator = MoveGen::new_legal(&board);
                match from {
                    Some(square) => generator.filter(|mv| mv.get_source() == square).collect(),
                    None => generator.collect(),
                }
            }
            None => self.reach_for(color, from),
        }
    }

    /// Pseudo-legal destinations from the attack tables, skipping own
    /// pieces and the enemy king (no legal move ever lands on a king).
    fn reach_for(&self, color: Color, from: Option<Square>) -> Vec<ChessMove> {
        let occupied = *self.board.combined();
        let own = *self.board.color_combined(color);
        let enemy_king = self.board.pieces(Piece::King) & self.board.color_combined(!color);
        let blocked = own | enemy_king;

        let origins: Vec<Square> = match from {
            Some(square) => vec![square],
            None => own.collect(),
        };

        let mut moves = Vec::new();
        for origin in origins {
            let Some((piece, piece_color)) = self.piece_at(origin) else {
                continue;
            };
            if piece_color != color {
                continue;
            }

            let reach = match piece {
                Piece::Pawn => get_pawn_attacks(origin, color, !EMPTY),
                Piece::Knight => get_knight_moves(origin),
                Piece::Bishop => get_bishop_moves(origin, occupied),
                Piece::Rook => get_rook_moves(origin, occupied),
                Piece::Queen => {
                    get_bishop_moves(origin, occupied) | get_rook_moves(origin, occupied)
                }
                Piece::King => get_king_moves(origin),
            };

            for dest in reach & !blocked {
                moves.push(ChessMove::new(origin, dest, None));
            }
        }

        moves
    }

    fn flipped_turn(&self) -> Option<Board> {
        if let Some(board) = self.board.null_move() {
            return Some(board);
        }

        // Side to move is in check, so the null move is unavailable.
        // Rewrite the turn field of the FEN and clear en passant.
        let fen = self.fen();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return None;
        }

        let side = if parts[1] == "w" { "b" } else { "w" };
        let mut fields = vec![parts[0], side, parts[2], "-"];
        fields.extend(&parts[4..]);

        Board::from_str(&fields.join(" ")).ok()
    }

    #[inline(always)]
    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Apply a legal move, producing the resulting snapshot.
    #[inline(always)]
    pub fn apply(&self, mv: ChessMove) -> Snapshot {
        Snapshot::new(self.board.make_move_new(mv))
    }

    /// Canonical position encoding, used for before/after equality checks.
    /// The rules engine fixes the move clocks, so comparisons ignore them.
    #[inline(always)]
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    #[inline(always)]
    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    /// True when the side to move has no legal moves without being in
    /// check, and the position is not already a dead material draw.
    #[inline(always)]
    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate && !self.has_insufficient_material()
    }

    /// Dead drawn positions: K vs K, K+N vs K, K+B vs K, and K+B vs K+B
    /// with same-colored bishops.
    pub fn has_insufficient_material(&self) -> bool {
        const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

        let pawns = self.board.pieces(Piece::Pawn);
        let rooks = self.board.pieces(Piece::Rook);
        let queens = self.board.pieces(Piece::Queen);

        if (pawns | rooks | queens).popcnt() > 0 {
            return false;
        }

        let white = self.board.color_combined(Color::White);
        let black = self.board.color_combined(Color::Black);
        let knights = self.board.pieces(Piece::Knight);
        let bishops = self.board.pieces(Piece::Bishop);

        let white_knights = (white & knights).popcnt();
        let black_knights = (black & knights).popcnt();
        let white_bishops = (white & bishops).popcnt();
        let black_bishops = (black & bishops).popcnt();

        let white_minors = white_knights + white_bishops;
        let black_minors = black_knights + black_bishops;

        // K vs K
        if white_minors == 0 && black_minors == 0 {
            return true;
        }

        // Lone minor against a bare king, either side
        if white_minors == 1 && black_minors == 0 {
            return true;
        }
        if black_minors == 1 && white_minors == 0 {
            return true;
        }

        // K+B vs K+B with bishops on same color squares
        if white_bishops == 1 && black_bishops == 1 && white_minors == 1 && black_minors == 1 {
            let light_squares = chess::BitBoard(LIGHT_SQUARES_MASK);
            let white_on_light = (white & bishops & light_squares).popcnt() > 0;
            let black_on_light = (black & bishops & light_squares).popcnt() > 0;

            if white_on_light == black_on_light {
                return true;
            }
        }

        false
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl FromStr for Snapshot {
    type Err = chess::Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(Board::from_str(fen)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;

    #[test]
    fn test_piece_at_start_position() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(snapshot.piece_at(Square::D8), Some((Piece::Queen, Color::Black)));
        assert_eq!(snapshot.piece_at(Square::E4), None);
    }

    #[test]
    fn test_attackers_of_d2_start_position() {
        let snapshot = Snapshot::default();

        // The d2 pawn is covered by Qd1, Bc1, Nb1 and Ke1.
        let white = snapshot.attackers_of(Square::D2, Color::White);
        assert_eq!(white.len(), 4);
        assert!(white.contains(&Square::D1));
        assert!(white.contains(&Square::C1));
        assert!(white.contains(&Square::B1));
        assert!(white.contains(&Square::E1));

        assert!(snapshot.attackers_of(Square::D2, Color::Black).is_empty());
    }

    #[test]
    fn test_attackers_of_ignores_pins() {
        // The e2 knight is pinned by the e8 rook but still attacks d4.
        let snapshot: Snapshot = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let white = snapshot.attackers_of(Square::D4, Color::White);
        assert!(white.contains(&Square::E2));
    }

    #[test]
    fn test_pawn_attackers_are_captures_only() {
        // A pawn does not attack the square it pushes to.
        let snapshot = Snapshot::default();
        assert!(snapshot.attackers_of(Square::E3, Color::White).is_empty());
        assert!(!snapshot.attackers_of(Square::D3, Color::White).is_empty());
    }

    #[test]
    fn test_moves_for_forces_turn() {
        let start = Snapshot::default();
        let after_e4 = start.apply(ChessMove::new(Square::E2, Square::E4, None));
        assert_eq!(after_e4.side_to_move(), Color::Black);

        // White is not on turn, but the e4 pawn still has a forward push.
        let moves = after_e4.moves_for(Color::White, Some(Square::E4));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].get_dest(), Square::E5);
    }

    #[test]
    fn test_moves_for_matching_turn() {
        let snapshot = Snapshot::default();
        let moves = snapshot.moves_for(Color::White, Some(Square::G1));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_moves_for_checking_side() {
        // The d5 queen checks the a8 king, so the turn cannot be handed
        // back to white; its reach must still come out.
        let snapshot: Snapshot = "k7/8/8/3Q3r/8/8/3n4/6K1 b - - 0 1".parse().unwrap();

        let dests: Vec<Square> = snapshot
            .moves_for(Color::White, Some(Square::D5))
            .iter()
            .map(|mv| mv.get_dest())
            .collect();

        assert!(dests.contains(&Square::H5));
        assert!(dests.contains(&Square::D2));
        // No move ever lands on the enemy king.
        assert!(!dests.contains(&Square::A8));
    }

    #[test]
    fn test_stalemate_detection() {
        let snapshot: Snapshot = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(snapshot.is_stalemate());
        assert!(!snapshot.in_check());
        assert!(!snapshot.is_checkmate());
    }

    #[test]
    fn test_checkmate_detection() {
        let snapshot: Snapshot = "6k1/5ppp/8/8/8/8/8/4K2R b - - 0 1".parse().unwrap();
        // Back-rank mate: Rh1-h8 pattern already delivered.
        let mated: Snapshot = "R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        assert!(!snapshot.is_checkmate());
        assert!(mated.is_checkmate());
        assert!(mated.in_check());
    }

    #[test]
    fn test_insufficient_material() {
        let kk: Snapshot = "k7/8/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let kbk: Snapshot = "k7/8/8/8/8/8/8/KB6 w - - 0 1".parse().unwrap();
        let krk: Snapshot = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert!(kk.has_insufficient_material());
        assert!(kbk.has_insufficient_material());
        assert!(!krk.has_insufficient_material());
    }

    #[test]
    fn test_fen_round_trip() {
        let fen = "r5k1/6p1/8/3Q3n/8/8/8/6K1 w - - 0 1";
        let snapshot: Snapshot = fen.parse().unwrap();
        let reparsed: Snapshot = snapshot.fen().parse().unwrap();
        assert_eq!(snapshot.fen(), reparsed.fen());
    }
}
