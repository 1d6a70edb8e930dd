use board::Snapshot;
use chess::Square;

use crate::classify::{classify, fianchetto};
use crate::def::{DefenseBalance, MoveEffect, MoveKind};
use crate::resolver::resolve;
use crate::scan::scan_board;
use crate::tactics::detect;

/// Run the full analysis pipeline for the piece on `square`.
///
/// Returns None when the square is empty. With a previous snapshot the
/// move that produced the transition is identified and tagged; without
/// one the positional analysis still runs in full.
pub fn analyze(
    current: &Snapshot,
    square: Square,
    previous: Option<&Snapshot>,
) -> Option<MoveEffect> {
    let classification = classify(current, previous);
    let piece = resolve(current, square, 1)?;

    let defense = DefenseBalance::from_counts(piece.attackers.len(), piece.defenders.len());

    // A threatened piece reports as attacking, except a stalemate verdict
    // sticks. The fianchetto refinement runs last and wins over both.
    let mut kind = classification.kind;
    if kind != MoveKind::Stalemate && !piece.attackers.is_empty() {
        kind = MoveKind::Attacking;
    }
    if fianchetto(current, square) {
        kind = MoveKind::Fianchetto;
    }

    let scan = scan_board(current, square);

    // Destinations are generated with the turn forced to the piece's own
    // side, so analysis works after the move has flipped the turn.
    let mut attacks = Vec::new();
    for mv in current.moves_for(piece.color, Some(square)) {
        let Some((_, target_color)) = current.piece_at(mv.get_dest()) else {
            continue;
        };
        if target_color == piece.color {
            continue;
        }
        if let Some(target) = resolve(current, mv.get_dest(), 0) {
            attacks.push(target);
        }
    }

    let tactics = detect(current, &piece, &attacks, defense);

    Some(MoveEffect {
        piece,
        captured: classification.captured,
        kind,
        defense,
        attacks,
        defends: scan.defends,
        tactics,
        hanging: scan.hanging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def::TacticKind;
    use chess::{ChessMove, Color, Piece};

    #[test]
    fn test_empty_square_yields_nothing() {
        let snapshot = Snapshot::default();
        assert!(analyze(&snapshot, Square::E4, None).is_none());
    }

    #[test]
    fn test_opening_pawn_push() {
        let start = Snapshot::default();
        let current = start.apply(ChessMove::new(Square::E2, Square::E4, None));

        let effect = analyze(&current, Square::E4, Some(&start)).unwrap();
        assert_eq!(effect.kind, MoveKind::Normal);
        assert_eq!(effect.defense, DefenseBalance::Defended);
        assert!(effect.attacks.is_empty());
        assert!(effect.tactics.is_empty());
        assert!(effect.hanging.white.is_empty());
        assert!(effect.hanging.black.is_empty());
        assert!(effect.captured.is_none());
    }

    #[test]
    fn test_threatened_piece_reports_attacking() {
        // The e4 pawn and d5 queen attack each other; the pawn has no cover.
        let snapshot: Snapshot = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();

        let effect = analyze(&snapshot, Square::E4, None).unwrap();
        assert_eq!(effect.kind, MoveKind::Attacking);
        assert_eq!(effect.defense, DefenseBalance::Undefended);

        // The queen it reaches hangs for black.
        assert_eq!(effect.attacks.len(), 1);
        assert_eq!(effect.attacks[0].square, Square::D5);
        assert_eq!(effect.hanging.black.len(), 1);
        assert_eq!(effect.hanging.black[0].square, Square::D5);
    }

    #[test]
    fn test_pinning_bishop_scenario() {
        // Bg4 pins Nf3 against Qd1, covered by the f6 knight.
        let snapshot: Snapshot =
            "rn1qkb1r/pppp1ppp/5n2/4p3/4P1b1/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1"
                .parse()
                .unwrap();

        let effect = analyze(&snapshot, Square::G4, None).unwrap();
        assert_eq!(effect.defense, DefenseBalance::Overdefended);

        assert_eq!(effect.tactics.len(), 1);
        let pin = &effect.tactics[0];
        assert_eq!(pin.kind, TacticKind::Pin);
        assert_eq!(pin.targets[0].square, Square::F3);
        assert_eq!(pin.targets[1].square, Square::D1);
    }

    #[test]
    fn test_queen_fork_scenario() {
        let snapshot: Snapshot = "r7/6k1/8/3Q3n/8/8/8/6K1 w - - 0 1".parse().unwrap();

        let effect = analyze(&snapshot, Square::D5, None).unwrap();

        let fork = effect
            .tactics
            .iter()
            .find(|f| f.kind == TacticKind::Fork)
            .unwrap();
        assert_eq!(fork.targets.len(), 2);

        let forked: Vec<Square> = fork.targets.iter().map(|t| t.square).collect();
        assert!(forked.contains(&Square::A8));
        assert!(forked.contains(&Square::H5));

        // Both victims also show up in black's hanging census.
        let hanging: Vec<Square> = effect.hanging.black.iter().map(|p| p.square).collect();
        assert!(hanging.contains(&Square::A8));
        assert!(hanging.contains(&Square::H5));
    }

    #[test]
    fn test_checking_queen_still_forks() {
        // Qd5 checks the a8 king while also reaching the h5 rook and the
        // d2 knight; the fork must be found even though the turn cannot
        // be handed back to white.
        let snapshot: Snapshot = "k7/8/8/3Q3r/8/8/3n4/6K1 b - - 0 1".parse().unwrap();

        let effect = analyze(&snapshot, Square::D5, None).unwrap();

        let attacked: Vec<Square> = effect.attacks.iter().map(|p| p.square).collect();
        assert!(attacked.contains(&Square::H5));
        assert!(attacked.contains(&Square::D2));

        let fork = effect
            .tactics
            .iter()
            .find(|f| f.kind == TacticKind::Fork)
            .unwrap();
        assert_eq!(fork.targets.len(), 2);
    }

    #[test]
    fn test_fianchetto_overrides_attacking() {
        // The g2 bishop is attacked along the second rank but sits behind
        // its g3 pawn; the fianchetto tag wins.
        let snapshot: Snapshot = "6k1/8/8/8/8/6P1/r5B1/6K1 w - - 0 1".parse().unwrap();

        let effect = analyze(&snapshot, Square::G2, None).unwrap();
        assert!(!effect.piece.attackers.is_empty());
        assert_eq!(effect.kind, MoveKind::Fianchetto);
    }

    #[test]
    fn test_analysis_works_for_off_turn_side() {
        // After 1. e4 it is black's turn, yet the white pawn can still be
        // analyzed with destinations generated for its own side.
        let start = Snapshot::default();
        let current = start.apply(ChessMove::new(Square::E2, Square::E4, None));
        assert_eq!(current.side_to_move(), Color::Black);

        let effect = analyze(&current, Square::E4, None).unwrap();
        assert_eq!(effect.piece.kind, Piece::Pawn);
        assert_eq!(effect.piece.color, Color::White);
    }

    #[test]
    fn test_capture_carries_victim_through() {
        let previous: Snapshot = "k7/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let current = previous.apply(ChessMove::new(Square::E4, Square::D5, None));

        let effect = analyze(&current, Square::D5, Some(&previous)).unwrap();
        assert_eq!(effect.kind, MoveKind::Capture);
        let victim = effect.captured.unwrap();
        assert_eq!(victim.kind, Piece::Pawn);
        assert_eq!(victim.color, Color::Black);
    }
}
