use std::str::FromStr;

use analysis::{
    DefenseBalance, HangingPieces, MaterialLedger, MoveEffect, MoveKind, PieceInEffect,
    PieceRecord, TacticFinding, TacticKind,
};
use chess::{ChessMove, Color, Piece, Square};
use serde_json::{json, Value};

/// Parse a coordinate-notation move like "e2e4" or "e7e8q".
pub fn parse_move(text: &str) -> Option<ChessMove> {
    let source = Square::from_str(text.get(0..2)?).ok()?;
    let dest = Square::from_str(text.get(2..4)?).ok()?;

    let promotion = match text.as_bytes().get(4) {
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(_) => return None,
        None => None,
    };

    if text.len() > 5 {
        return None;
    }

    Some(ChessMove::new(source, dest, promotion))
}

pub fn move_effect(effect: &MoveEffect) -> Value {
    json!({
        "piece": piece(&effect.piece),
        "captured": effect.captured.as_ref().map(piece),
        "type": kind_name(effect.kind),
        "defense": defense_name(effect.defense),
        "attacks": effect.attacks.iter().map(piece).collect::<Vec<_>>(),
        "defends": effect.defends.iter().map(piece).collect::<Vec<_>>(),
        "tactics": effect.tactics.iter().map(tactic).collect::<Vec<_>>(),
        "hanging": hanging(&effect.hanging),
    })
}

pub fn material(ledger: &MaterialLedger) -> Value {
    json!({
        "white": record(&ledger.white),
        "black": record(&ledger.black),
    })
}

fn record(record: &PieceRecord) -> Value {
    json!({
        "pawns": record.pawns,
        "knights": record.knights,
        "bishops": record.bishops,
        "rooks": record.rooks,
        "queens": record.queens,
    })
}

fn piece(piece_in_effect: &PieceInEffect) -> Value {
    json!({
        "square": piece_in_effect.square.to_string(),
        "kind": piece_name(piece_in_effect.kind),
        "side": side_name(piece_in_effect.color),
        "attackers": piece_in_effect.attackers.iter().map(piece).collect::<Vec<_>>(),
        "defenders": piece_in_effect.defenders.iter().map(piece).collect::<Vec<_>>(),
    })
}

fn tactic(finding: &TacticFinding) -> Value {
    json!({
        "kind": tactic_name(finding.kind),
        "targets": finding.targets.iter().map(piece).collect::<Vec<_>>(),
    })
}

fn hanging(pieces: &HangingPieces) -> Value {
    json!({
        "white": pieces.white.iter().map(piece).collect::<Vec<_>>(),
        "black": pieces.black.iter().map(piece).collect::<Vec<_>>(),
    })
}

fn kind_name(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Normal => "normal",
        MoveKind::Attacking => "attacking",
        MoveKind::Capture => "capture",
        MoveKind::EnPassant => "en_passant",
        MoveKind::Promotion => "promotion",
        MoveKind::CastleKingside => "castle_kingside",
        MoveKind::CastleQueenside => "castle_queenside",
        MoveKind::Check => "check",
        MoveKind::Checkmate => "checkmate",
        MoveKind::Stalemate => "stalemate",
        MoveKind::Fianchetto => "fianchetto",
    }
}

fn defense_name(defense: DefenseBalance) -> &'static str {
    match defense {
        DefenseBalance::Undefended => "undefended",
        DefenseBalance::Underdefended => "underdefended",
        DefenseBalance::Defended => "defended",
        DefenseBalance::Overdefended => "overdefended",
    }
}

fn tactic_name(kind: TacticKind) -> &'static str {
    match kind {
        TacticKind::Fork => "fork",
        TacticKind::Pin => "pin",
        TacticKind::Skewer => "skewer",
        TacticKind::DoubleCheck => "double_check",
        TacticKind::Trap => "trap",
    }
}

fn piece_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "pawn",
        Piece::Knight => "knight",
        Piece::Bishop => "bishop",
        Piece::Rook => "rook",
        Piece::Queen => "queen",
        Piece::King => "king",
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
