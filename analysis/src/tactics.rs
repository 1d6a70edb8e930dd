use board::square::{Direction, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use board::values::piece_value;
use board::Snapshot;
use chess::Piece;

use crate::def::{DefenseBalance, PieceInEffect, TacticFinding, TacticKind};
use crate::rays::scan_ray;

/// Detect forks, pins and skewers for the analyzed piece.
///
/// A fork is reported when the piece reaches two or more enemy pieces;
/// pins and skewers only exist for line pieces and are judged per ray
/// direction, so one move can yield several findings.
pub fn detect(
    snapshot: &Snapshot,
    piece: &PieceInEffect,
    attacks: &[PieceInEffect],
    defense: DefenseBalance,
) -> Vec<TacticFinding> {
    let mut findings = Vec::new();

    if attacks.len() >= 2 {
        findings.push(TacticFinding {
            kind: TacticKind::Fork,
            targets: attacks.to_vec(),
        });
    }

    let directions: &[Direction] = match piece.kind {
        Piece::Bishop => &DIAGONAL,
        Piece::Rook => &ORTHOGONAL,
        Piece::Queen => &ALL_DIRECTIONS,
        _ => return findings,
    };

    // A skewer is only worth the name when the piece delivering it can
    // stand its ground.
    let safely_defended = matches!(
        defense,
        DefenseBalance::Defended | DefenseBalance::Overdefended
    );

    for &direction in directions {
        let ray = scan_ray(snapshot, piece.square, direction);
        if ray.len() != 2 {
            continue;
        }

        let front = &ray[0];
        let back = &ray[1];
        if front.color == piece.color || back.color == piece.color {
            continue;
        }

        let kind = if piece_value(front.kind) > piece_value(back.kind) && safely_defended {
            TacticKind::Skewer
        } else {
            TacticKind::Pin
        };

        findings.push(TacticFinding {
            kind,
            targets: vec![front.clone(), back.clone()],
        });
    }

    findings
}
