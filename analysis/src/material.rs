use chess::{Color, Piece};

use crate::def::MoveEffect;

/// Remaining non-king material for one side, seeded with the standard
/// starting allotment. Counts only move on capture/promotion signals;
/// they are never recomputed from board scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub pawns: u8,
    pub knights: u8,
    pub bishops: u8,
    pub rooks: u8,
    pub queens: u8,
}

impl Default for PieceRecord {
    fn default() -> Self {
        Self {
            pawns: 8,
            knights: 2,
            bishops: 2,
            rooks: 2,
            queens: 1,
        }
    }
}

impl PieceRecord {
    pub fn get(&self, piece: Piece) -> u8 {
        match piece {
            Piece::Pawn => self.pawns,
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops,
            Piece::Rook => self.rooks,
            Piece::Queen => self.queens,
            Piece::King => 0,
        }
    }

    fn slot(&mut self, piece: Piece) -> Option<&mut u8> {
        match piece {
            Piece::Pawn => Some(&mut self.pawns),
            Piece::Knight => Some(&mut self.knights),
            Piece::Bishop => Some(&mut self.bishops),
            Piece::Rook => Some(&mut self.rooks),
            Piece::Queen => Some(&mut self.queens),
            Piece::King => None,
        }
    }

    fn add(&mut self, piece: Piece) {
        if let Some(count) = self.slot(piece) {
            *count = count.saturating_add(1);
        }
    }

    fn remove(&mut self, piece: Piece) {
        if let Some(count) = self.slot(piece) {
            *count = count.saturating_sub(1);
        }
    }
}

/// Per-side material counters, driven by `MoveEffect` fields as a
/// post-processing step so they can be tested against synthetic effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialLedger {
    pub white: PieceRecord,
    pub black: PieceRecord,
}

impl MaterialLedger {
    pub fn side(&self, color: Color) -> &PieceRecord {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut PieceRecord {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Apply one move's material consequences: the victim's side loses
    /// the captured kind, and a promotion credits the promoted-to kind
    /// to the side that promoted.
    pub fn record(&mut self, effect: &MoveEffect, mover: Color, promotion: Option<Piece>) {
        if let Some(captured) = &effect.captured {
            self.side_mut(captured.color).remove(captured.kind);
        }

        if let Some(kind) = promotion {
            self.side_mut(mover).add(kind);
        }
    }
}
