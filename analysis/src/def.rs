use chess::{Color, Piece, Square};

/// A piece together with its one-level attacker/defender description.
///
/// Descriptors nested inside `attackers`/`defenders` always carry empty
/// lists of their own; resolution is cut off at depth 1 so mutually
/// attacking pieces cannot recurse into each other.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceInEffect {
    pub square: Square,
    pub kind: Piece,
    pub color: Color,
    pub attackers: Vec<PieceInEffect>,
    pub defenders: Vec<PieceInEffect>,
}

/// Move-type tag derived by the classifier and refined by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Attacking,
    Capture,
    EnPassant,
    Promotion,
    CastleKingside,
    CastleQueenside,
    Check,
    Checkmate,
    Stalemate,
    Fianchetto,
}

/// Qualitative comparison of attacker vs defender counts on one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenseBalance {
    Undefended,
    Underdefended,
    Defended,
    Overdefended,
}

impl DefenseBalance {
    /// A piece with neither attackers nor defenders counts as defended:
    /// no threats, no defense needed.
    pub fn from_counts(attackers: usize, defenders: usize) -> Self {
        if defenders == 0 && attackers > 0 {
            return Self::Undefended;
        }
        if defenders > 0 && attackers == 0 {
            return Self::Overdefended;
        }

        if defenders > attackers {
            Self::Overdefended
        } else if defenders < attackers {
            Self::Underdefended
        } else {
            Self::Defended
        }
    }
}

/// The recognized tactical motifs. Double check and trap are reserved
/// kinds in the result vocabulary; the detector currently emits fork,
/// pin and skewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacticKind {
    Fork,
    Pin,
    Skewer,
    DoubleCheck,
    Trap,
}

/// One detected tactic. For pins and skewers the target order is
/// `[front piece, piece behind it]` along the qualifying ray.
#[derive(Debug, Clone, PartialEq)]
pub struct TacticFinding {
    pub kind: TacticKind,
    pub targets: Vec<PieceInEffect>,
}

/// Attacked-but-undefended pieces across the whole board, filed under
/// the side owning the piece.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HangingPieces {
    pub white: Vec<PieceInEffect>,
    pub black: Vec<PieceInEffect>,
}

impl HangingPieces {
    pub fn side(&self, color: Color) -> &[PieceInEffect] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn side_mut(&mut self, color: Color) -> &mut Vec<PieceInEffect> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// Output of the full-board scan: pieces the analyzed piece defends,
/// and the hanging-piece census.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardScan {
    pub defends: Vec<PieceInEffect>,
    pub hanging: HangingPieces,
}

/// The complete analysis result for one queried piece. Produced fresh
/// per query, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEffect {
    pub piece: PieceInEffect,
    pub captured: Option<PieceInEffect>,
    pub kind: MoveKind,
    pub defense: DefenseBalance,
    pub attacks: Vec<PieceInEffect>,
    pub defends: Vec<PieceInEffect>,
    pub tactics: Vec<TacticFinding>,
    pub hanging: HangingPieces,
}
