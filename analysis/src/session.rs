use board::Snapshot;
use chess::{ChessMove, Square};
use log::debug;

use crate::analyze::analyze;
use crate::def::MoveEffect;
use crate::material::MaterialLedger;

/// The embedding-facing entry point: holds the current position, the
/// position before the last move, and the running material ledger.
///
/// The session never mutates a snapshot; each move replaces the current
/// one with a freshly derived position.
#[derive(Debug)]
pub struct AnalysisSession {
    current: Snapshot,
    previous: Option<Snapshot>,
    ledger: MaterialLedger,
}

impl AnalysisSession {
    /// A session starting from the standard position.
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    /// A session starting from an arbitrary FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, chess::Error> {
        Ok(Self::from_snapshot(fen.parse()?))
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            current: snapshot,
            previous: None,
            ledger: MaterialLedger::default(),
        }
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Apply a move through the board engine, analyze the resulting
    /// position at the move's destination, and book the material
    /// consequences. Illegal moves leave the session untouched.
    pub fn move_and_analyze(&mut self, mv: ChessMove) -> Option<MoveEffect> {
        if !self.current.is_legal(mv) {
            debug!("rejected illegal move {}", mv);
            return None;
        }

        let mover = self.current.side_to_move();
        let next = self.current.apply(mv);
        let effect = analyze(&next, mv.get_dest(), Some(&self.current))?;

        self.ledger.record(&effect, mover, mv.get_promotion());
        self.previous = Some(self.current);
        self.current = next;

        debug!("analyzed {} as {:?}", mv, effect.kind);
        Some(effect)
    }

    /// Analyze the piece on `square` in the current position, using the
    /// pre-move position as context when a move has been played.
    pub fn analyze_at(&self, square: Square) -> Option<MoveEffect> {
        analyze(&self.current, square, self.previous.as_ref())
    }

    /// Read-only view of the material ledger.
    pub fn material(&self) -> &MaterialLedger {
        &self.ledger
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
