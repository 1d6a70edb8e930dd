mod analyze;
mod classify;
mod def;
mod material;
mod rays;
mod resolver;
mod scan;
mod session;
mod tactics;

pub use analyze::analyze;
pub use classify::{classify, fianchetto, Classification};
pub use def::{
    BoardScan, DefenseBalance, HangingPieces, MoveEffect, MoveKind, PieceInEffect, TacticFinding,
    TacticKind,
};
pub use material::{MaterialLedger, PieceRecord};
pub use rays::scan_ray;
pub use resolver::resolve;
pub use scan::scan_board;
pub use session::AnalysisSession;
pub use tactics::detect;
