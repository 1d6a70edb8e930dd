use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pincer")]
#[command(about = "Tactical analysis for chess move sequences")]
pub struct Args {
    /// Starting position as FEN. Defaults to the standard start position.
    #[arg(short, long)]
    pub fen: Option<String>,

    /// Moves to play and analyze, in coordinate notation (e2e4, e7e8q).
    pub moves: Vec<String>,

    /// Analyze a single square of the final position instead of
    /// reporting per-move results.
    #[arg(short, long)]
    pub square: Option<String>,

    /// Write debug logs to this file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
