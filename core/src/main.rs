mod args;
mod encoder;

use std::error::Error;
use std::fs::File;
use std::str::FromStr;

use analysis::AnalysisSession;
use args::Args;
use chess::Square;
use clap::Parser;
use log::{debug, LevelFilter};
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let mut session = match &args.fen {
        Some(fen) => AnalysisSession::from_fen(fen).map_err(|e| e.to_string())?,
        None => AnalysisSession::new(),
    };

    let mut reports = Vec::new();
    for text in &args.moves {
        let mv = encoder::parse_move(text).ok_or_else(|| format!("invalid move: {}", text))?;
        debug!("playing {}", mv);

        match session.move_and_analyze(mv) {
            Some(effect) => reports.push(encoder::move_effect(&effect)),
            None => return Err(format!("illegal move: {}", text).into()),
        }
    }

    let output = match &args.square {
        Some(square) => {
            let square = Square::from_str(square).map_err(|e| e.to_string())?;
            match session.analyze_at(square) {
                Some(effect) => encoder::move_effect(&effect),
                None => serde_json::Value::Null,
            }
        }
        None => serde_json::json!({
            "moves": reports,
            "material": encoder::material(session.material()),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(log_file)?)?;
    }

    Ok(args)
}
