//! Circle Cut entry point
//!
//! Native replay tool: loads a board, feeds recorded strokes through the
//! frame loop and prints the final board snapshot as JSON.
//!
//! Usage: `circle-cut [board.json] [strokes.json] [settings.json]`
//! Strokes are `[[x1, y1, x2, y2], ...]` in world coordinates.

use std::path::Path;
use std::process::ExitCode;

use glam::DVec2;

use circle_cut::sim::{Board, CircleDef, GameEvent, GameState, Segment, TickInput, tick};
use circle_cut::{PlayerIdentity, Session, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Circle Cut (native) starting...");

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let board = match args.first() {
        Some(path) => Board::from_json(&std::fs::read_to_string(path)?)?,
        None => demo_board()?,
    };
    let strokes = match args.get(1) {
        Some(path) => load_strokes(Path::new(path))?,
        None => demo_strokes(),
    };
    let settings = match args.get(2) {
        Some(path) => Settings::load(Path::new(path)),
        None => Settings::default(),
    };

    log::info!(
        "Board loaded: {} circles, {} arcs to cut",
        board.circles().count(),
        board.total_count()
    );

    let mut session = Session::new(PlayerIdentity::guest());
    let mut state = GameState::new(board, &settings);

    for segment in strokes {
        for event in tick(&mut state, &TickInput::stroke(segment))? {
            match event {
                GameEvent::Cut { hits } => {
                    log::info!("Cut {hits} ({}%)", state.board.progress_label())
                }
                GameEvent::Foul { lives_left } => log::warn!("Foul! {lives_left} lives left"),
                other => log::info!("{other:?}"),
            }
        }
        if state.phase.is_terminal() {
            break;
        }
    }

    let summary = session.record(1, &state);
    log::info!("Run finished: {summary:?}");
    println!("{}", serde_json::to_string_pretty(&state.board.snapshot())?);
    Ok(())
}

fn load_strokes(path: &Path) -> Result<Vec<Segment>, Box<dyn std::error::Error>> {
    let raw: Vec<[f64; 4]> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(raw
        .into_iter()
        .map(|[x1, y1, x2, y2]| Segment::new(DVec2::new(x1, y1), DVec2::new(x2, y2)))
        .collect())
}

/// Two overlapping circles
fn demo_board() -> Result<Board, circle_cut::BoardError> {
    Board::from_defs(&[CircleDef::new(0.0, 0.0, 50.0), CircleDef::new(60.0, 0.0, 50.0)])
}

/// One stroke per overlap arc
fn demo_strokes() -> Vec<Segment> {
    vec![
        Segment::new(DVec2::new(45.0, 0.0), DVec2::new(55.0, 0.0)),
        Segment::new(DVec2::new(5.0, 0.0), DVec2::new(15.0, 0.0)),
    ]
}
