//! Line-oriented playground for the keyboard core.
//!
//! Reads gesture commands from stdin and feeds them to the engine. Run with
//! `RUST_LOG=info` to see the playback requests of the `Log` backend stage.

use std::io::{self, BufRead};

use clap::Parser;
use flume::Receiver;
use ivories::{
    backend::Backends,
    keypress::{TouchPhase, TouchPoint},
    piano::{PianoEngine, PianoEngineSnapshot},
    profile::{BackendInfo, PianoProfile},
    AppError, AppResult,
};

#[derive(Parser)]
#[command(version, about = "Touch piano playground")]
struct IvoriesOptions {
    /// Location of the profile file
    #[arg(
        long = "profile",
        env = "IVORIES_PROFILE_LOCATION",
        default_value = "ivories.yml"
    )]
    profile_location: String,

    /// Initial surface width in px
    #[arg(long = "width", default_value_t = 700)]
    width: i32,

    /// Initial surface height in px
    #[arg(long = "height", default_value_t = 300)]
    height: i32,
}

fn main() -> AppResult<()> {
    env_logger::init();
    run(IvoriesOptions::parse())
}

fn run(options: IvoriesOptions) -> AppResult<()> {
    let profile = PianoProfile::load(&options.profile_location)?;

    let (info_send, info_recv) = flume::unbounded::<BackendInfo>();

    let mut backends = Backends::new();
    for stage in &profile.stages {
        stage.create(&info_send, &mut backends);
    }

    let (engine, mut snapshot) = PianoEngine::new(profile.num_white_keys, backends);
    engine.handle_resize(options.width, options.height);

    print_backend_info(&info_recv);
    println!("Commands: press|move|release [x y ...], resize <w> <h>, show, exit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;

        match handle_command(&engine, &mut snapshot, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(AppError::CommandError(message)) => println!("{message}"),
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn handle_command(
    engine: &PianoEngine,
    snapshot: &mut PianoEngineSnapshot,
    line: &str,
) -> AppResult<bool> {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        None => {}
        Some("press") => engine.handle_touch_batch(&parse_points(tokens)?, TouchPhase::Pressed),
        Some("move") => engine.handle_touch_batch(&parse_points(tokens)?, TouchPhase::Moved),
        Some("release") => engine.handle_touch_batch(&parse_points(tokens)?, TouchPhase::Released),
        Some("resize") => {
            let width = parse_number(tokens.next())?;
            let height = parse_number(tokens.next())?;
            engine.handle_resize(width, height);
        }
        Some("show") => {
            engine.take_snapshot(snapshot);
            print_board(snapshot);
        }
        Some("exit" | "quit") => return Ok(false),
        Some(other) => println!("Unknown command `{other}`. Try press/move/release/resize/show/exit."),
    }

    Ok(true)
}

fn parse_points<'a>(tokens: impl Iterator<Item = &'a str>) -> AppResult<Vec<TouchPoint>> {
    let coords = tokens
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|err| AppError::CommandError(format!("Invalid coordinate `{token}`: {err}")))
        })
        .collect::<AppResult<Vec<_>>>()?;

    if coords.len() % 2 != 0 {
        return Err(AppError::CommandError(
            "Expected an even number of coordinates".to_owned(),
        ));
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| TouchPoint {
            x: pair[0],
            y: pair[1],
        })
        .collect())
}

fn parse_number(token: Option<&str>) -> AppResult<i32> {
    let token = token.ok_or_else(|| AppError::CommandError("Expected <width> <height>".to_owned()))?;
    token
        .parse()
        .map_err(|err| AppError::CommandError(format!("Invalid size `{token}`: {err}")))
}

fn print_backend_info(info_recv: &Receiver<BackendInfo>) {
    for info in info_recv.try_iter() {
        println!("Backend: {info:?}");
    }
}

fn print_board(snapshot: &PianoEngineSnapshot) {
    let layout = &snapshot.layout;
    if layout.num_keys() == 0 {
        println!("(no keys: surface too small)");
        return;
    }

    let mut black_keys = layout.black_keys().iter();
    let mut upper_row = String::new();
    let mut lower_row = String::new();

    for (i, white) in layout.white_keys().iter().enumerate() {
        if i % 7 != 0 && i % 7 != 3 {
            if let Some(black) = black_keys.next() {
                let marker = if snapshot.tracker.is_pressed(black.note) {
                    '*'
                } else {
                    '#'
                };
                upper_row.pop();
                upper_row.push(marker);
            }
        }
        upper_row.push_str("   ");

        lower_row.push('[');
        lower_row.push(if snapshot.tracker.is_pressed(white.note) {
            '#'
        } else {
            ' '
        });
        lower_row.push(']');
    }

    println!("{upper_row}");
    println!("{lower_row}");
    match snapshot.tracker.active_note() {
        Some(note) => println!("Active note: {}", note.number()),
        None => println!("Active note: (silence)"),
    }
}
