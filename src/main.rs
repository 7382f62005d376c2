//! Headless demo: runs the autopilot until the tower topples or the frame
//! budget runs out, logging every event.
//!
//! Usage: `stack-tower [settings.json]` (set `RUST_LOG=debug` for per-layer logs)

use std::process::ExitCode;

use stack_tower::Settings;
use stack_tower::consts::SIM_DT;
use stack_tower::sim::{GameCore, GameEvent, TickInput, step};

/// Two minutes of simulated play
const MAX_FRAMES: u32 = 60 * 120;

fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let settings = Settings::from_json(&json)?;
            log::info!("Loaded settings from {}", path);
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Stack Tower (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut game = match GameCore::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for frame in 0..MAX_FRAMES {
        step(&mut game, &input, SIM_DT);

        for event in game.drain_events() {
            match event {
                GameEvent::PiecePlaced { piece } => log::debug!(
                    "frame {}: placed {:.3} x {:.3} at ({:.3}, {:.3}), top face {:.3}, color #{:06X}",
                    frame,
                    piece.size.x,
                    piece.size.z,
                    piece.center.x,
                    piece.center.z,
                    piece.top_y(),
                    piece.color.to_rgb_u32()
                ),
                GameEvent::DebrisSpawned { piece, .. } => log::debug!(
                    "frame {}: debris {:.3} x {:.3} (area {:.4})",
                    frame,
                    piece.size.x,
                    piece.size.z,
                    piece.footprint_area()
                ),
                GameEvent::GameOver { final_score } => {
                    log::info!("frame {}: game over", frame);
                    println!("Final score: {}", final_score);
                }
            }
        }

        if game.is_game_over() {
            return ExitCode::SUCCESS;
        }
    }

    let top = game.tower().top();
    println!(
        "Score after {} frames: {} (top footprint {:.3} x {:.3}, area {:.4})",
        MAX_FRAMES,
        game.score(),
        top.size.x,
        top.size.z,
        top.footprint_area()
    );
    ExitCode::SUCCESS
}
