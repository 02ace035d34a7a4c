//! Space Scavenger entry point
//!
//! Loads assets, starts the background track, then alternates between the
//! menu and a play session until the menu reports quit.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use space_scavenger::ScoreBoard;
use space_scavenger::assets::Assets;
use space_scavenger::audio::AudioManager;
use space_scavenger::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use space_scavenger::game::Game;
use space_scavenger::menu::Menu;

fn window_conf() -> Conf {
    Conf {
        window_title: "Space Scavenger".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Space Scavenger starting...");

    // Route window-close through is_quit_requested so both screens can
    // observe it and unwind without finishing the frame.
    prevent_quit();

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("failed to load assets: {err:?}");
            std::process::exit(1);
        }
    };

    let audio = AudioManager::default();
    audio.start_music(&assets.music);

    let mut board = ScoreBoard::new();
    loop {
        let mut menu = Menu::new();
        if !menu.run(&board, &assets).await {
            break;
        }

        let seed = session_seed();
        log::info!("session started (seed {seed})");
        let mut game = Game::new(seed);
        game.run(&assets, &audio).await;

        let score = game.score();
        let retained = board.record(score);
        log::info!(
            "session over: score {score}{}",
            if retained { ", made the top scores" } else { "" }
        );
    }

    log::info!("quit requested, shutting down");
}
