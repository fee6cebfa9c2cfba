use macroquad::prelude::*;

mod config;
mod game;
mod ghost;
mod maze;
mod movement;
mod player;

use config::GameConfig;
use game::{GameSession, GameState, Input};
use ghost::Ghost;
use movement::Dir;
use player::Player;

const TITLE_FONT: f32 = 36.0;
const HUD_FONT: f32 = 18.0;
const PELLET_RADIUS: f32 = 4.0;

const WIN_FLASH_A: Color = GREEN;
const WIN_FLASH_B: Color = Color::new(0.0, 0.78, 0.78, 1.0);

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Muncher".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut session =
        GameSession::new(GameConfig::default()).expect("bundled maze layout is rectangular");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        poll_inputs(&mut session);
        session.update(get_frame_time());
        draw_session(&session);
        next_frame().await;
    }
}

fn poll_inputs(session: &mut GameSession) {
    if is_key_pressed(KeyCode::Space) {
        session.handle_input(Input::Start);
    }
    if is_key_pressed(KeyCode::R) {
        session.handle_input(Input::Restart);
    }
    for (key, dir) in [
        (KeyCode::Up, Dir::Up),
        (KeyCode::Down, Dir::Down),
        (KeyCode::Left, Dir::Left),
        (KeyCode::Right, Dir::Right),
    ] {
        if is_key_pressed(key) {
            session.handle_input(Input::Steer(dir));
        }
    }
}

fn draw_session(session: &GameSession) {
    clear_background(BLACK);
    let w = session.config.screen_width;
    let h = session.config.screen_height;

    match session.state {
        GameState::Start => {
            draw_centered_text("Muncher", w, h / 3.0, TITLE_FONT, YELLOW);
            draw_centered_text("Press SPACE to start", w, h / 2.0, HUD_FONT, WHITE);
        }
        GameState::Playing => {
            draw_board(session);
            draw_text(&format!("Score: {}", session.score), 10.0, 24.0, HUD_FONT, WHITE);
        }
        GameState::GameOver => {
            draw_board(session);
            let flash = if session.flash_on() { RED } else { YELLOW };
            draw_centered_text("Game Over!", w, h / 3.0, TITLE_FONT, flash);
            draw_end_screen_hud(session, w, h);
        }
        GameState::Win => {
            draw_board(session);
            let flash = if session.flash_on() { WIN_FLASH_A } else { WIN_FLASH_B };
            draw_centered_text("Congratulations, You Win!", w, h / 3.0, TITLE_FONT, flash);
            draw_end_screen_hud(session, w, h);
        }
    }
}

fn draw_end_screen_hud(session: &GameSession, w: f32, h: f32) {
    draw_centered_text("Press R to restart", w, h / 2.0, HUD_FONT, WHITE);
    draw_centered_text(
        &format!("Final Score: {}", session.score),
        w,
        h / 2.0 + 30.0,
        HUD_FONT,
        WHITE,
    );
}

fn draw_board(session: &GameSession) {
    let tile = session.config.tile_size;

    for wall in session.maze.walls() {
        draw_rectangle(wall.x, wall.y, wall.w, wall.h, BLUE);
    }
    for coord in session.maze.pellets() {
        let center = session.maze.tile_center(coord);
        draw_circle(center.x, center.y, PELLET_RADIUS, YELLOW);
    }

    draw_player(&session.player, tile);
    for ghost in &session.ghosts {
        draw_ghost(ghost, tile);
    }
}

fn draw_player(player: &Player, tile: f32) {
    let center = player.center(tile);
    let radius = tile / 2.0 - 2.0;
    draw_circle(center.x, center.y, radius, YELLOW);
    if player.mouth_open() {
        let [apex, lip_a, lip_b] = player.mouth_points(tile);
        draw_triangle(apex, lip_a, lip_b, BLACK);
    }
}

fn draw_ghost(ghost: &Ghost, tile: f32) {
    let center = ghost.position + Vec2::splat(tile / 2.0);
    draw_circle(center.x, center.y, tile / 2.0 - 2.0, ghost.color);
}

fn draw_centered_text(text: &str, screen_w: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_w - dims.width) / 2.0, y, font_size, color);
}
