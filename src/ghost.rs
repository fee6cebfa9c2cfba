use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::maze::Maze;
use crate::movement::{advance, Dir};

pub const GHOST_COLORS: [Color; 4] = [
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(1.0, 0.72, 1.0, 1.0),
    Color::new(0.0, 1.0, 1.0, 1.0),
    Color::new(1.0, 0.72, 0.32, 1.0),
];

/// A wandering enemy. No pathing: direction changes come from a timer
/// and from bumping into walls, nothing else.
pub struct Ghost {
    pub position: Vec2,
    pub color: Color,
    dir: Dir,
    speed: f32,
    redirect_timer: f32,
    redirect_interval: f32,
}

impl Ghost {
    pub fn new(position: Vec2, color: Color, config: &GameConfig, rng: &mut impl Rng) -> Self {
        Self {
            position,
            color,
            dir: random_dir(rng),
            speed: config.ghost_speed,
            redirect_timer: 0.0,
            redirect_interval: config.redirect_interval,
        }
    }

    pub fn update(&mut self, dt: f32, maze: &Maze, rng: &mut impl Rng) {
        self.redirect_timer += dt;
        if self.redirect_timer >= self.redirect_interval {
            self.dir = random_dir(rng);
            self.redirect_timer = 0.0;
        }

        match advance(self.position, self.dir, self.speed, dt, maze) {
            Some(next) => self.position = next,
            // Reroll against the wall; the new pick may hit it again next
            // tick, which just means another reroll.
            None => self.dir = random_dir(rng),
        }
    }

    pub fn bounding_box(&self, tile_size: f32) -> Rect {
        Rect::new(self.position.x, self.position.y, tile_size, tile_size)
    }
}

fn random_dir(rng: &mut impl Rng) -> Dir {
    *Dir::ALL.choose(rng).unwrap()
}
