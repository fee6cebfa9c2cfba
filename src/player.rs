use macroquad::math::{Rect, Vec2};

use crate::config::GameConfig;
use crate::maze::Maze;
use crate::movement::{advance, Dir};

pub struct Player {
    pub position: Vec2,
    pub dir: Dir,
    speed: f32,
    buffered: Option<Dir>,
    mouth_open: bool,
    mouth_timer: f32,
    mouth_interval: f32,
    turn_threshold: f32,
}

impl Player {
    pub fn new(position: Vec2, config: &GameConfig) -> Self {
        Self {
            position,
            dir: Dir::Right,
            speed: config.player_speed,
            buffered: None,
            mouth_open: true,
            mouth_timer: 0.0,
            mouth_interval: config.mouth_interval,
            turn_threshold: config.turn_threshold,
        }
    }

    /// Records a requested turn. The newest request wins; it stays
    /// buffered until it can actually be applied.
    pub fn buffer_direction(&mut self, dir: Dir) {
        self.buffered = Some(dir);
    }

    /// Applies the buffered turn only when the player sits close enough
    /// to a tile center and the turn target is unobstructed. Turning
    /// mid-tile would let the box cut corners through walls.
    fn try_apply_buffered_direction(&mut self, maze: &Maze, dt: f32) {
        let Some(next) = self.buffered else {
            return;
        };
        let center = self.center(maze.tile_size());
        let tile_center = maze.tile_center(maze.tile_at(center));
        if center.distance(tile_center) >= self.turn_threshold {
            return;
        }
        if advance(self.position, next, self.speed, dt, maze).is_some() {
            self.dir = next;
            self.buffered = None;
        }
    }

    pub fn update(&mut self, dt: f32, maze: &Maze) {
        self.try_apply_buffered_direction(maze, dt);

        if let Some(next) = advance(self.position, self.dir, self.speed, dt, maze) {
            self.position = next;
        }

        self.mouth_timer += dt;
        if self.mouth_timer >= self.mouth_interval {
            self.mouth_open = !self.mouth_open;
            self.mouth_timer = 0.0;
        }
    }

    pub fn center(&self, tile_size: f32) -> Vec2 {
        self.position + Vec2::splat(tile_size / 2.0)
    }

    pub fn bounding_box(&self, tile_size: f32) -> Rect {
        Rect::new(self.position.x, self.position.y, tile_size, tile_size)
    }

    pub fn mouth_open(&self) -> bool {
        self.mouth_open
    }

    /// Wedge cut out of the body circle when the mouth is open, oriented
    /// along the current travel direction.
    pub fn mouth_points(&self, tile_size: f32) -> [Vec2; 3] {
        let center = self.center(tile_size);
        let radius = tile_size / 2.0 - 2.0;
        let forward = self.dir.vector();
        let side = Vec2::new(-forward.y, forward.x);
        [
            center,
            center + forward * radius - side * (radius / 2.0),
            center + forward * radius + side * (radius / 2.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MAZE_LAYOUT;
    use macroquad::math::vec2;

    const DT: f32 = 1.0 / 60.0;

    fn maze() -> Maze {
        Maze::parse(&MAZE_LAYOUT, 32.0, vec2(0.0, 32.0)).expect("bundled layout parses")
    }

    fn player_at_tile(maze: &Maze, tile: (i32, i32)) -> Player {
        Player::new(maze.tile_origin(tile), &GameConfig::default())
    }

    #[test]
    fn buffered_turn_applies_at_tile_center_when_open() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 1));
        player.buffer_direction(Dir::Down);

        player.update(DT, &maze);

        assert_eq!(player.dir, Dir::Down);
        assert!(player.buffered.is_none());
    }

    #[test]
    fn buffered_turn_waits_while_off_center() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 3));
        player.position += vec2(8.0, 0.0);
        player.buffer_direction(Dir::Down);

        player.update(DT, &maze);

        assert_eq!(player.dir, Dir::Right);
        assert_eq!(player.buffered, Some(Dir::Down));
    }

    #[test]
    fn buffered_turn_waits_while_blocked_by_wall() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 1));
        player.buffer_direction(Dir::Up);

        player.update(DT, &maze);

        assert_eq!(player.dir, Dir::Right);
        assert_eq!(player.buffered, Some(Dir::Up));
    }

    #[test]
    fn blocked_player_stays_put() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 1));
        player.dir = Dir::Left;
        let before = player.position;

        player.update(DT, &maze);

        assert_eq!(player.position, before);
    }

    #[test]
    fn mouth_toggles_on_the_animation_interval() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 1));
        player.dir = Dir::Left; // pinned against a wall so only the timer advances

        assert!(player.mouth_open());
        player.update(0.1, &maze);
        assert!(player.mouth_open());
        player.update(0.1, &maze);
        assert!(!player.mouth_open());
        player.update(0.2, &maze);
        assert!(player.mouth_open());
    }

    #[test]
    fn mouth_points_follow_direction() {
        let maze = maze();
        let mut player = player_at_tile(&maze, (1, 1));
        let center = player.center(32.0);

        player.dir = Dir::Up;
        let [apex, a, b] = player.mouth_points(32.0);
        assert_eq!(apex, center);
        assert!(a.y < center.y && b.y < center.y);

        player.dir = Dir::Right;
        let [_, a, b] = player.mouth_points(32.0);
        assert!(a.x > center.x && b.x > center.x);
        assert_eq!(a.x, b.x);
    }
}
