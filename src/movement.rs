use macroquad::math::{vec2, Rect, Vec2};

use crate::maze::Maze;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn vector(self) -> Vec2 {
        match self {
            Dir::Up => vec2(0.0, -1.0),
            Dir::Down => vec2(0.0, 1.0),
            Dir::Left => vec2(-1.0, 0.0),
            Dir::Right => vec2(1.0, 0.0),
        }
    }
}

/// Strict AABB intersection. Edge contact is not a collision, so a
/// tile-sized entity can run flush along a corridor one tile wide.
pub fn rects_collide(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// One tick of movement for a tile-sized entity at `pos` (top-left of
/// its box). Returns the accepted candidate position, or `None` when the
/// candidate box would clip a wall and the entity should stay put.
///
/// This is a discrete per-tick test: a large enough `speed * dt` can
/// step clean over a thin wall.
pub fn advance(pos: Vec2, dir: Dir, speed: f32, dt: f32, maze: &Maze) -> Option<Vec2> {
    let candidate = pos + dir.vector() * speed * dt;
    let size = maze.tile_size();
    if maze.hits_wall(&Rect::new(candidate.x, candidate.y, size, size)) {
        None
    } else {
        Some(candidate)
    }
}
