use std::collections::HashSet;

use macroquad::math::{vec2, Rect, Vec2};
use thiserror::Error;

use crate::movement::rects_collide;

/// The board shipped with the game: `#` wall, `.` pellet, anything else
/// open floor. Rows must all be the same width.
pub const MAZE_LAYOUT: [&str; 13] = [
    "####################",
    "#........##........#",
    "#.####...##...####.#",
    "#..................#",
    "#.####.#.##.#.####.#",
    "#......#....#......#",
    "######.#.##.#.######",
    "     #.#.##.#.#     ",
    "######.#.##.#.######",
    "#........##........#",
    "#.####...##...####.#",
    "#......#....#......#",
    "####################",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,
    #[error("maze row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Wall geometry plus the remaining pellets. Walls are fixed at parse
/// time; the pellet set only ever shrinks.
#[derive(Debug)]
pub struct Maze {
    tile_size: f32,
    offset: Vec2,
    walls: Vec<Rect>,
    pellets: HashSet<(i32, i32)>,
}

impl Maze {
    pub fn parse(layout: &[&str], tile_size: f32, offset: Vec2) -> Result<Self, MazeError> {
        let width = layout
            .first()
            .map(|row| row.chars().count())
            .ok_or(MazeError::Empty)?;
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut walls = Vec::new();
        let mut pellets = HashSet::new();
        for (row, line) in layout.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let corner = offset + vec2(col as f32, row as f32) * tile_size;
                match ch {
                    '#' => walls.push(Rect::new(corner.x, corner.y, tile_size, tile_size)),
                    '.' => {
                        pellets.insert((col as i32, row as i32));
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            tile_size,
            offset,
            walls,
            pellets,
        })
    }

    /// Removes the pellet on `tile` if there is one. Returns whether a
    /// pellet was actually eaten, so the caller scores each at most once.
    pub fn eat_pellet(&mut self, tile: (i32, i32)) -> bool {
        self.pellets.remove(&tile)
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    pub fn pellets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pellets.iter().copied()
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn hits_wall(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| rects_collide(rect, wall))
    }

    /// Grid tile containing a pixel-space point.
    pub fn tile_at(&self, point: Vec2) -> (i32, i32) {
        (
            ((point.x - self.offset.x) / self.tile_size).floor() as i32,
            ((point.y - self.offset.y) / self.tile_size).floor() as i32,
        )
    }

    /// Pixel-space center of a grid tile.
    pub fn tile_center(&self, (col, row): (i32, i32)) -> Vec2 {
        self.offset + vec2(col as f32 + 0.5, row as f32 + 0.5) * self.tile_size
    }

    /// Pixel-space top-left corner of a grid tile.
    pub fn tile_origin(&self, (col, row): (i32, i32)) -> Vec2 {
        self.offset + vec2(col as f32, row as f32) * self.tile_size
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_maze(row: &'static str) -> Maze {
        Maze::parse(&[row], 32.0, vec2(0.0, 0.0)).expect("row parses")
    }

    #[test]
    fn classifies_walls_and_pellets_per_column() {
        let maze = row_maze("#.####...##...####.#");

        let wall_cols: Vec<i32> = maze.walls.iter().map(|w| (w.x / 32.0) as i32).collect();
        assert_eq!(wall_cols, vec![0, 2, 3, 4, 5, 9, 10, 14, 15, 16, 17, 19]);

        let mut pellet_cols: Vec<i32> = maze.pellets().map(|(col, _)| col).collect();
        pellet_cols.sort_unstable();
        assert_eq!(pellet_cols, vec![1, 6, 7, 8, 11, 12, 13, 18]);
        assert!(maze.pellets().all(|(_, row)| row == 0));
    }

    #[test]
    fn wall_rects_are_tile_sized_at_grid_corners() {
        let maze = Maze::parse(&["#."], 32.0, vec2(16.0, 48.0)).expect("parses");
        assert_eq!(maze.walls(), &[Rect::new(16.0, 48.0, 32.0, 32.0)]);
    }

    #[test]
    fn unknown_characters_are_open_floor() {
        let maze = row_maze("#x.");
        assert_eq!(maze.walls().len(), 1);
        assert_eq!(maze.pellets_remaining(), 1);
    }

    #[test]
    fn eat_pellet_is_idempotent_and_monotonic() {
        let mut maze = row_maze("...");
        assert_eq!(maze.pellets_remaining(), 3);

        assert!(maze.eat_pellet((1, 0)));
        assert_eq!(maze.pellets_remaining(), 2);
        assert!(!maze.eat_pellet((1, 0)));
        assert_eq!(maze.pellets_remaining(), 2);

        // A coordinate that never held a pellet is a no-op too.
        assert!(!maze.eat_pellet((7, 3)));
        assert_eq!(maze.pellets_remaining(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Maze::parse(&["##", "#"], 32.0, vec2(0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_layouts_are_rejected() {
        assert_eq!(Maze::parse(&[], 32.0, vec2(0.0, 0.0)).unwrap_err(), MazeError::Empty);
        assert_eq!(Maze::parse(&[""], 32.0, vec2(0.0, 0.0)).unwrap_err(), MazeError::Empty);
    }

    #[test]
    fn grid_pixel_conversions_invert_each_other() {
        let maze = Maze::parse(&MAZE_LAYOUT, 32.0, vec2(0.0, 32.0)).expect("bundled layout parses");
        let tile = (3, 5);
        assert_eq!(maze.tile_at(maze.tile_center(tile)), tile);
        assert_eq!(maze.tile_origin(tile), vec2(96.0, 192.0));
    }

    #[test]
    fn bundled_layout_is_rectangular() {
        let maze = Maze::parse(&MAZE_LAYOUT, 32.0, vec2(0.0, 0.0)).expect("bundled layout parses");
        assert!(maze.pellets_remaining() > 0);
        assert!(!maze.walls().is_empty());
    }
}
