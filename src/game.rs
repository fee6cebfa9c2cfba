use log::debug;
use macroquad::math::{vec2, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::ghost::{Ghost, GHOST_COLORS};
use crate::maze::{Maze, MazeError};
use crate::movement::{rects_collide, Dir};
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
    Win,
}

/// Discrete inputs the session understands. Key codes are mapped to
/// these upstream; anything unrecognized never reaches the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Start,
    Steer(Dir),
    Restart,
}

pub struct GameSession {
    pub config: GameConfig,
    pub state: GameState,
    pub score: u32,
    pub maze: Maze,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    /// Free-running clock driving the end-screen flash. Cosmetic only.
    state_timer: f32,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (maze, player, ghosts) = build_board(&config, &mut rng)?;
        Ok(Self {
            config,
            state: GameState::Start,
            score: 0,
            maze,
            player,
            ghosts,
            state_timer: 0.0,
            rng,
        })
    }

    /// Rebuilds maze, player, and ghosts and zeroes the score. The only
    /// place entity identities change after construction.
    pub fn reset(&mut self) {
        let (maze, player, ghosts) =
            build_board(&self.config, &mut self.rng).expect("layout validated at construction");
        self.maze = maze;
        self.player = player;
        self.ghosts = ghosts;
        self.score = 0;
        debug!("session reset: {} pellets", self.maze.pellets_remaining());
    }

    pub fn handle_input(&mut self, input: Input) {
        match (self.state, input) {
            (GameState::Start, Input::Start) => self.enter_playing(),
            (GameState::Playing, Input::Steer(dir)) => self.player.buffer_direction(dir),
            (GameState::GameOver | GameState::Win, Input::Restart) => self.enter_playing(),
            _ => {}
        }
    }

    fn enter_playing(&mut self) {
        self.reset();
        self.state = GameState::Playing;
        self.state_timer = 0.0;
        debug!("state -> playing");
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            GameState::Playing => self.tick(dt),
            GameState::GameOver | GameState::Win => self.state_timer += dt,
            GameState::Start => {}
        }
    }

    fn tick(&mut self, dt: f32) {
        self.player.update(dt, &self.maze);
        for ghost in &mut self.ghosts {
            ghost.update(dt, &self.maze, &mut self.rng);
        }

        let tile = self.maze.tile_at(self.player.center(self.config.tile_size));
        if self.maze.eat_pellet(tile) {
            self.score += 10;
            debug!("pellet at {tile:?}, score {}", self.score);
        }

        if self.maze.pellets_remaining() == 0 {
            self.state = GameState::Win;
            self.state_timer = 0.0;
            debug!("state -> win, score {}", self.score);
            return;
        }

        let player_box = self.player.bounding_box(self.config.tile_size);
        for ghost in &self.ghosts {
            if rects_collide(&player_box, &ghost.bounding_box(self.config.tile_size)) {
                self.state = GameState::GameOver;
                self.state_timer = 0.0;
                debug!("state -> game over, score {}", self.score);
                break;
            }
        }
    }

    /// Two-phase end-screen flash; toggles `flash_rate` times per second.
    pub fn flash_on(&self) -> bool {
        (self.state_timer * self.config.flash_rate) as i32 % 2 == 0
    }
}

fn build_board(config: &GameConfig, rng: &mut StdRng) -> Result<(Maze, Player, Vec<Ghost>), MazeError> {
    let offset = board_offset(config);
    let maze = Maze::parse(config.layout, config.tile_size, offset)?;
    let player = Player::new(maze.tile_origin(config.player_spawn), config);
    let ghosts = config
        .ghost_spawns
        .iter()
        .zip(GHOST_COLORS)
        .map(|(&tile, color)| Ghost::new(maze.tile_origin(tile), color, config, rng))
        .collect();
    Ok((maze, player, ghosts))
}

/// Centers the board on the screen, on whole pixels.
fn board_offset(config: &GameConfig) -> Vec2 {
    let rows = config.layout.len() as f32;
    let cols = config
        .layout
        .first()
        .map(|row| row.chars().count())
        .unwrap_or(0) as f32;
    vec2(
        ((config.screen_width - cols * config.tile_size) / 2.0).floor(),
        ((config.screen_height - rows * config.tile_size) / 2.0).floor(),
    )
}
