use crate::maze::MAZE_LAYOUT;

/// Tunables for one game session. Constructors take this instead of
/// reading process-wide constants, so tests can shrink the board or pin
/// the RNG seed.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub tile_size: f32,
    pub player_speed: f32,
    pub ghost_speed: f32,
    /// Seconds between mouth open/close toggles.
    pub mouth_interval: f32,
    /// Seconds between ghost direction rerolls.
    pub redirect_interval: f32,
    /// Max distance (px) from a tile center at which a buffered turn may apply.
    pub turn_threshold: f32,
    /// End-screen flash toggles per second.
    pub flash_rate: f32,
    pub layout: &'static [&'static str],
    /// Grid tile the player starts on.
    pub player_spawn: (i32, i32),
    pub ghost_spawns: [(i32, i32); 4],
    /// Fixed seed for the wandering RNG; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640.0,
            screen_height: 480.0,
            tile_size: 32.0,
            player_speed: 100.0,
            ghost_speed: 80.0,
            mouth_interval: 0.2,
            redirect_interval: 1.0,
            turn_threshold: 4.0,
            flash_rate: 3.0,
            layout: &MAZE_LAYOUT,
            player_spawn: (1, 1),
            ghost_spawns: [(10, 5), (9, 5), (10, 6), (9, 6)],
            rng_seed: None,
        }
    }
}
