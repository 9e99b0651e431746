/// All game entity types — pure data, no logic.
///
/// Coordinates are in canvas pixels (505 × 606).  The display layer projects
/// them onto the terminal grid; nothing in here knows about cells.

use crate::config::GameConfig;

// ── World geometry ───────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f64 = 505.0;
pub const CANVAS_HEIGHT: f64 = 606.0;

pub const UPPER_LIMIT: f64 = 50.0;
pub const LOWER_LIMIT: f64 = 380.0;
pub const LEFT_LIMIT: f64 = 0.0;
pub const RIGHT_LIMIT: f64 = 400.0;

pub const START_X: f64 = 200.0;
pub const START_Y: f64 = 380.0;

/// Where the player is parked after crossing (off the top of the canvas).
pub const WIN_Y: f64 = -40.0;

pub const STEP_X: f64 = 100.0;
pub const STEP_Y: f64 = 84.0;

/// Enemy travel rows.
pub const ENEMY_LANES_Y: [f64; 3] = [60.0, 140.0, 220.0];

/// Timer-spawned enemies enter from the left, off-canvas.
pub const ENEMY_SPAWN_X: f64 = -100.0;

/// Seeded enemies start somewhere in `[0, ENEMY_SEED_MAX_X)`.
pub const ENEMY_SEED_MAX_X: f64 = 420.0;

pub const HEART_FIRST_X: f64 = 420.0;
pub const HEART_SPACING: f64 = 30.0;
pub const HEART_Y: f64 = 0.0;
/// Hearts that fit between `HEART_FIRST_X` and the right edge.
pub const HEARTS_PER_ROW: usize = 3;
pub const HEART_ROW_SPACING: f64 = 30.0;
/// Two rows of hearts fit above the first enemy lane.
pub const MAX_LIVES: usize = HEARTS_PER_ROW * 2;

pub const LIVES_LABEL: &str = "Lives:";
pub const LIVES_LABEL_X: f64 = 350.0;
pub const LIVES_LABEL_Y: f64 = 30.0;

// ── Primitives ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Enemy,
    Heart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Something the world reports back from a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// An enemy box overlapped the player this tick.
    Collision,
    /// The last heart was lost.
    GameOver,
    EnemySpawned { y: f64, speed: f64 },
}

/// Position plus the sprite drawn there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub sprite: Sprite,
}

impl Entity {
    pub fn new(x: f64, y: f64, sprite: Sprite) -> Self {
        Entity { x, y, sprite }
    }
}

// ── Actors ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub entity: Entity,
}

impl Heart {
    pub fn new(x: f64, y: f64) -> Self {
        Heart { entity: Entity::new(x, y, Sprite::Heart) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub entity: Entity,
    /// Horizontal speed in pixels per second.
    pub speed: f64,
}

impl Enemy {
    pub fn new(x: f64, y: f64, speed: f64) -> Self {
        Enemy { entity: Entity::new(x, y, Sprite::Enemy), speed }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub entity: Entity,
    /// Front of the sequence is the next heart to go.
    pub lives: Vec<Heart>,
    /// Set when an enemy overlapped this tick; consumed by the player update.
    pub has_collided: bool,
    pub status: GameStatus,
}

impl Player {
    pub fn new(lives: Vec<Heart>) -> Self {
        Player {
            entity: Entity::new(START_X, START_Y, Sprite::Player),
            lives,
            has_collided: false,
            status: GameStatus::Playing,
        }
    }

    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn has_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The whole world.  Cloneable so the update functions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Unordered; insertion order carries no meaning.
    pub enemies: Vec<Enemy>,
    /// Simulated milliseconds since the last timer spawn.
    pub spawn_elapsed_ms: f64,
    pub frame: u64,
    pub config: GameConfig,
}
