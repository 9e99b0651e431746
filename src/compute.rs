/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and logging.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Direction, Enemy, GameEvent, GameState, GameStatus, Heart, Player, ENEMY_LANES_Y,
    ENEMY_SEED_MAX_X, ENEMY_SPAWN_X, HEARTS_PER_ROW, HEART_FIRST_X, HEART_ROW_SPACING,
    HEART_SPACING, HEART_Y, LEFT_LIMIT, LOWER_LIMIT, RIGHT_LIMIT, START_X, START_Y, STEP_X, STEP_Y, UPPER_LIMIT, WIN_Y,
};

// ── Bounding boxes ───────────────────────────────────────────────────────────

/// Player sprite footprint measured from its origin.
const PLAYER_BOX_W: f64 = 70.0;
const PLAYER_BOX_H: f64 = 85.0;
/// Enemy sprite footprint measured from its origin.
const ENEMY_BOX_W: f64 = 100.0;
const ENEMY_BOX_H: f64 = 60.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// `count` hearts laid out left to right along the top edge, wrapping onto a
/// second row once the first is full.
pub fn create_hearts(count: usize) -> Vec<Heart> {
    (0..count)
        .map(|i| {
            let (row, col) = (i / HEARTS_PER_ROW, i % HEARTS_PER_ROW);
            Heart::new(
                HEART_FIRST_X + HEART_SPACING * col as f64,
                HEART_Y + HEART_ROW_SPACING * row as f64,
            )
        })
        .collect()
}

/// Lane y-coordinate drawn only from the valid lanes.
fn random_lane(rng: &mut impl Rng) -> f64 {
    ENEMY_LANES_Y[rng.gen_range(0..ENEMY_LANES_Y.len())]
}

fn random_speed(config: &GameConfig, rng: &mut impl Rng) -> f64 {
    rng.gen_range(config.speed_min..config.speed_max)
}

/// Seed the opening enemies so the screen does not begin empty.
pub fn create_enemies(config: &GameConfig, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..config.initial_enemies)
        .map(|_| {
            let x = rng.gen_range(0.0..ENEMY_SEED_MAX_X);
            let y = random_lane(rng);
            Enemy::new(x, y, random_speed(config, rng))
        })
        .collect()
}

/// A timer-spawned enemy entering from the left edge.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let y = random_lane(rng);
    Enemy::new(ENEMY_SPAWN_X, y, random_speed(config, rng))
}

/// Build the initial world for a given configuration.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let player = Player::new(create_hearts(config.lives));
    let enemies = create_enemies(&config, rng);
    GameState {
        player,
        enemies,
        spawn_elapsed_ms: 0.0,
        frame: 0,
        config,
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// True when a heart will remain after the current one is spent.  Checked at
/// collision time, before the pending heart is removed.
pub fn still_have_hearts(player: &Player) -> bool {
    player.lives.len() > 1
}

/// Consume a pending collision: back to the start, one heart fewer.
pub fn update_player(player: &Player) -> Player {
    if !player.has_collided {
        return player.clone();
    }
    let mut next = player.clone();
    next.entity.x = START_X;
    next.entity.y = START_Y;
    next.has_collided = false;
    if !next.lives.is_empty() {
        next.lives.remove(0);
    }
    next
}

/// Back to the start with a fresh set of `lives` hearts, no pending
/// collision and no terminal status.
pub fn reset_player(lives: usize) -> Player {
    Player::new(create_hearts(lives))
}

/// Apply one directional input.  No-op once the game is won or lost.
pub fn handle_input(state: &GameState, direction: Direction) -> GameState {
    if !state.player.is_playing() {
        return state.clone();
    }
    let mut player = state.player.clone();
    let pos = &mut player.entity;
    match direction {
        Direction::Up => {
            if pos.y > UPPER_LIMIT {
                pos.y -= STEP_Y;
            } else {
                pos.y = WIN_Y;
                player.status = GameStatus::Won;
                info!("player reached the goal on frame {}", state.frame);
            }
        }
        Direction::Down => pos.y = (pos.y + STEP_Y).min(LOWER_LIMIT),
        Direction::Left => pos.x = (pos.x - STEP_X).max(LEFT_LIMIT),
        Direction::Right => pos.x = (pos.x + STEP_X).min(RIGHT_LIMIT),
    }
    GameState {
        player,
        ..state.clone()
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

/// Fixed-size box overlap between an enemy and the player.
pub fn overlaps(enemy: &Enemy, player: &Player) -> bool {
    let (e, p) = (&enemy.entity, &player.entity);
    p.x + PLAYER_BOX_W > e.x
        && p.x < e.x + ENEMY_BOX_W
        && p.y + PLAYER_BOX_H > e.y
        && p.y < e.y + ENEMY_BOX_H
}

/// Advance one enemy by `dt` seconds and test it against the player.
///
/// The enemy never touches the player: a hit comes back as an event for the
/// caller to apply.  Nothing is reported while the player is won or lost.
pub fn step_enemy(enemy: &Enemy, player: &Player, dt: f64) -> (Enemy, Option<GameEvent>) {
    let mut moved = enemy.clone();
    moved.entity.x += enemy.speed * dt;
    let event = if player.is_playing() && overlaps(&moved, player) {
        Some(GameEvent::Collision)
    } else {
        None
    };
    (moved, event)
}

// ── World transitions ────────────────────────────────────────────────────────

/// Mark the game as lost.
pub fn game_over(state: &GameState) -> (GameState, GameEvent) {
    info!("game over on frame {}", state.frame);
    let mut player = state.player.clone();
    player.status = GameStatus::Lost;
    (
        GameState {
            player,
            ..state.clone()
        },
        GameEvent::GameOver,
    )
}

/// Start another round: fresh hearts, player back at the start, enemies kept.
pub fn play_again(state: &GameState) -> GameState {
    info!("play again with {} lives", state.config.lives);
    GameState {
        player: reset_player(state.config.lives),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, dt: f64, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    let config = &state.config;
    let mut events = Vec::new();

    // ── 1. Timer-driven spawn ────────────────────────────────────────────────
    let interval = config.spawn_interval_ms as f64;
    let mut spawn_elapsed_ms = state.spawn_elapsed_ms + dt * 1000.0;
    let mut enemies = state.enemies.clone();
    while spawn_elapsed_ms >= interval {
        spawn_elapsed_ms -= interval;
        let enemy = spawn_enemy(config, rng);
        debug!("spawned enemy in lane y={} at {:.1} px/s", enemy.entity.y, enemy.speed);
        events.push(GameEvent::EnemySpawned {
            y: enemy.entity.y,
            speed: enemy.speed,
        });
        enemies.push(enemy);
    }

    // ── 2. Move enemies and collect hits ─────────────────────────────────────
    let mut collided = false;
    let enemies: Vec<Enemy> = enemies
        .iter()
        .map(|e| {
            let (moved, hit) = step_enemy(e, &state.player, dt);
            collided |= hit.is_some();
            moved
        })
        .collect();

    // ── 3. Apply the hit centrally (at most once per tick) ───────────────────
    let mut next = GameState {
        enemies,
        spawn_elapsed_ms,
        frame: state.frame + 1,
        ..state.clone()
    };
    if collided {
        debug!("collision with {} lives left", next.player.lives.len());
        next.player.has_collided = true;
        events.push(GameEvent::Collision);
        if !still_have_hearts(&next.player) {
            let (lost, event) = game_over(&next);
            next = lost;
            events.push(event);
        }
    }

    // ── 4. Player consumes the collision ─────────────────────────────────────
    next.player = update_player(&next.player);

    // ── 5. Drop enemies that have left the canvas ────────────────────────────
    let despawn_x = config.despawn_x;
    next.enemies.retain(|e| e.entity.x <= despawn_x);

    (next, events)
}
