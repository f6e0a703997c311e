//! All game entity types: plain data plus the one-step bullet advance.

use crate::difficulty::{Difficulty, Preset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Player move intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Shared horizontal direction of the whole enemy formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepDirection {
    Left,
    Right,
}

impl SweepDirection {
    pub fn flipped(self) -> Self {
        match self {
            SweepDirection::Left => SweepDirection::Right,
            SweepDirection::Right => SweepDirection::Left,
        }
    }

    /// Sign applied to the enemy speed.
    pub fn sign(self) -> f64 {
        match self {
            SweepDirection::Left => -1.0,
            SweepDirection::Right => 1.0,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub owner: BulletOwner,
    /// Rows per tick. Negative travels up (player), positive down (enemy).
    pub velocity: f64,
}

impl Bullet {
    pub fn advance(&mut self) {
        self.y += self.velocity;
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

/// Player ship, `width` cells wide and centred on `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl Player {
    pub const WIDTH: i32 = 3;

    pub fn half_width(&self) -> i32 {
        self.width / 2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole game world for one session. Cloneable so the update functions
/// in `compute` can return a new copy without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub lives: u32,
    pub status: GameStatus,
    pub width: i32,
    pub height: i32,
    /// Ticks simulated so far; diagnostics only.
    pub frame: u64,
    pub sweep: SweepDirection,
    pub difficulty: Difficulty,
    pub preset: Preset,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
