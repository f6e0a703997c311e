/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, for `tick`, an RNG handle) and returns a brand-new
/// `GameState`. Side effects are limited to the injected RNG.

use log::{debug, info, trace};
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::entities::{
    Bullet, BulletOwner, Direction, Enemy, GameState, GameStatus, Player, SweepDirection,
};

// ── Formation layout ─────────────────────────────────────────────────────────

const SPACING_X: i32 = 6;
const SPACING_Y: i32 = 2;
/// Row of the first enemy line.
const WAVE_TOP: i32 = 3;

/// Columns in every wave.
pub const WAVE_COLUMNS: usize = 8;
/// Score awarded per enemy destroyed.
pub const SCORE_PER_ENEMY: u32 = 10;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Lay out a `rows` × `cols` grid of enemies, horizontally centred in a
/// field `width` columns wide. Row-major order.
pub fn spawn_enemies(rows: usize, cols: usize, width: i32) -> Vec<Enemy> {
    let start_x = (width - cols as i32 * SPACING_X) / 2;

    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| Enemy {
                x: f64::from(start_x + col as i32 * SPACING_X),
                y: f64::from(WAVE_TOP + row as i32 * SPACING_Y),
            })
        })
        .collect()
}

/// Build the initial game state for a difficulty and field size.
pub fn init_state(difficulty: Difficulty, width: i32, height: i32) -> GameState {
    let preset = difficulty.preset();
    GameState {
        player: Player {
            x: width / 2,
            y: height - 2,
            width: Player::WIDTH,
        },
        enemies: spawn_enemies(preset.rows, WAVE_COLUMNS, width),
        bullets: Vec::new(),
        score: 0,
        lives: preset.lives,
        status: GameStatus::Playing,
        width,
        height,
        frame: 0,
        sweep: SweepDirection::Right,
        difficulty,
        preset,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Shift the player by the preset speed, keeping the whole ship inside
/// columns `2..=width - 3`.
pub fn move_player(state: &GameState, direction: Direction) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let step = state.preset.player_speed;
    let x = match direction {
        Direction::Left => state.player.x - step,
        Direction::Right => state.player.x + step,
    };
    let max_x = (state.width - 3).max(2);
    GameState {
        player: Player {
            x: x.clamp(2, max_x),
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a bullet straight up from just above the player.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: f64::from(state.player.x),
        y: f64::from(state.player.y - 1),
        owner: BulletOwner::Player,
        velocity: -state.preset.bullet_speed,
    });
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-frame tick (pure apart from the injected RNG) ──────────────────────────

/// Advance the simulation by one tick. All randomness comes through `rng`
/// so callers control determinism (tests use a seeded or mock RNG).
///
/// A game that is already over comes back unchanged. A tick that ends the
/// game part way through still runs to completion.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    let mut next = state.clone();
    let preset = next.preset;
    next.frame += 1;

    // ── 1. Sweep the formation; each enemy may fire right after it moves ────
    let dx = next.sweep.sign() * preset.enemy_speed;
    let right_edge = f64::from(next.width - 2);
    let fire_probability = preset.fire_probability();
    let mut reverse = false;

    for enemy in &mut next.enemies {
        enemy.x += dx;
        if enemy.x <= 0.0 || enemy.x >= right_edge {
            reverse = true;
        }
        if rng.gen::<f64>() < fire_probability {
            next.bullets.push(Bullet {
                x: enemy.x,
                y: enemy.y + 1.0,
                owner: BulletOwner::Enemy,
                velocity: preset.bullet_speed,
            });
        }
    }

    // ── 2. Reverse and descend one row ──────────────────────────────────────
    if reverse {
        next.sweep = next.sweep.flipped();
        for enemy in &mut next.enemies {
            enemy.y += 1.0;
        }
        trace!("frame {}: formation now sweeping {:?}", next.frame, next.sweep);

        let player_y = f64::from(next.player.y);
        if next.enemies.iter().any(|e| e.y >= player_y) {
            next.status = GameStatus::GameOver;
        }
    }

    // ── 3. Move bullets, discard those that leave the field ─────────────────
    let height = f64::from(next.height);
    next.bullets = std::mem::take(&mut next.bullets)
        .into_iter()
        .filter_map(|mut b| {
            b.advance();
            (b.y >= 0.0 && b.y < height).then_some(b)
        })
        .collect();

    // ── 4. Collisions, in bullet order ──────────────────────────────────────
    let mut enemy_alive = vec![true; next.enemies.len()];
    let mut bullet_alive = vec![true; next.bullets.len()];

    for (bi, bullet) in next.bullets.iter().enumerate() {
        match bullet.owner {
            BulletOwner::Player => {
                let hit = next
                    .enemies
                    .iter()
                    .enumerate()
                    .position(|(ei, enemy)| enemy_alive[ei] && hits_enemy(bullet, enemy));
                if let Some(ei) = hit {
                    enemy_alive[ei] = false;
                    bullet_alive[bi] = false;
                    next.score = next.score.saturating_add(SCORE_PER_ENEMY);
                }
            }
            BulletOwner::Enemy => {
                if hits_player(bullet, &next.player) {
                    bullet_alive[bi] = false;
                    next.lives = next.lives.saturating_sub(1);
                    if next.lives == 0 {
                        next.status = GameStatus::GameOver;
                    }
                }
            }
        }
    }

    next.enemies = compact(std::mem::take(&mut next.enemies), &enemy_alive);
    next.bullets = compact(std::mem::take(&mut next.bullets), &bullet_alive);

    // ── 5. Respawn a cleared wave ───────────────────────────────────────────
    if next.enemies.is_empty() {
        next.enemies = spawn_enemies(preset.rows, WAVE_COLUMNS, next.width);
        debug!(
            "frame {}: wave cleared, spawned {} enemies",
            next.frame,
            next.enemies.len()
        );
    }

    if next.is_over() {
        info!(
            "game over at frame {} with score {} ({} lives left)",
            next.frame, next.score, next.lives
        );
    }

    next
}

/// Coarse ±1 box around the enemy cell.
fn hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    (bullet.x - enemy.x).abs() <= 1.0 && (bullet.y - enemy.y).abs() <= 1.0
}

/// Player footprint: `half_width` either side of centre, ±1 row.
fn hits_player(bullet: &Bullet, player: &Player) -> bool {
    let half = player.half_width();
    bullet.x >= f64::from(player.x - half)
        && bullet.x <= f64::from(player.x + half)
        && bullet.y >= f64::from(player.y - 1)
        && bullet.y <= f64::from(player.y + 1)
}

fn compact<T>(items: Vec<T>, alive: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(alive)
        .filter_map(|(item, &keep)| keep.then_some(item))
        .collect()
}
