//! Terminal space invaders.
//!
//! The simulation (`entities`, `difficulty`, `compute`) is pure and owns no
//! I/O. `session` layers the playing / game-over / quit-confirmation state
//! machine on top of it, while `input` and `display` translate between the
//! terminal and that state machine.

pub mod compute;
pub mod difficulty;
pub mod display;
pub mod entities;
pub mod input;
pub mod session;

/// Logical playfield width in columns.
pub const FIELD_WIDTH: i32 = 80;
/// Logical playfield height in rows.
pub const FIELD_HEIGHT: i32 = 24;
/// Fixed simulation cadence.
pub const TICKS_PER_SECOND: u64 = 15;
