//! Session state machine.
//!
//! A `Session` owns the single live `GameState` and the screen shown around
//! it. Every intent and every tick funnels through here, one at a time.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::compute::{init_state, move_player, player_shoot, tick};
use crate::difficulty::Difficulty;
use crate::entities::{Direction, GameState, GameStatus};
use crate::{FIELD_HEIGHT, FIELD_WIDTH};

/// How long the farewell screen stays up before the program exits.
pub const QUIT_DELAY: Duration = Duration::from_secs(2);

/// A discrete player action, decoupled from the key that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Fire,
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
    /// Farewell screen is up; the program exits when the delay runs out or
    /// on a second quit.
    ConfirmingQuit,
    Exited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Game,
    Farewell { final_score: u32, quit_at: Instant },
    Closed,
}

#[derive(Clone, Debug)]
pub struct Session {
    game: GameState,
    screen: Screen,
}

impl Session {
    /// Start a game on the standard playfield.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_field(difficulty, FIELD_WIDTH, FIELD_HEIGHT)
    }

    pub fn with_field(difficulty: Difficulty, width: i32, height: i32) -> Self {
        Self::from_game(init_state(difficulty, width, height))
    }

    /// Wrap an existing game state.
    pub fn from_game(game: GameState) -> Self {
        Self {
            game,
            screen: Screen::Game,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.game.difficulty
    }

    pub fn phase(&self) -> Phase {
        match self.screen {
            Screen::Closed => Phase::Exited,
            Screen::Farewell { .. } => Phase::ConfirmingQuit,
            Screen::Game => match self.game.status {
                GameStatus::Playing => Phase::Playing,
                GameStatus::GameOver => Phase::GameOver,
            },
        }
    }

    /// Score captured when the player asked to quit.
    pub fn final_score(&self) -> Option<u32> {
        match self.screen {
            Screen::Farewell { final_score, .. } => Some(final_score),
            _ => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        self.screen == Screen::Closed
    }

    pub fn apply(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Move(direction) => {
                if self.phase() == Phase::Playing {
                    self.game = move_player(&self.game, direction);
                }
            }
            Intent::Fire => {
                if self.phase() == Phase::Playing {
                    self.game = player_shoot(&self.game);
                }
            }
            Intent::Restart => {
                if self.phase() == Phase::GameOver {
                    debug!(
                        "restarting {} game after score {}",
                        self.game.difficulty.name(),
                        self.game.score
                    );
                    self.game = init_state(self.game.difficulty, self.game.width, self.game.height);
                }
            }
            Intent::Quit => self.request_quit(now),
        }
    }

    fn request_quit(&mut self, now: Instant) {
        match self.screen {
            Screen::Game => {
                debug!("quit requested with score {}", self.game.score);
                self.screen = Screen::Farewell {
                    final_score: self.game.score,
                    quit_at: now + QUIT_DELAY,
                };
            }
            Screen::Farewell { .. } => {
                info!("quit confirmed");
                self.screen = Screen::Closed;
            }
            Screen::Closed => {}
        }
    }

    /// Advance the game one tick. Frozen while the farewell screen is up.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.screen == Screen::Game {
            self.game = tick(&self.game, rng);
        }
    }

    /// Fire the delayed exit once its deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Screen::Farewell { quit_at, .. } = self.screen {
            if now >= quit_at {
                info!("farewell delay elapsed, exiting");
                self.screen = Screen::Closed;
            }
        }
    }
}
