//! Difficulty presets.
//!
//! Each selector maps to one immutable `Preset`; the preset is copied into
//! the game state at construction, so nothing here is global or mutable.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Tunables for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Columns moved per move intent.
    pub player_speed: i32,
    /// Columns the formation sweeps per tick.
    pub enemy_speed: f64,
    /// Rows per tick for both player and enemy shots.
    pub bullet_speed: f64,
    /// Chance, in percent, that a given enemy fires on a given tick.
    pub fire_chance_percent: f64,
    pub lives: u32,
    /// Enemy rows per wave.
    pub rows: usize,
}

impl Difficulty {
    /// Parse a selector. Anything unrecognised is Normal.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    /// Resolve the two CLI flags. Easy wins when both are set.
    pub fn from_flags(easy: bool, hard: bool) -> Self {
        if easy {
            Difficulty::Easy
        } else if hard {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn preset(self) -> Preset {
        match self {
            Difficulty::Easy => Preset {
                player_speed: 2,
                enemy_speed: 0.1,
                bullet_speed: 1.0,
                fire_chance_percent: 0.5,
                lives: 5,
                rows: 2,
            },
            Difficulty::Normal => Preset {
                player_speed: 1,
                enemy_speed: 0.2,
                bullet_speed: 1.0,
                fire_chance_percent: 1.0,
                lives: 3,
                rows: 3,
            },
            Difficulty::Hard => Preset {
                player_speed: 1,
                enemy_speed: 0.3,
                bullet_speed: 1.5,
                fire_chance_percent: 2.0,
                lives: 2,
                rows: 4,
            },
        }
    }
}

impl Preset {
    /// Per-enemy, per-tick firing probability in [0, 1].
    pub fn fire_probability(&self) -> f64 {
        self.fire_chance_percent / 100.0
    }
}
