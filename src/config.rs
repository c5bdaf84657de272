//! Game and search configuration.
//!
//! Settings are plain values handed to the code that needs them: a
//! [`GameConfig`] describes who plays each side, a [`SearchConfig`] is what
//! [`find_best_move`](crate::agent::ai::find_best_move) receives.

use std::time::Duration;

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Hard cap on iterative deepening
pub const MAX_SEARCH_DEPTH: u8 = 64;

/// Everything a single move decision needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side the AI plays; must be the side to move
    pub side: Color,
    pub difficulty: Difficulty,
    pub time_budget: Duration,
    pub max_depth: u8,
}

impl SearchConfig {
    /// Uses the difficulty's default time budget and the global depth cap
    pub fn new(side: Color, difficulty: Difficulty) -> Self {
        Self {
            side,
            difficulty,
            time_budget: difficulty.default_time_budget(),
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Clamped to `1..=MAX_SEARCH_DEPTH`
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_SEARCH_DEPTH);
        self
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human entering moves
    Human,
    /// AI player with specified difficulty
    Ai { difficulty: Difficulty },
}

/// Who is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

/// Complete game configuration: the mode, both players, and an optional
/// time budget overriding the difficulty defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    pub time_budget: Option<Duration>,
    pub max_depth: u8,
}

impl GameConfig {
    pub fn human_vs_human() -> Self {
        Self::new(GameMode::HumanVsHuman, PlayerConfig::Human, PlayerConfig::Human)
    }

    /// # Arguments
    /// * `human_color` - The color the human player will play as
    /// * `difficulty` - The difficulty level for the AI opponent
    pub fn human_vs_ai(human_color: Color, difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::Ai { difficulty };
        let (white, black) = match human_color {
            Color::White => (PlayerConfig::Human, ai),
            Color::Black => (ai, PlayerConfig::Human),
        };
        Self::new(GameMode::HumanVsAi, white, black)
    }

    pub fn ai_vs_ai(white: Difficulty, black: Difficulty) -> Self {
        Self::new(
            GameMode::AiVsAi,
            PlayerConfig::Ai { difficulty: white },
            PlayerConfig::Ai { difficulty: black },
        )
    }

    fn new(mode: GameMode, white: PlayerConfig, black: PlayerConfig) -> Self {
        Self {
            mode,
            white,
            black,
            time_budget: None,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = Some(time_budget);
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_SEARCH_DEPTH);
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Search settings for the AI playing `color`, `None` for a human side
    pub fn search_config(&self, color: Color) -> Option<SearchConfig> {
        match self.player(color) {
            PlayerConfig::Human => None,
            PlayerConfig::Ai { difficulty } => {
                let config = SearchConfig::new(color, difficulty).with_max_depth(self.max_depth);
                Some(match self.time_budget {
                    Some(budget) => config.with_time_budget(budget),
                    None => config,
                })
            }
        }
    }

    /// The human's color in a human-vs-AI game
    pub fn human_color(&self) -> Option<Color> {
        match (self.mode, self.white) {
            (GameMode::HumanVsAi, PlayerConfig::Human) => Some(Color::White),
            (GameMode::HumanVsAi, _) => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::human_vs_ai(Color::White, Difficulty::default())
    }
}
