use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig::new(3, 5, Multiplier::ONE, Multiplier::from_hundredths(12)),
            Self::Medium => DifficultyConfig::new(8, 10, Multiplier::ONE, Multiplier::from_hundredths(25)),
            Self::Hard => DifficultyConfig::new(15, 20, Multiplier::ONE, Multiplier::from_hundredths(50)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

/// Tuning for one difficulty: inclusive mine count range and multiplier progression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub min_mines: TileCount,
    pub max_mines: TileCount,
    pub base_multiplier: Multiplier,
    pub multiplier_increment: Multiplier,
}

impl DifficultyConfig {
    pub const fn new(
        min_mines: TileCount,
        max_mines: TileCount,
        base_multiplier: Multiplier,
        multiplier_increment: Multiplier,
    ) -> Self {
        Self {
            min_mines,
            max_mines,
            base_multiplier,
            multiplier_increment,
        }
    }

    pub const fn mine_range(&self) -> core::ops::RangeInclusive<TileCount> {
        self.min_mines..=self.max_mines
    }
}
