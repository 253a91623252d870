#![no_std]

#[cfg(test)]
extern crate std;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cue::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use multiplier::*;
pub use round::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod cue;
mod difficulty;
mod engine;
mod error;
mod generator;
mod multiplier;
mod round;
mod snapshot;
mod tile;
mod types;

/// Mine placement for a single round. Fixed once generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MineLayout {
    mine_mask: [bool; GRID_SIZE],
    mine_count: TileCount,
}

impl MineLayout {
    /// Layout without any mines, used by idle rounds.
    pub const fn empty() -> Self {
        Self {
            mine_mask: [false; GRID_SIZE],
            mine_count: 0,
        }
    }

    /// Builds a layout from a full mask. At least one tile must stay safe.
    pub fn from_mine_mask(mine_mask: [bool; GRID_SIZE]) -> Result<Self> {
        let layout = Self::from_mine_mask_unchecked(mine_mask);
        if layout.safe_tile_count() == 0 {
            return Err(GameError::TooManyMines);
        }
        Ok(layout)
    }

    pub(crate) fn from_mine_mask_unchecked(mine_mask: [bool; GRID_SIZE]) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as TileCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from mine positions. Duplicate positions count once.
    pub fn from_mine_positions(positions: &[TileId]) -> Result<Self> {
        let mut mine_mask = [false; GRID_SIZE];

        for &id in positions {
            let id = validate_tile_id(id)?;
            mine_mask[usize::from(id)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub const fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub const fn safe_tile_count(&self) -> TileCount {
        GRID_SIZE as TileCount - self.mine_count
    }

    pub fn contains_mine(&self, id: TileId) -> bool {
        self.mine_mask
            .get(usize::from(id))
            .copied()
            .unwrap_or(false)
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = TileId> + '_ {
        self.mine_mask
            .iter()
            .enumerate()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(id, _)| id as TileId)
    }
}

impl Default for MineLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<TileId> for MineLayout {
    type Output = bool;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.mine_mask[usize::from(id)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Safe,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashOutOutcome {
    NoChange,
    CashedOut,
}

impl CashOutOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::CashedOut => true,
        }
    }
}
