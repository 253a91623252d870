use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable copy of everything a presentation layer may read about a round.
///
/// Tiles are exposed as [`TileView`]s only, so hidden mines cannot be read from a snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub difficulty: Difficulty,
    pub state: RoundState,
    pub score: u32,
    pub multiplier: Multiplier,
    pub mine_count: TileCount,
    pub safe_revealed_count: TileCount,
    pub safe_tiles_remaining: TileCount,
    pub last_action: LastAction,
    pub win_kind: Option<WinKind>,
    pub tiles: [TileView; GRID_SIZE],
}

impl RoundSnapshot {
    pub fn from_round(round: &Round) -> Self {
        let tiles = core::array::from_fn(|i| {
            round
                .tile(i as TileId)
                .unwrap_or(TileView {
                    id: i as TileId,
                    visibility: Visibility::Hidden,
                })
        });
        Self {
            difficulty: round.difficulty(),
            state: round.state(),
            score: round.score(),
            multiplier: round.multiplier(),
            mine_count: round.mine_count(),
            safe_revealed_count: round.safe_revealed_count(),
            safe_tiles_remaining: round.safe_tiles_remaining(),
            last_action: round.last_action(),
            win_kind: round.win_kind(),
            tiles,
        }
    }

    /// Mine count as a player should see it: unknown until a round has been started.
    pub fn known_mine_count(&self) -> Option<TileCount> {
        match self.state {
            RoundState::Idle => None,
            _ => Some(self.mine_count),
        }
    }

    pub fn tile(&self, id: TileId) -> Option<TileView> {
        self.tiles.get(usize::from(id)).copied()
    }

    /// Whether the tile can still be picked in this round.
    pub fn can_reveal(&self, id: TileId) -> bool {
        self.state.is_playing() && self.tile(id).is_some_and(|tile| tile.is_hidden())
    }

    pub fn can_cash_out(&self) -> bool {
        self.state.is_playing() && self.safe_revealed_count > 0
    }
}
