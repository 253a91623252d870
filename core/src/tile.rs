use serde::{Deserialize, Serialize};

use crate::TileId;

/// What the player can see of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Hidden,
    RevealedSafe,
    /// The mine the player stepped on.
    RevealedMineHit,
    /// Any other mine, disclosed when the round is lost.
    RevealedMineOther,
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_mine(self) -> Option<bool> {
        match self {
            Self::Hidden => None,
            Self::RevealedSafe => Some(false),
            Self::RevealedMineHit | Self::RevealedMineOther => Some(true),
        }
    }
}

/// Canonical tile stored by the round. `is_mine` never leaves the crate directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tile {
    pub(crate) id: TileId,
    pub(crate) is_mine: bool,
    pub(crate) visibility: Visibility,
}

impl Tile {
    pub(crate) const fn new(id: TileId, is_mine: bool) -> Self {
        Self {
            id,
            is_mine,
            visibility: Visibility::Hidden,
        }
    }

    pub(crate) const fn view(&self) -> TileView {
        TileView {
            id: self.id,
            visibility: self.visibility,
        }
    }
}

/// Player-facing view of a tile. Whether it holds a mine is only known once revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub visibility: Visibility,
}

impl TileView {
    pub const fn is_mine(&self) -> Option<bool> {
        self.visibility.is_mine()
    }

    pub const fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }
}
