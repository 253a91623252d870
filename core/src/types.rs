use crate::{GameError, Result};

/// Linear tile position, `0..GRID_SIZE`.
pub type TileId = u8;

/// Count type for mines and revealed tiles.
pub type TileCount = u8;

/// Row or column on the square presentation layout.
pub type Coord = u8;

/// Row and column `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Tiles per side of the board.
pub const GRID_SIDE: Coord = 5;

/// Total number of tiles on the board.
pub const GRID_SIZE: usize = GRID_SIDE as usize * GRID_SIDE as usize;

/// Base reward of a single safe tile, scaled by the current multiplier.
pub const TILE_REWARD: u32 = 100;

pub fn validate_tile_id(id: TileId) -> Result<TileId> {
    if usize::from(id) < GRID_SIZE {
        Ok(id)
    } else {
        Err(GameError::InvalidTile)
    }
}

pub trait ToTileId {
    fn to_tile_id(self) -> Result<TileId>;
}

impl ToTileId for Coord2 {
    fn to_tile_id(self) -> Result<TileId> {
        let (row, col) = self;
        if row >= GRID_SIDE || col >= GRID_SIDE {
            return Err(GameError::InvalidTile);
        }
        Ok(row * GRID_SIDE + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_map_row_major() {
        assert_eq!((0, 0).to_tile_id(), Ok(0));
        assert_eq!((1, 2).to_tile_id(), Ok(7));
        assert_eq!((4, 4).to_tile_id(), Ok(24));
        assert_eq!((3, 4).to_tile_id(), Ok(19));
    }

    #[test]
    fn coords_outside_board_are_rejected() {
        assert_eq!((5, 0).to_tile_id(), Err(GameError::InvalidTile));
        assert_eq!((0, 5).to_tile_id(), Err(GameError::InvalidTile));
        assert_eq!(validate_tile_id(25), Err(GameError::InvalidTile));
    }
}
