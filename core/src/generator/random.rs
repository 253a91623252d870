use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement: a uniform mine count from the configured range, then distinct positions drawn
/// uniformly with rejection of duplicates, which yields an unbiased subset of that size.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R> {
    rng: R,
}

impl RandomMineGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: &DifficultyConfig) -> MineLayout {
        let max_mines = (GRID_SIZE - 1) as TileCount;
        let (min, max) = (config.min_mines, config.max_mines);
        if max > max_mines {
            log::warn!(
                "Board cannot hold {} mines and a safe tile, clamped to {}",
                max,
                max_mines
            );
        }
        let max = max.min(max_mines);
        let min = min.min(max);

        let target = self.rng.random_range(min..=max);
        let mut mine_mask = [false; GRID_SIZE];
        let mut mines_placed: TileCount = 0;

        while mines_placed < target {
            let place = self.rng.random_range(0..GRID_SIZE);
            if !mine_mask[place] {
                mine_mask[place] = true;
                mines_placed += 1;
            }
        }

        MineLayout::from_mine_mask_unchecked(mine_mask)
    }
}
