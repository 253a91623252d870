use super::*;

/// Replays the same layout every round, regardless of difficulty.
///
/// Useful for scripted scenarios and tests where mine positions must be known up front.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    layout: MineLayout,
}

impl FixedMineGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn from_positions(positions: &[TileId]) -> Result<Self> {
        MineLayout::from_mine_positions(positions).map(Self::new)
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: &DifficultyConfig) -> MineLayout {
        if !config.mine_range().contains(&self.layout.mine_count()) {
            log::debug!(
                "Fixed layout has {} mines, outside configured range {:?}",
                self.layout.mine_count(),
                config.mine_range()
            );
        }
        self.layout
    }
}
