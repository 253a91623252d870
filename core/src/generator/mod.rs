use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts, one call per round.
pub trait MineGenerator {
    fn generate(&mut self, config: &DifficultyConfig) -> MineLayout;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, config: &DifficultyConfig) -> MineLayout {
        (**self).generate(config)
    }
}
