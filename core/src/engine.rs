use rand::rngs::SmallRng;

use crate::*;

/// Owns the active difficulty, the current round and the mine source. Callers drive it one operation at a
/// time and read the result back through the query methods or a [`RoundSnapshot`].
///
/// The plain operations follow a no-op contract: a move that is not allowed leaves everything untouched and
/// reports `NoChange`. The `try_` variants report the reason as a [`GameError`] instead.
#[derive(Clone, Debug)]
pub struct RoundEngine<G = RandomMineGenerator<SmallRng>> {
    difficulty: Difficulty,
    round: Round,
    generator: G,
}

impl RoundEngine {
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, RandomMineGenerator::seeded(seed))
    }
}

impl<G: MineGenerator> RoundEngine<G> {
    pub fn new(difficulty: Difficulty, generator: G) -> Self {
        Self {
            difficulty,
            round: Round::idle(difficulty),
            generator,
        }
    }

    /// Switches difficulty and resets to an idle round, abandoning any round in progress.
    pub fn configure(&mut self, difficulty: Difficulty) {
        if self.round.state().is_playing() {
            log::debug!(
                "Abandoning {} round at {} points to switch to {}",
                self.difficulty,
                self.round.score(),
                difficulty
            );
        }
        self.difficulty = difficulty;
        self.round = Round::idle(difficulty);
    }

    /// Like [`configure`](Self::configure) but refuses to abandon a round that is still being played.
    pub fn try_configure(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.round.state().is_playing() {
            return Err(GameError::RoundInProgress);
        }
        self.configure(difficulty);
        Ok(())
    }

    /// Places fresh mines and starts playing. Allowed from any state.
    pub fn start_game(&mut self) -> RoundState {
        let config = self.difficulty.config();
        let layout = self.generator.generate(&config);
        log::debug!(
            "Starting {} round with {} mines",
            self.difficulty,
            layout.mine_count()
        );
        self.round = Round::start(self.difficulty, &layout);
        self.round.state()
    }

    pub fn reveal_tile(&mut self, id: TileId) -> RevealOutcome {
        self.try_reveal_tile(id).unwrap_or_else(|err| {
            log::debug!("Ignoring reveal of tile {}: {}", id, err);
            RevealOutcome::NoChange
        })
    }

    pub fn try_reveal_tile(&mut self, id: TileId) -> Result<RevealOutcome> {
        self.round.reveal(id)
    }

    pub fn cash_out(&mut self) -> CashOutOutcome {
        self.try_cash_out().unwrap_or_else(|err| {
            log::debug!("Ignoring cash out: {}", err);
            CashOutOutcome::NoChange
        })
    }

    pub fn try_cash_out(&mut self) -> Result<CashOutOutcome> {
        self.round.cash_out()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[cfg(test)]
    pub(crate) fn round(&self) -> &Round {
        &self.round
    }

    pub fn state(&self) -> RoundState {
        self.round.state()
    }

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn multiplier(&self) -> Multiplier {
        self.round.multiplier()
    }

    pub fn mine_count(&self) -> TileCount {
        self.round.mine_count()
    }

    pub fn safe_revealed_count(&self) -> TileCount {
        self.round.safe_revealed_count()
    }

    pub fn safe_tiles_remaining(&self) -> TileCount {
        self.round.safe_tiles_remaining()
    }

    pub fn last_action(&self) -> LastAction {
        self.round.last_action()
    }

    pub fn tile(&self, id: TileId) -> Option<TileView> {
        self.round.tile(id)
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.round.tiles()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_round(&self.round)
    }
}
