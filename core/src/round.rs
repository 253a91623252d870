use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundState {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Kind of the last tile reveal that changed the round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastAction {
    #[default]
    None,
    SafeReveal,
    MineHit,
}

/// How a won round ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinKind {
    /// Every safe tile was revealed.
    Cleared,
    /// The player banked the score early.
    CashedOut,
}

/// One round of play. All counters, the score and the board change together inside a single method call.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    difficulty: Difficulty,
    config: DifficultyConfig,
    tiles: [Tile; GRID_SIZE],
    state: RoundState,
    score: u32,
    multiplier: Multiplier,
    safe_revealed_count: TileCount,
    mine_count: TileCount,
    last_action: LastAction,
    win_kind: Option<WinKind>,
}

impl Round {
    /// Fresh round waiting to be started: no mines, nothing revealed, multiplier at 1.00.
    pub fn idle(difficulty: Difficulty) -> Self {
        Self::with_layout(difficulty, &MineLayout::empty(), RoundState::Idle, Multiplier::ONE)
    }

    /// Starts a round on the given layout.
    pub fn start(difficulty: Difficulty, layout: &MineLayout) -> Self {
        let base = difficulty.config().base_multiplier;
        Self::with_layout(difficulty, layout, RoundState::Playing, base)
    }

    fn with_layout(
        difficulty: Difficulty,
        layout: &MineLayout,
        state: RoundState,
        multiplier: Multiplier,
    ) -> Self {
        let tiles = core::array::from_fn(|i| {
            let id = i as TileId;
            Tile::new(id, layout[id])
        });
        Self {
            difficulty,
            config: difficulty.config(),
            tiles,
            state,
            score: 0,
            multiplier,
            safe_revealed_count: 0,
            mine_count: layout.mine_count(),
            last_action: LastAction::None,
            win_kind: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub fn safe_revealed_count(&self) -> TileCount {
        self.safe_revealed_count
    }

    pub fn safe_tiles_remaining(&self) -> TileCount {
        (GRID_SIZE as TileCount)
            .saturating_sub(self.mine_count)
            .saturating_sub(self.safe_revealed_count)
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn win_kind(&self) -> Option<WinKind> {
        self.win_kind
    }

    pub fn tile(&self, id: TileId) -> Option<TileView> {
        self.tiles.get(usize::from(id)).map(Tile::view)
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.tiles.iter().map(Tile::view)
    }

    pub fn reveal(&mut self, id: TileId) -> Result<RevealOutcome> {
        let id = validate_tile_id(id)?;
        self.check_playing()?;

        let tile = self.tiles[usize::from(id)];
        if !tile.visibility.is_hidden() {
            return Err(GameError::AlreadyRevealed);
        }

        Ok(if tile.is_mine {
            self.hit_mine(id)
        } else {
            self.reveal_safe(id)
        })
    }

    pub fn cash_out(&mut self) -> Result<CashOutOutcome> {
        self.check_playing()?;
        if self.safe_revealed_count == 0 {
            return Err(GameError::NothingToCashOut);
        }

        self.state = RoundState::Won;
        self.win_kind = Some(WinKind::CashedOut);
        log::debug!("Cashed out {} points at {}", self.score, self.multiplier);
        Ok(CashOutOutcome::CashedOut)
    }

    fn hit_mine(&mut self, id: TileId) -> RevealOutcome {
        for tile in self.tiles.iter_mut() {
            if tile.id == id {
                tile.visibility = Visibility::RevealedMineHit;
            } else if tile.is_mine && tile.visibility.is_hidden() {
                tile.visibility = Visibility::RevealedMineOther;
            }
        }

        self.score = 0;
        self.state = RoundState::Lost;
        self.last_action = LastAction::MineHit;
        log::debug!("Hit mine at tile {}, round lost", id);
        RevealOutcome::HitMine
    }

    fn reveal_safe(&mut self, id: TileId) -> RevealOutcome {
        self.tiles[usize::from(id)].visibility = Visibility::RevealedSafe;
        self.safe_revealed_count += 1;
        self.multiplier = self.multiplier + self.config.multiplier_increment;
        self.score = self
            .score
            .saturating_add(self.multiplier.scale(TILE_REWARD));
        self.last_action = LastAction::SafeReveal;
        log::trace!(
            "Revealed safe tile {}, multiplier {}, score {}",
            id,
            self.multiplier,
            self.score
        );

        if self.safe_tiles_remaining() == 0 {
            self.state = RoundState::Won;
            self.win_kind = Some(WinKind::Cleared);
            log::debug!("Board cleared with {} points", self.score);
            RevealOutcome::Won
        } else {
            RevealOutcome::Safe
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_playing() {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mines = self.tiles.iter().filter(|tile| tile.is_mine).count();
        let safe = self
            .tiles
            .iter()
            .filter(|tile| tile.visibility == Visibility::RevealedSafe)
            .count();

        assert_eq!(mines, usize::from(self.mine_count));
        assert_eq!(safe, usize::from(self.safe_revealed_count));
        assert!(safe + mines <= GRID_SIZE);
        if self.state.is_playing() || self.state == RoundState::Idle {
            assert!(
                self.tiles
                    .iter()
                    .all(|tile| matches!(tile.visibility, Visibility::Hidden | Visibility::RevealedSafe))
            );
        }
        for (i, tile) in self.tiles.iter().enumerate() {
            assert_eq!(usize::from(tile.id), i);
            if tile.visibility == Visibility::RevealedSafe {
                assert!(!tile.is_mine);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy_round(mines: &[TileId]) -> Round {
        Round::start(Difficulty::Easy, &MineLayout::from_mine_positions(mines).unwrap())
    }

    #[test]
    fn idle_round_is_empty() {
        let round = Round::idle(Difficulty::Hard);

        assert_eq!(round.state(), RoundState::Idle);
        assert_eq!(round.mine_count(), 0);
        assert_eq!(round.multiplier(), Multiplier::ONE);
        assert_eq!(round.safe_tiles_remaining(), GRID_SIZE as TileCount);
        assert!(round.tiles().all(|tile| tile.is_hidden()));
        round.assert_invariants();
    }

    #[test]
    fn idle_round_rejects_moves() {
        let mut round = Round::idle(Difficulty::Easy);

        assert_eq!(round.reveal(0), Err(GameError::NotPlaying));
        assert_eq!(round.cash_out(), Err(GameError::NotPlaying));
    }

    #[test]
    fn safe_reveals_advance_multiplier_and_score() {
        let mut round = easy_round(&[2, 7, 19]);

        assert_eq!(round.reveal(0), Ok(RevealOutcome::Safe));
        assert_eq!(round.multiplier().hundredths(), 112);
        assert_eq!(round.score(), 112);

        assert_eq!(round.reveal(1), Ok(RevealOutcome::Safe));
        assert_eq!(round.multiplier().hundredths(), 124);
        assert_eq!(round.score(), 236);
        assert_eq!(round.last_action(), LastAction::SafeReveal);
        round.assert_invariants();
    }

    #[test]
    fn mine_hit_discloses_every_mine() {
        let mut round = easy_round(&[2, 7, 19]);
        round.reveal(0).unwrap();
        round.reveal(1).unwrap();

        assert_eq!(round.reveal(2), Ok(RevealOutcome::HitMine));
        assert_eq!(round.score(), 0);
        assert_eq!(round.state(), RoundState::Lost);
        assert_eq!(round.last_action(), LastAction::MineHit);
        assert_eq!(round.multiplier().hundredths(), 124);
        assert_eq!(round.tile(2).unwrap().visibility, Visibility::RevealedMineHit);
        assert_eq!(round.tile(7).unwrap().visibility, Visibility::RevealedMineOther);
        assert_eq!(round.tile(19).unwrap().visibility, Visibility::RevealedMineOther);
        assert_eq!(round.tile(0).unwrap().visibility, Visibility::RevealedSafe);
        assert_eq!(round.tile(3).unwrap().visibility, Visibility::Hidden);
        round.assert_invariants();
    }

    #[test]
    fn finished_round_is_frozen() {
        let mut round = easy_round(&[2, 7, 19]);
        round.reveal(2).unwrap();
        let frozen = round.clone();

        assert_eq!(round.reveal(0), Err(GameError::NotPlaying));
        assert_eq!(round.cash_out(), Err(GameError::NotPlaying));
        assert_eq!(round, frozen);
    }

    #[test]
    fn second_reveal_of_same_tile_is_rejected() {
        let mut round = easy_round(&[2, 7, 19]);
        round.reveal(0).unwrap();
        let before = round.clone();

        assert_eq!(round.reveal(0), Err(GameError::AlreadyRevealed));
        assert_eq!(round, before);
    }

    #[test]
    fn out_of_range_reveal_is_rejected() {
        let mut round = easy_round(&[2, 7, 19]);
        assert_eq!(round.reveal(25), Err(GameError::InvalidTile));
    }

    #[test]
    fn clearing_board_wins_without_cash_out() {
        let mut round = easy_round(&[2, 7, 19]);
        let safe: std::vec::Vec<TileId> = (0..GRID_SIZE as TileId)
            .filter(|id| ![2, 7, 19].contains(id))
            .collect();
        assert_eq!(safe.len(), 22);

        let (last, rest) = safe.split_last().unwrap();
        for &id in rest {
            assert_eq!(round.reveal(id), Ok(RevealOutcome::Safe));
        }
        assert_eq!(round.reveal(*last), Ok(RevealOutcome::Won));

        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.win_kind(), Some(WinKind::Cleared));
        assert_eq!(round.safe_tiles_remaining(), 0);
        assert_eq!(round.multiplier().hundredths(), 100 + 22 * 12);
        // mines stay hidden on a win
        assert!(round.tile(7).unwrap().is_hidden());
        round.assert_invariants();
    }

    #[test]
    fn cash_out_needs_a_safe_reveal() {
        let mut round = easy_round(&[2, 7, 19]);

        assert_eq!(round.cash_out(), Err(GameError::NothingToCashOut));
        assert_eq!(round.state(), RoundState::Playing);

        round.reveal(0).unwrap();
        assert_eq!(round.cash_out(), Ok(CashOutOutcome::CashedOut));
        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.win_kind(), Some(WinKind::CashedOut));
        assert_eq!(round.score(), 112);
        assert!(round.tile(2).unwrap().is_hidden());
    }
}
