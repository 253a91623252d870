use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    /// Audio/visual cues implied by the change between two consecutive snapshots.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Cues: u8 {
        const REVEAL    = 1;
        const EXPLOSION = 1 << 1;
        const CASH_OUT  = 1 << 2;
        const WIN       = 1 << 3;
    }
}

impl Cues {
    /// Derives cues from the snapshot before an operation and the one after it.
    pub fn between(prev: &RoundSnapshot, next: &RoundSnapshot) -> Self {
        let mut cues = Self::empty();

        if next.safe_revealed_count > prev.safe_revealed_count
            && next.last_action == LastAction::SafeReveal
        {
            cues |= Self::REVEAL;
        }

        if prev.state.is_playing() {
            match next.state {
                RoundState::Lost => cues |= Self::EXPLOSION,
                RoundState::Won => cues |= Self::CASH_OUT | Self::WIN,
                RoundState::Idle | RoundState::Playing => {}
            }
        }

        cues
    }
}
