use gemsweep_core::*;
use std::fmt::Write;

/// Draws the board as a square grid. Hidden tiles show their id so they can be picked.
pub fn board(snapshot: &RoundSnapshot) -> String {
    let mut out = String::new();
    for row in snapshot.tiles.chunks(usize::from(GRID_SIDE)) {
        let line: Vec<String> = row.iter().map(tile).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn tile(tile: &TileView) -> String {
    match tile.visibility {
        Visibility::Hidden => format!("{:>2}", tile.id),
        Visibility::RevealedSafe => "<>".to_string(),
        Visibility::RevealedMineHit => "XX".to_string(),
        Visibility::RevealedMineOther => "**".to_string(),
    }
}

pub fn scoreboard(snapshot: &RoundSnapshot) -> String {
    let mines = match snapshot.known_mine_count() {
        Some(count) => count.to_string(),
        None => "?".to_string(),
    };

    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "{} | points {} | multiplier {} | mines {} | diamonds {}",
        capitalize(snapshot.difficulty.name()),
        snapshot.score,
        snapshot.multiplier,
        mines,
        snapshot.safe_revealed_count,
    );

    match (snapshot.state, snapshot.win_kind) {
        (RoundState::Idle, _) => out.push_str("Type `start` to play.\n"),
        (RoundState::Playing, _) => {
            let _ = writeln!(out, "{} safe tiles remaining", snapshot.safe_tiles_remaining);
        }
        (RoundState::Lost, _) => out.push_str("GAME OVER: you hit a mine!\n"),
        (RoundState::Won, Some(WinKind::Cleared)) => {
            let _ = writeln!(out, "YOU WIN! Board cleared with {} points!", snapshot.score);
        }
        (RoundState::Won, _) => {
            let _ = writeln!(out, "YOU WIN! Cashed out with {} points!", snapshot.score);
        }
    }
    out
}

pub fn cues(cues: Cues) -> Option<&'static str> {
    if cues.contains(Cues::EXPLOSION) {
        Some("*BOOM*")
    } else if cues.contains(Cues::WIN) {
        Some("*cha-ching*")
    } else if cues.contains(Cues::REVEAL) {
        Some("*ding*")
    } else {
        None
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(mines: &[TileId]) -> RoundEngine<FixedMineGenerator> {
        RoundEngine::new(
            Difficulty::Easy,
            FixedMineGenerator::from_positions(mines).unwrap(),
        )
    }

    #[test]
    fn idle_board_shows_ids_and_unknown_mines() {
        let engine = engine(&[2]);
        let snapshot = engine.snapshot();

        assert_eq!(board(&snapshot).lines().next(), Some(" 0  1  2  3  4"));
        assert!(scoreboard(&snapshot).contains("mines ?"));
        assert!(scoreboard(&snapshot).starts_with("Easy |"));
    }

    #[test]
    fn lost_board_marks_mines() {
        let mut engine = engine(&[2, 7]);
        engine.start_game();
        engine.reveal_tile(0);
        engine.reveal_tile(2);
        let snapshot = engine.snapshot();

        let rows: Vec<String> = board(&snapshot).lines().map(str::to_string).collect();
        assert_eq!(rows[0], "<>  1 XX  3  4");
        assert_eq!(rows[1], " 5  6 **  8  9");
        assert!(scoreboard(&snapshot).contains("GAME OVER"));
    }

    #[test]
    fn playing_scoreboard_counts_remaining_tiles() {
        let mut engine = engine(&[2, 7, 19]);
        engine.start_game();
        engine.reveal_tile(0);

        let text = scoreboard(&engine.snapshot());
        assert!(text.contains("points 112 | multiplier 1.12x | mines 3 | diamonds 1"));
        assert!(text.contains("21 safe tiles remaining"));
    }

    #[test]
    fn explosion_wins_over_other_cues() {
        assert_eq!(cues(Cues::EXPLOSION | Cues::REVEAL), Some("*BOOM*"));
        assert_eq!(cues(Cues::REVEAL | Cues::CASH_OUT | Cues::WIN), Some("*cha-ching*"));
        assert_eq!(cues(Cues::empty()), None);
    }
}
