use clap::{Parser, Subcommand};
use gemsweep_core::{Difficulty, TileId};

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a new round (also restarts one in progress)
    #[command(alias = "new")]
    Start,
    /// Reveal a tile by id, or by row and column
    #[command(alias = "r")]
    Reveal {
        /// Tile id, or the row when a column follows
        first: TileId,
        /// Column
        second: Option<TileId>,
    },
    /// Bank the current score
    #[command(alias = "cashout")]
    Cash,
    /// Switch difficulty (easy, medium, hard) while no round is being played
    Difficulty { difficulty: Difficulty },
    /// Print the board again
    Show,
    /// Leave the game
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Option<Self>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        CommandLine::try_parse_from(words).map(|parsed| Some(parsed.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveal_forms() {
        assert_eq!(
            Command::parse_line("reveal 7").unwrap(),
            Some(Command::Reveal {
                first: 7,
                second: None
            })
        );
        assert_eq!(
            Command::parse_line("  r 1 2 ").unwrap(),
            Some(Command::Reveal {
                first: 1,
                second: Some(2)
            })
        );
    }

    #[test]
    fn parses_difficulty_names() {
        assert_eq!(
            Command::parse_line("difficulty Hard").unwrap(),
            Some(Command::Difficulty {
                difficulty: Difficulty::Hard
            })
        );
        assert!(Command::parse_line("difficulty insane").is_err());
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(Command::parse_line("   ").unwrap(), None);
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(Command::parse_line("dig 3").is_err());
        assert!(Command::parse_line("reveal").is_err());
    }

    #[test]
    fn command_tree_is_consistent() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }
}
