use anyhow::Result;
use gemsweep_core::*;
use std::io::Write;

use crate::command::Command;
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives an engine from parsed commands and prints what the player sees.
pub struct Session<G> {
    engine: RoundEngine<G>,
    json: bool,
}

impl<G: MineGenerator> Session<G> {
    pub fn new(engine: RoundEngine<G>, json: bool) -> Self {
        Self { engine, json }
    }

    pub fn engine(&self) -> &RoundEngine<G> {
        &self.engine
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        let before = self.engine.snapshot();

        match command {
            Command::Start => {
                self.engine.start_game();
            }
            Command::Reveal { first, second } => {
                let id = match second {
                    Some(col) => match (first, col).to_tile_id() {
                        Ok(id) => id,
                        Err(err) => {
                            writeln!(out, "{err}")?;
                            return Ok(Flow::Continue);
                        }
                    },
                    None => first,
                };
                if !self.engine.reveal_tile(id).has_update() {
                    writeln!(out, "Nothing to reveal there.")?;
                }
            }
            Command::Cash => {
                if !self.engine.cash_out().has_update() {
                    writeln!(out, "Nothing to cash out.")?;
                }
            }
            Command::Difficulty { difficulty } => {
                if let Err(err) = self.engine.try_configure(difficulty) {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Show => {}
            Command::Quit => return Ok(Flow::Quit),
        }

        let after = self.engine.snapshot();
        if let Some(cue) = render::cues(Cues::between(&before, &after)) {
            writeln!(out, "{cue}")?;
        }
        self.print(&after, out)?;
        Ok(Flow::Continue)
    }

    pub fn print(&self, snapshot: &RoundSnapshot, out: &mut impl Write) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut *out, snapshot)?;
            writeln!(out)?;
        } else {
            write!(out, "{}{}", render::board(snapshot), render::scoreboard(snapshot))?;
        }
        Ok(())
    }
}
