//! Interactive console session.
//!
//! Reads commands line by line, turns them into engine calls and prints
//! what the engine returns. In human-vs-computer mode the random opponent
//! takes seat two's turns.

use crate::config::{ConsoleConfig, Mode};
use crate::render;
use anyhow::Result;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{Cell, MatchController, Marker, MoveResult, RandomOpponent, Seat};
use tracing::{debug, info, instrument, warn};

/// Seat played by the computer in human-vs-computer mode.
const COMPUTER_SEAT: Seat = Seat::Two;

const HELP: &str = "Commands: a cell (0-8 or a name like \"center\"), \
marker x|o, restart, score, help, quit";

/// A console session wrapping one match controller.
pub struct ConsoleSession {
    controller: MatchController,
    computer: Option<RandomOpponent<StdRng>>,
    draw_delay: Duration,
}

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

impl ConsoleSession {
    /// Builds a session from configuration.
    #[instrument(skip(config), fields(mode = ?config.mode()))]
    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        let mut controller = MatchController::named(config.player_one(), config.player_two());
        controller.assign_markers(*config.marker())?;

        let computer = match config.mode() {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer => Some(match config.seed() {
                Some(seed) => RandomOpponent::seeded(*seed),
                None => RandomOpponent::from_os_rng(),
            }),
        };

        Ok(Self {
            controller,
            computer,
            draw_delay: Duration::from_millis(*config.draw_delay_ms()),
        })
    }

    /// The match controller driving this session.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HELP)?;
        writeln!(out, "{}", render::board(&self.controller))?;

        let mut lines = input.lines();
        loop {
            if self.computer_to_move() {
                self.play_computer_turn(out)?;
                continue;
            }

            self.prompt(out)?;
            let Some(line) = lines.next() else {
                debug!("Input closed");
                break;
            };
            if let Flow::Quit = self.handle_command(line?.trim(), out)? {
                break;
            }
        }

        writeln!(out, "{}", render::scores(&self.controller))?;
        info!("Session ended");
        Ok(())
    }

    fn computer_to_move(&self) -> bool {
        self.computer.is_some() && self.controller.state().to_move() == Some(COMPUTER_SEAT)
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.controller.state().to_move() {
            Some(seat) => {
                let player = self.controller.player(seat);
                write!(out, "{} ({})> ", player.handle(), player.marker())?;
            }
            None => write!(out, "Match over. restart or quit> ")?,
        }
        out.flush()?;
        Ok(())
    }

    #[instrument(skip(self, out))]
    fn handle_command<W: Write>(&mut self, command: &str, out: &mut W) -> Result<Flow> {
        let lower = command.to_lowercase();
        match lower.as_str() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{}", HELP)?,
            "score" => writeln!(out, "{}", render::scores(&self.controller))?,
            "restart" => {
                self.controller.restart();
                writeln!(out, "New match.")?;
                writeln!(out, "{}", render::board(&self.controller))?;
            }
            _ => {
                if let Some(marker) = lower.strip_prefix("marker ") {
                    self.choose_marker(marker.trim(), out)?;
                } else {
                    self.play_human_turn(command, out)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn choose_marker<W: Write>(&mut self, marker: &str, out: &mut W) -> Result<()> {
        let Ok(marker) = marker.parse::<Marker>() else {
            writeln!(out, "Unknown marker '{}'. Use x or o.", marker)?;
            return Ok(());
        };
        match self.controller.assign_markers(marker) {
            Ok(()) => writeln!(out, "{}", render::scores(&self.controller))?,
            Err(e) => writeln!(out, "{}", e.kind())?,
        }
        Ok(())
    }

    fn play_human_turn<W: Write>(&mut self, command: &str, out: &mut W) -> Result<()> {
        // Raw numbers go straight to the engine so out-of-range input is
        // reported by it.
        let cell = match command.parse::<usize>() {
            Ok(index) => index,
            Err(_) => match Cell::from_label_or_number(command) {
                Some(cell) => cell.index(),
                None => {
                    writeln!(out, "Unknown command '{}'. {}", command, HELP)?;
                    return Ok(());
                }
            },
        };

        match self.controller.submit_move(cell) {
            Ok(result) => self.announce(result, out),
            Err(e) => {
                warn!(error = %e, "Move refused");
                writeln!(out, "{}", e.kind())?;
                Ok(())
            }
        }
    }

    fn play_computer_turn<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(opponent) = self.computer.as_mut() else {
            return Ok(());
        };
        let result = self.controller.submit_opponent_move(opponent)?;
        if let Some(&cell) = self.controller.player(COMPUTER_SEAT).history().last() {
            writeln!(out, "Computer plays {}.", cell)?;
        }
        self.announce(result, out)
    }

    fn announce<W: Write>(&self, result: MoveResult, out: &mut W) -> Result<()> {
        match result {
            MoveResult::Rejected { reason } => {
                writeln!(out, "{}", reason)?;
                return Ok(());
            }
            MoveResult::Advanced { .. } => {
                writeln!(out, "{}", render::board(&self.controller))?;
            }
            MoveResult::Won { winner, line } => {
                writeln!(out, "{}", render::board(&self.controller))?;
                writeln!(
                    out,
                    "{} wins on {}!",
                    self.controller.player(winner).handle(),
                    line
                )?;
                writeln!(out, "{}", render::scores(&self.controller))?;
            }
            MoveResult::Draw => {
                writeln!(out, "{}", render::board(&self.controller))?;
                out.flush()?;
                std::thread::sleep(self.draw_delay);
                writeln!(out, "It's a tie!")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::io::Cursor;
    use tictactoe_engine::MatchState;

    fn session(args: &[&str]) -> ConsoleSession {
        let mut argv = vec!["tictactoe", "--draw-delay-ms", "0"];
        argv.extend_from_slice(args);
        let config = ConsoleConfig::default().with_overrides(&Cli::parse_from(argv));
        ConsoleSession::from_config(&config).unwrap()
    }

    fn run(session: &mut ConsoleSession, input: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_two_humans_play_to_a_win() {
        let mut session = session(&[]);
        let output = run(&mut session, "0\n3\n1\n4\ntop-right\n");
        assert!(output.contains("@Player 1 wins on 0,1,2!"));
        assert_eq!(session.controller().state(), MatchState::PlayerOneWon);
        assert_eq!(session.controller().score(Seat::One), 1);
    }

    #[test]
    fn test_bad_input_keeps_turn() {
        let mut session = session(&[]);
        let output = run(&mut session, "4\n4\n9\nnowhere\n");
        assert!(output.contains("Cell 4 is already occupied"));
        assert!(output.contains("Invalid cell 9"));
        assert!(output.contains("Unknown command 'nowhere'"));
        assert_eq!(session.controller().moves_played(), 1);
        assert_eq!(
            session.controller().state(),
            MatchState::AwaitingPlayerTwoMove
        );
    }

    #[test]
    fn test_draw_is_announced() {
        let mut session = session(&[]);
        let output = run(&mut session, "0\n1\n2\n4\n3\n5\n7\n6\n8\n");
        assert!(output.contains("It's a tie!"));
        assert_eq!(session.controller().state(), MatchState::Draw);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut session = session(&[]);
        let output = run(&mut session, "0\n3\n1\n4\n2\n5\nrestart\nquit\n8\n");
        assert!(output.contains("The match is over"));
        assert!(output.contains("New match."));
        assert!(session.controller().board().is_empty());
        assert_eq!(session.controller().score(Seat::One), 1);
    }

    #[test]
    fn test_marker_choice_before_first_move() {
        let mut session = session(&[]);
        run(&mut session, "marker o\n4\nmarker x\n");
        let controller = session.controller();
        assert_eq!(controller.starting_seat(), Seat::Two);
        assert_eq!(controller.player(Seat::Two).history(), &[4]);
        assert_eq!(controller.player(Seat::One).marker(), Marker::O);
    }

    #[test]
    fn test_computer_answers_every_move() {
        let mut session = session(&["--mode", "human-vs-computer", "--seed", "5"]);
        let output = run(&mut session, "4\n");
        assert!(output.contains("Computer plays"));
        let controller = session.controller();
        assert_eq!(controller.player(Seat::One).history(), &[4]);
        assert_eq!(controller.player(Seat::Two).move_count(), 1);
        assert_eq!(controller.state(), MatchState::AwaitingPlayerOneMove);
    }

    #[test]
    fn test_computer_finishes_a_match() {
        let mut session = session(&["--mode", "human-vs-computer", "--seed", "8"]);
        // Feed every cell; occupied ones are rejected and the match still ends.
        run(&mut session, "0\n1\n2\n3\n4\n5\n6\n7\n8\n");
        assert!(session.controller().is_over());
    }
}
