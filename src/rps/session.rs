use super::choice::Choice;
use super::outcome::Outcome;
use super::players::Machine;
use super::players::Player;
use super::tally::Tally;
use crate::AFFIRMATIVE;
use anyhow::Result;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;

/// One interactive sitting: prompt, throw, settle, repeat.
///
/// The session owns its console streams and the opponent, so tests can drive
/// it with in-memory readers and scripted throws. The tally lives and dies
/// with the session.
pub struct Session<R, W, P> {
    input: R,
    output: W,
    opponent: P,
    tally: Tally,
}

impl Session<StdinLock<'static>, Stdout, Machine> {
    /// Attaches to the process console against a random opponent.
    pub fn attach() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), Machine)
    }
}

impl<R, W, P> Session<R, W, P>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    pub fn new(input: R, output: W, opponent: P) -> Self {
        Self {
            input,
            output,
            opponent,
            tally: Tally::new(),
        }
    }

    /// Runs rounds until the player declines to continue.
    pub fn run(&mut self) -> Result<()> {
        let mut rounds = 0;
        loop {
            writeln!(self.output, "\nRock, Paper, Scissors Game!")?;
            let human = match self.prompt()? {
                Some(choice) => choice,
                None => break, // input closed mid-session
            };
            let machine = self.opponent.throw();
            let outcome = self.settle(human, machine);
            rounds += 1;
            writeln!(self.output, "\nYou chose: {}", human)?;
            writeln!(self.output, "Computer chose: {}", machine)?;
            writeln!(self.output, "{}", outcome)?;
            writeln!(self.output, "{}", self.tally)?;
            if !self.rematch()? {
                writeln!(self.output, "Thanks for playing!")?;
                break;
            }
        }
        log::info!("session over after {} rounds, {}", rounds, self.tally);
        Ok(())
    }

    /// Reads lines until one parses as a throw. A rejected line consumes
    /// nothing: no draw, no settlement, no tally movement.
    /// Returns None once the input is exhausted.
    fn prompt(&mut self) -> Result<Option<Choice>> {
        loop {
            write!(self.output, "Choose rock, paper, or scissors: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match Choice::try_from(line.as_str()) {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// The only place the tally moves.
    fn settle(&mut self, human: Choice, machine: Choice) -> Outcome {
        let outcome = Outcome::decide(human, machine);
        self.tally.absorb(outcome);
        log::debug!("{:?} vs {:?} -> {:?}", human, machine, outcome);
        outcome
    }

    /// Anything but the affirmative token ends the session, empty input and
    /// end-of-stream included.
    fn rematch(&mut self) -> Result<bool> {
        write!(self.output, "Do you want to play again? (yes/no): ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().eq_ignore_ascii_case(AFFIRMATIVE))
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}
