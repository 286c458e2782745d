use super::choice::Choice;
use crate::Arbitrary;

/// A source of throws for the far side of the table.
pub trait Player {
    /// Produce the next throw.
    fn throw(&mut self) -> Choice;
}

/// Uniformly random opponent. Each draw is independent; 1/3 per throw.
#[derive(Debug, Default)]
pub struct Machine;

impl Player for Machine {
    fn throw(&mut self) -> Choice {
        Choice::random()
    }
}
