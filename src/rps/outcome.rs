use super::choice::Choice;
use colored::Colorize;

/// Result of one round, from the human's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Settles a pair of throws. Total and pure over all nine ordered pairs;
    /// both inputs come from the same closed enumeration, so there is no
    /// error case.
    pub fn decide(human: Choice, computer: Choice) -> Self {
        match (human, computer) {
            (h, c) if h == c => Self::Tie,
            (h, c) if h.beats() == c => Self::Win,
            _ => Self::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "{}", "You win!".green()),
            Self::Lose => write!(f, "{}", "You lose!".red()),
            Self::Tie => write!(f, "{}", "It's a tie!".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_matches_tie() {
        for choice in [Choice::Rock, Choice::Paper, Choice::Scissors] {
            assert_eq!(Outcome::decide(choice, choice), Outcome::Tie);
        }
    }

    #[test]
    fn dominant_pairs_win() {
        assert_eq!(Outcome::decide(Choice::Rock, Choice::Scissors), Outcome::Win);
        assert_eq!(Outcome::decide(Choice::Scissors, Choice::Paper), Outcome::Win);
        assert_eq!(Outcome::decide(Choice::Paper, Choice::Rock), Outcome::Win);
    }

    #[test]
    fn dominated_pairs_lose() {
        assert_eq!(Outcome::decide(Choice::Scissors, Choice::Rock), Outcome::Lose);
        assert_eq!(Outcome::decide(Choice::Paper, Choice::Scissors), Outcome::Lose);
        assert_eq!(Outcome::decide(Choice::Rock, Choice::Paper), Outcome::Lose);
    }
}
