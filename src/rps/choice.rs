use crate::Arbitrary;

/// One throw in rock-paper-scissors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// The throw this one defeats under the cyclic rule.
    pub fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err("rock, paper, or scissors".into()),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_dominance() {
        assert_eq!(Choice::Rock.beats(), Choice::Scissors);
        assert_eq!(Choice::Scissors.beats(), Choice::Paper);
        assert_eq!(Choice::Paper.beats(), Choice::Rock);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Choice::try_from("rock"), Ok(Choice::Rock));
        assert_eq!(Choice::try_from("PAPER"), Ok(Choice::Paper));
        assert_eq!(Choice::try_from(" Scissors \n"), Ok(Choice::Scissors));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(Choice::try_from("banana").is_err());
        assert!(Choice::try_from("").is_err());
        assert!(Choice::try_from("rockk").is_err());
    }

    #[test]
    fn bijective_str() {
        for choice in [Choice::Rock, Choice::Paper, Choice::Scissors] {
            assert_eq!(Choice::try_from(choice.to_string().as_str()), Ok(choice));
        }
    }
}
