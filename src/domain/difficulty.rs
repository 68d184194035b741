use std::fmt;
use std::str::FromStr;

/// Security level a request is executed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown difficulty level: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "expert" | "hard" => Ok(Difficulty::Expert),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!("Expert".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for d in [Difficulty::Beginner, Difficulty::Expert] {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }
}
