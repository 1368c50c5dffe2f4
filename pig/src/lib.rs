mod error;
pub mod player;
pub mod simulation;

use std::str::FromStr;
use std::time::Duration;

pub use error::PigError;
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::{Display, EnumIter};

/// Wall-clock budget of a timed match when none is configured.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub sides: u8,
    pub target_score: u32,
    pub computer_hold_cap: u32,
    /// `None` plays an untimed match.
    pub time_budget: Option<Duration>,
}

impl Rule {
    pub fn validate(&self) -> Result<(), PigError> {
        if self.sides < 2 {
            return Err(PigError::InvalidRule(format!(
                "sides must be at least 2, got {}",
                self.sides
            )));
        }
        if self.target_score == 0 {
            return Err(PigError::InvalidRule(String::from(
                "target_score must be positive",
            )));
        }
        if self.computer_hold_cap == 0 {
            return Err(PigError::InvalidRule(String::from(
                "computer_hold_cap must be positive",
            )));
        }
        Ok(())
    }

    /// The rules as shown to players at the start of a match.
    pub fn rules_text(&self) -> String {
        format!(
            "The goal of Pig is to reach {} points before the other player.\n\
             During your turn you may roll the die until either a 1 is rolled or until you choose to hold.\n\
             Holding scores the sum of rolls for that round. If a 1 is rolled, no points are received.",
            self.target_score
        )
    }

    /// A running total that reaches this value makes the computer hold.
    pub fn computer_hold_threshold(&self, banked_score: u32) -> u32 {
        self.computer_hold_cap
            .min(self.target_score.saturating_sub(banked_score))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            sides: 6,
            target_score: 100,
            computer_hold_cap: 25,
            time_budget: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum PlayerKind {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "computer")]
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Roll,
    Hold,
}

impl FromStr for Decision {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" => Ok(Decision::Roll),
            "h" | "hold" => Ok(Decision::Hold),
            _ => Err(PigError::InvalidDecision(String::from(s.trim()))),
        }
    }
}

/// One of the two places at the table. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Seat {
    #[strum(to_string = "Player 1")]
    Player1,
    #[strum(to_string = "Player 2")]
    Player2,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn can_parse_decision_tokens() {
        assert_eq!("r".parse::<Decision>().unwrap(), Decision::Roll);
        assert_eq!(" Hold\n".parse::<Decision>().unwrap(), Decision::Hold);
        assert_eq!("ROLL".parse::<Decision>().unwrap(), Decision::Roll);
        assert!(matches!(
            "x".parse::<Decision>(),
            Err(PigError::InvalidDecision(token)) if token == "x"
        ));
        assert!("".parse::<Decision>().is_err());
    }

    #[test]
    fn can_convert_player_kind() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!("computer".parse::<PlayerKind>().unwrap(), PlayerKind::Computer);
        assert_eq!(PlayerKind::Computer.to_string(), "computer");
        assert!("robot".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn computer_threshold_is_capped_near_target() {
        let rule = Rule::default();
        assert_eq!(rule.computer_hold_threshold(0), 25);
        assert_eq!(rule.computer_hold_threshold(75), 25);
        assert_eq!(rule.computer_hold_threshold(80), 20);
        assert_eq!(rule.computer_hold_threshold(99), 1);
    }

    #[test]
    fn seats_alternate() {
        let seats: Vec<Seat> = Seat::iter().collect();
        assert_eq!(seats, vec![Seat::Player1, Seat::Player2]);
        assert_eq!(Seat::Player1.other(), Seat::Player2);
        assert_eq!(Seat::Player2.other().index(), 0);
        assert_eq!(Seat::Player2.to_string(), "Player 2");
    }

    #[test]
    fn should_reject_invalid_rule() {
        let mut rule = Rule::default();
        assert!(rule.validate().is_ok());
        rule.sides = 1;
        assert!(rule.validate().is_err());
        rule.sides = 6;
        rule.target_score = 0;
        assert!(rule.validate().is_err());
        rule.target_score = 100;
        rule.computer_hold_cap = 0;
        assert!(matches!(
            rule.validate(),
            Err(PigError::InvalidRule(reason)) if reason.contains("computer_hold_cap")
        ));
    }
}
