pub mod input;

use crate::{Decision, PigError, PlayerKind, Rule, Seat};

use self::input::{ConsoleInput, InputSource};

/// What a player knows when asked to roll or hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionPoint {
    pub running_total: u32,
    pub banked_score: u32,
    /// Number of invalid answers already given at this decision point.
    pub attempt: u32,
}

pub trait Player {
    fn name(&self) -> &str;
    fn kind(&self) -> PlayerKind;
    /// Returns `PigError::InvalidDecision` for input that is neither roll nor
    /// hold. The caller asks again with `attempt` increased.
    fn decide(&mut self, rule: &Rule, point: &DecisionPoint) -> Result<Decision, PigError>;
}

/// Holds as soon as the running total reaches
/// `min(computer_hold_cap, target_score - banked_score)`.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    pub fn new(name: &str) -> Self {
        ComputerPlayer {
            name: String::from(name),
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    fn decide(&mut self, rule: &Rule, point: &DecisionPoint) -> Result<Decision, PigError> {
        if point.running_total < rule.computer_hold_threshold(point.banked_score) {
            Ok(Decision::Roll)
        } else {
            Ok(Decision::Hold)
        }
    }
}

#[derive(Debug, Clone)]
pub struct HumanPlayer<I: InputSource> {
    name: String,
    input: I,
}

impl<I: InputSource> HumanPlayer<I> {
    pub fn new(name: &str, input: I) -> Self {
        HumanPlayer {
            name: String::from(name),
            input,
        }
    }

    pub fn get_input(&self) -> &I {
        &self.input
    }
}

impl<I: InputSource> Player for HumanPlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn decide(&mut self, _: &Rule, point: &DecisionPoint) -> Result<Decision, PigError> {
        let prompt = if point.attempt == 0 {
            format!("{}, please enter 'r' to roll or 'h' to hold >>> ", self.name)
        } else {
            String::from("Invalid entry. Please enter 'r' to roll or 'h' to hold >>> ")
        };
        let token = self.input.read_token(&prompt)?;
        token.parse()
    }
}

/// Builds the player sitting at `seat`. Human players read from the console.
pub fn create_player(kind: PlayerKind, seat: Seat) -> Box<dyn Player> {
    let name = seat.to_string();
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(&name, ConsoleInput)),
        PlayerKind::Computer => Box::new(ComputerPlayer::new(&name)),
    }
}

#[cfg(test)]
mod tests {
    use super::input::ScriptedInput;
    use super::*;

    fn point(running_total: u32, banked_score: u32) -> DecisionPoint {
        DecisionPoint {
            running_total,
            banked_score,
            attempt: 0,
        }
    }

    #[test]
    fn computer_holds_iff_threshold_reached() {
        let rule = Rule::default();
        let mut computer = ComputerPlayer::new("Player 2");
        for banked_score in [0, 50, 74, 75, 80, 90, 99] {
            let threshold = 25.min(100 - banked_score);
            for running_total in 0..40 {
                let expected = if running_total >= threshold {
                    Decision::Hold
                } else {
                    Decision::Roll
                };
                let decision = computer
                    .decide(&rule, &point(running_total, banked_score))
                    .unwrap();
                assert_eq!(decision, expected);
            }
        }
    }

    #[test]
    fn human_reads_decisions_from_input() {
        let rule = Rule::default();
        let mut human = HumanPlayer::new("Player 1", ScriptedInput::new(["r", "hold", "x"]));
        assert_eq!(human.decide(&rule, &point(0, 0)).unwrap(), Decision::Roll);
        assert_eq!(human.decide(&rule, &point(5, 0)).unwrap(), Decision::Hold);
        assert!(matches!(
            human.decide(&rule, &point(0, 0)),
            Err(PigError::InvalidDecision(_))
        ));
        assert!(matches!(
            human.decide(&rule, &point(0, 0)),
            Err(PigError::InputClosed)
        ));
    }

    #[test]
    fn human_prompt_changes_after_invalid_entry() {
        let rule = Rule::default();
        let mut human = HumanPlayer::new("Player 1", ScriptedInput::new(["?", "r"]));
        let mut decision_point = point(0, 0);
        assert!(human.decide(&rule, &decision_point).is_err());
        decision_point.attempt = 1;
        assert!(human.decide(&rule, &decision_point).is_ok());

        let prompts = human.get_input().get_prompts();
        assert!(prompts[0].starts_with("Player 1, please enter"));
        assert!(prompts[1].starts_with("Invalid entry."));
    }

    #[test]
    fn can_create_players_by_kind() {
        let human = create_player(PlayerKind::Human, Seat::Player1);
        assert_eq!(human.kind(), PlayerKind::Human);
        assert_eq!(human.name(), "Player 1");
        let computer = create_player(PlayerKind::Computer, Seat::Player2);
        assert_eq!(computer.kind(), PlayerKind::Computer);
        assert_eq!(computer.name(), "Player 2");
    }
}
