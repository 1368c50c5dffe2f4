use super::{turn::Turn, GameEventHandler, GameOutcome};
use crate::{Decision, Rule};

/// Records every event as a short line, for asserting on the narrated sequence.
#[derive(Debug, Default)]
pub(crate) struct RecordingHandler {
    pub events: Vec<String>,
}

impl GameEventHandler for RecordingHandler {
    fn on_game_begin(&mut self, _: &Rule, names: [&str; 2]) {
        self.events.push(format!("begin {} {}", names[0], names[1]));
    }

    fn on_turn_begin(&mut self, player: &str, banked_score: u32) {
        self.events.push(format!("turn {} {}", player, banked_score));
    }

    fn on_invalid_decision(&mut self, player: &str, token: &str) {
        self.events.push(format!("invalid {} {}", player, token));
    }

    fn on_decision(&mut self, player: &str, decision: Decision) {
        self.events.push(format!("decision {} {:?}", player, decision));
    }

    fn on_roll(&mut self, player: &str, turn: &Turn) {
        self.events.push(format!(
            "roll {} {} {}",
            player,
            turn.get_last_roll().unwrap_or(0),
            turn.get_running_total()
        ));
    }

    fn on_bust(&mut self, player: &str) {
        self.events.push(format!("bust {}", player));
    }

    fn on_hold(&mut self, player: &str, points: u32, forced: bool) {
        let kind = if forced { "forced" } else { "hold" };
        self.events.push(format!("{} {} {}", kind, player, points));
    }

    fn on_turn_end(&mut self, player: &str, score: u32) {
        self.events.push(format!("score {} {}", player, score));
    }

    fn on_time_up(&mut self) {
        self.events.push(String::from("time up"));
    }

    fn on_game_end(&mut self, outcome: &GameOutcome) {
        self.events.push(format!(
            "end {} {:?} {} {}",
            outcome.winner, outcome.reason, outcome.scores[0], outcome.scores[1]
        ));
    }
}
