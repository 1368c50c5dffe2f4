use pig::simulation::turn::{Turn, TurnPhase};
use pig::simulation::{EndReason, GameEventHandler, GameOutcome};
use pig::{Decision, Rule};

/// Narrates the match on stdout, turn by turn.
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    names: [String; 2],
}

impl GameEventHandler for Narrator {
    fn on_game_begin(&mut self, rule: &Rule, names: [&str; 2]) {
        self.names = names.map(String::from);
        println!("{:^93}", "***Pig***");
        println!("{}", rule.rules_text());
        if let Some(budget) = rule.time_budget {
            println!("This match is timed: {} seconds.", budget.as_secs());
        }
        println!();
    }

    fn on_turn_begin(&mut self, player: &str, banked_score: u32) {
        println!("{}'s turn. Banked score: {}.", player, banked_score);
    }

    // The re-prompt tells the player already.
    fn on_invalid_decision(&mut self, _: &str, _: &str) {}

    fn on_decision(&mut self, _: &str, _: Decision) {}

    fn on_roll(&mut self, player: &str, turn: &Turn) {
        println!("...");
        println!("{} rolled a {}.", player, turn.get_last_roll().unwrap_or(0));
        if turn.get_phase() == TurnPhase::Busted {
            return;
        }
        println!(
            "The running total for this turn is {}.",
            turn.get_running_total()
        );
        if turn.get_phase() == TurnPhase::AwaitDecision {
            println!("{}'s total score is {}.", player, turn.get_projected_score());
        }
    }

    fn on_bust(&mut self, player: &str) {
        println!("{} gets no points this turn.", player);
    }

    fn on_hold(&mut self, player: &str, points: u32, forced: bool) {
        if !forced {
            println!("...");
        }
        println!("{}, you've added {} to your score.", player, points);
    }

    fn on_turn_end(&mut self, _: &str, score: u32) {
        println!("Your total score is {}.", score);
        println!();
    }

    fn on_time_up(&mut self) {
        println!("Time's up!");
    }

    fn on_game_end(&mut self, outcome: &GameOutcome) {
        if outcome.reason == EndReason::TimeUp {
            println!(
                "Final scores: {} {}, {} {}.",
                self.names[0], outcome.scores[0], self.names[1], outcome.scores[1]
            );
        }
        println!(
            "Congratulations {}! You've won!",
            self.names[outcome.winner.index()]
        );
    }
}
