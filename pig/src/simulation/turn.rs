use pig_macros::allowed_phase;
use strum_macros::Display;

use crate::player::{DecisionPoint, Player};
use crate::{Decision, PigError, Rule};

use super::{die::Die, GameEventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TurnPhase {
    AwaitDecision,
    Rolling,
    Busted,
    Held,
}

/// State of one player's turn. Created when the turn begins and dropped when
/// it ends; only the points it banks outlive it.
#[derive(Debug, Clone)]
pub struct Turn {
    current_phase: TurnPhase,
    running_total: u32,
    banked_score: u32,
    last_roll: Option<u8>,
    forced_bank: bool,
}

impl Turn {
    pub fn new(banked_score: u32) -> Self {
        Turn {
            current_phase: TurnPhase::AwaitDecision,
            running_total: 0,
            banked_score,
            last_roll: None,
            forced_bank: false,
        }
    }

    /// Can be called at AwaitDecision phase.
    /// Holding banks the running total as it is, even 0.
    #[allowed_phase(TurnPhase::AwaitDecision)]
    pub fn apply_decision(&mut self, decision: Decision) -> Result<(), PigError> {
        self.current_phase = match decision {
            Decision::Roll => TurnPhase::Rolling,
            Decision::Hold => TurnPhase::Held,
        };
        Ok(())
    }

    /// Can be called at Rolling phase.
    /// A 1 busts the turn. Otherwise the outcome is added to the running total,
    /// and the turn is banked without asking the player once the running total
    /// or the projected score reaches the target.
    #[allowed_phase(TurnPhase::Rolling)]
    pub fn apply_roll(&mut self, rule: &Rule, outcome: u8) -> Result<(), PigError> {
        self.last_roll = Some(outcome);
        if outcome == 1 {
            self.running_total = 0;
            self.current_phase = TurnPhase::Busted;
            return Ok(());
        }

        self.running_total += outcome as u32;
        if self.running_total >= rule.target_score
            || self.get_projected_score() >= rule.target_score
        {
            self.forced_bank = true;
            self.current_phase = TurnPhase::Held;
        } else {
            self.current_phase = TurnPhase::AwaitDecision;
        }
        Ok(())
    }

    /// Returns the points this turn banks once it is over.
    pub fn points_to_bank(&self) -> Option<u32> {
        match self.current_phase {
            TurnPhase::Held => Some(self.running_total),
            TurnPhase::Busted => Some(0),
            TurnPhase::AwaitDecision | TurnPhase::Rolling => None,
        }
    }

    pub fn get_phase(&self) -> TurnPhase {
        self.current_phase
    }

    pub fn get_running_total(&self) -> u32 {
        self.running_total
    }

    pub fn get_banked_score(&self) -> u32 {
        self.banked_score
    }

    pub fn get_projected_score(&self) -> u32 {
        self.banked_score + self.running_total
    }

    pub fn get_last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub fn is_forced_bank(&self) -> bool {
        self.forced_bank
    }

    fn decision_point(&self) -> DecisionPoint {
        DecisionPoint {
            running_total: self.running_total,
            banked_score: self.banked_score,
            attempt: 0,
        }
    }
}

/// Plays one turn of `player` to completion and returns the points to bank.
pub fn run_turn<P, H>(
    rule: &Rule,
    player: &mut P,
    banked_score: u32,
    die: &mut Die,
    handler: &mut H,
) -> Result<u32, PigError>
where
    P: Player + ?Sized,
    H: GameEventHandler + ?Sized,
{
    let mut turn = Turn::new(banked_score);
    handler.on_turn_begin(player.name(), banked_score);

    loop {
        match turn.get_phase() {
            TurnPhase::AwaitDecision => {
                let decision = ask_for_decision(rule, player, &turn, handler)?;
                tracing::debug!(
                    player = player.name(),
                    ?decision,
                    running_total = turn.get_running_total(),
                    "decision made"
                );
                handler.on_decision(player.name(), decision);
                turn.apply_decision(decision)?;
            }
            TurnPhase::Rolling => {
                let outcome = die.roll();
                turn.apply_roll(rule, outcome)?;
                tracing::debug!(
                    player = player.name(),
                    outcome,
                    running_total = turn.get_running_total(),
                    phase = %turn.get_phase(),
                    "rolled"
                );
                handler.on_roll(player.name(), &turn);
            }
            TurnPhase::Busted => {
                handler.on_bust(player.name());
                return Ok(0);
            }
            TurnPhase::Held => {
                let points = turn.get_running_total();
                handler.on_hold(player.name(), points, turn.is_forced_bank());
                return Ok(points);
            }
        }
    }
}

/// Asks until the player answers with a valid decision. Invalid answers leave
/// the turn untouched.
fn ask_for_decision<P, H>(
    rule: &Rule,
    player: &mut P,
    turn: &Turn,
    handler: &mut H,
) -> Result<Decision, PigError>
where
    P: Player + ?Sized,
    H: GameEventHandler + ?Sized,
{
    let mut point = turn.decision_point();
    loop {
        match player.decide(rule, &point) {
            Err(PigError::InvalidDecision(token)) => {
                tracing::debug!(player = player.name(), %token, "invalid decision");
                handler.on_invalid_decision(player.name(), &token);
                point.attempt += 1;
            }
            result => return result,
        }
    }
}
