pub mod die;
#[cfg(test)]
pub(crate) mod testing;
pub mod turn;

use std::time::{Duration, Instant};

use crate::{player::Player, Decision, PigError, Rule, Seat};
use pig_macros::allowed_phase;

use self::{die::Die, turn::Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    P1Turn,
    P2Turn,
    Finished { winner: Seat, reason: EndReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    TargetReached,
    TimeUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Seat,
    pub reason: EndReason,
    /// Indexed by `Seat::index`.
    pub scores: [u32; 2],
    pub turns_played: u32,
}

/// Measures how long the match has been running.
pub trait Stopwatch {
    fn elapsed(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started_at: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        WallClock {
            started_at: Instant::now(),
        }
    }
}

impl Stopwatch for WallClock {
    fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Plays a match of Pig between two players. Scores live here, never in the
/// players.
///
/// The match ends as soon as the player who just finished a turn reaches the
/// target score, and that player wins. With a time budget, the clock is
/// checked before every turn; once the budget is used up the pending turn is
/// skipped and player 1 wins only with a strictly higher score.
pub struct Game {
    rule: Rule,
    die: Die,
    scores: [u32; 2],
    current_phase: MatchPhase,
    turns_played: u32,
    stopwatch: Option<Box<dyn Stopwatch>>,
}

impl Game {
    pub fn new(rule: &Rule, die: Die) -> Self {
        Self {
            rule: *rule,
            die,
            scores: [0, 0],
            current_phase: MatchPhase::P1Turn,
            turns_played: 0,
            stopwatch: None,
        }
    }

    /// Uses the given stopwatch instead of starting a wall clock when play
    /// begins. Only consulted when the rule has a time budget.
    pub fn with_stopwatch(mut self, stopwatch: Box<dyn Stopwatch>) -> Self {
        self.stopwatch = Some(stopwatch);
        self
    }

    /// Plays turns until the match is finished and returns its outcome.
    /// Can be called at P1Turn or P2Turn phase.
    #[allowed_phase(MatchPhase::P1Turn | MatchPhase::P2Turn)]
    pub fn play<'a, H: GameEventHandler + ?Sized>(
        &mut self,
        player1: &'a mut dyn Player,
        player2: &'a mut dyn Player,
        handler: &mut H,
    ) -> Result<GameOutcome, PigError> {
        handler.on_game_begin(&self.rule, [player1.name(), player2.name()]);
        if self.rule.time_budget.is_some() && self.stopwatch.is_none() {
            self.stopwatch = Some(Box::new(WallClock::start()));
        }

        let outcome = loop {
            let player = match self.current_phase {
                MatchPhase::P1Turn => &mut *player1,
                MatchPhase::P2Turn => &mut *player2,
                MatchPhase::Finished { winner, reason } => break self.outcome(winner, reason),
            };
            if self.time_is_up() {
                handler.on_time_up();
                self.stop_for_time()?;
                continue;
            }
            self.play_turn(player, handler)?;
        };

        tracing::info!(
            winner = %outcome.winner,
            reason = ?outcome.reason,
            score1 = outcome.scores[0],
            score2 = outcome.scores[1],
            turns = outcome.turns_played,
            "match finished"
        );
        handler.on_game_end(&outcome);
        Ok(outcome)
    }

    /// Can be called at P1Turn or P2Turn phase.
    /// Plays one turn for the seat whose turn it is and banks the points.
    /// Returns the banked points.
    #[allowed_phase(MatchPhase::P1Turn | MatchPhase::P2Turn)]
    pub fn play_turn<P, H>(&mut self, player: &mut P, handler: &mut H) -> Result<u32, PigError>
    where
        P: Player + ?Sized,
        H: GameEventHandler + ?Sized,
    {
        let seat = self.get_current_seat().unwrap_or(Seat::Player1);
        let banked_score = self.scores[seat.index()];
        let points = turn::run_turn(&self.rule, player, banked_score, &mut self.die, handler)?;

        let score = banked_score + points;
        self.scores[seat.index()] = score;
        self.turns_played += 1;
        tracing::info!(%seat, points, score, "turn finished");
        handler.on_turn_end(player.name(), score);

        self.current_phase = if score >= self.rule.target_score {
            MatchPhase::Finished {
                winner: seat,
                reason: EndReason::TargetReached,
            }
        } else {
            match seat.other() {
                Seat::Player1 => MatchPhase::P1Turn,
                Seat::Player2 => MatchPhase::P2Turn,
            }
        };
        Ok(points)
    }

    /// Can be called at P1Turn or P2Turn phase.
    /// Ends the match without playing the pending turn. Player 1 wins only with
    /// a strictly higher score.
    #[allowed_phase(MatchPhase::P1Turn | MatchPhase::P2Turn)]
    pub fn stop_for_time(&mut self) -> Result<(), PigError> {
        let winner = if self.scores[0] > self.scores[1] {
            Seat::Player1
        } else {
            Seat::Player2
        };
        tracing::info!(%winner, "time budget used up");
        self.current_phase = MatchPhase::Finished {
            winner,
            reason: EndReason::TimeUp,
        };
        Ok(())
    }

    /// Checks the time budget. Always false for an untimed match.
    pub fn time_is_up(&self) -> bool {
        match (self.rule.time_budget, &self.stopwatch) {
            (Some(budget), Some(stopwatch)) => stopwatch.elapsed() >= budget,
            _ => false,
        }
    }

    pub fn get_phase(&self) -> MatchPhase {
        self.current_phase
    }

    /// Returns None once the match is finished.
    pub fn get_current_seat(&self) -> Option<Seat> {
        match self.current_phase {
            MatchPhase::P1Turn => Some(Seat::Player1),
            MatchPhase::P2Turn => Some(Seat::Player2),
            MatchPhase::Finished { .. } => None,
        }
    }

    pub fn get_score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    pub fn get_turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn get_rule(&self) -> &Rule {
        &self.rule
    }

    pub fn get_outcome(&self) -> Option<GameOutcome> {
        match self.current_phase {
            MatchPhase::Finished { winner, reason } => Some(self.outcome(winner, reason)),
            _ => None,
        }
    }

    fn outcome(&self, winner: Seat, reason: EndReason) -> GameOutcome {
        GameOutcome {
            winner,
            reason,
            scores: self.scores,
            turns_played: self.turns_played,
        }
    }
}

/// Receives every narrated event of a match, in order.
pub trait GameEventHandler {
    fn on_game_begin(&mut self, rule: &Rule, names: [&str; 2]);
    fn on_turn_begin(&mut self, player: &str, banked_score: u32);
    fn on_invalid_decision(&mut self, player: &str, token: &str);
    fn on_decision(&mut self, player: &str, decision: Decision);
    fn on_roll(&mut self, player: &str, turn: &Turn);
    fn on_bust(&mut self, player: &str);
    fn on_hold(&mut self, player: &str, points: u32, forced: bool);
    fn on_turn_end(&mut self, player: &str, score: u32);
    fn on_time_up(&mut self);
    fn on_game_end(&mut self, outcome: &GameOutcome);
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHandler;

impl GameEventHandler for SilentHandler {
    fn on_game_begin(&mut self, _: &Rule, _: [&str; 2]) {}
    fn on_turn_begin(&mut self, _: &str, _: u32) {}
    fn on_invalid_decision(&mut self, _: &str, _: &str) {}
    fn on_decision(&mut self, _: &str, _: Decision) {}
    fn on_roll(&mut self, _: &str, _: &Turn) {}
    fn on_bust(&mut self, _: &str) {}
    fn on_hold(&mut self, _: &str, _: u32, _: bool) {}
    fn on_turn_end(&mut self, _: &str, _: u32) {}
    fn on_time_up(&mut self) {}
    fn on_game_end(&mut self, _: &GameOutcome) {}
}
