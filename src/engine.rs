use std::time::Instant;

use tracing::{debug, info};

use crate::celebration::Celebration;
use crate::clock::{elapsed_ms, Clock, MonotonicClock};
use crate::difficulty::Difficulty;
use crate::history::HistoryEntry;
use crate::presenter::{EnemyView, Presenter};
use crate::progress::{round_progress, RoundProgressItem};
use crate::rng::{CueRng, ThreadCueRng};
use crate::round::MAX_ROUNDS;
use crate::scoring::{round_accuracy, scoreboard, Hud, ScoreSummary};
use crate::session::Session;
use crate::timer::Timer;

const STATUS_IDLE: &str = "Press start and wait for the light.";
const STATUS_PAUSED: &str = "Paused. Press start for a fresh session.";
const STATUS_TOO_EARLY: &str = "Wait for the light.";
const STATUS_WRONG_KEY: &str = "Oops, wrong key! Try again.";
const STATUS_ALL_CLEAR: &str = "All rounds cleared! Reset to play again.";

/// The currently lit digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCue {
    pub digit: u8,
    pub issued_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not playing; nothing is scheduled
    Idle,
    /// Playing, with a cue scheduled but not yet lit
    AwaitingCue,
    /// A digit is lit and waiting for the matching key
    CueActive,
    /// Final round cleared; only a reset leaves this state
    AllClear,
}

/// What a digit press did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressResult {
    /// Not playing, or not a digit
    Ignored,
    /// Playing but no cue is lit yet
    TooEarly,
    Hit { reaction_ms: f64, round_cleared: bool },
    Miss,
}

/// Owns a play session and drives a presenter through it.
///
/// All mutation happens in the command methods and in `poll`, which the
/// runtime calls on every tick to fire due timers.
#[derive(Debug)]
pub struct ReactionEngine<P: Presenter, C: Clock = MonotonicClock, R: CueRng = ThreadCueRng> {
    session: Session,
    cue: Option<ActiveCue>,
    cue_timer: Timer,
    celebration_timer: Timer,
    presenter: P,
    clock: C,
    rng: R,
}

impl<P: Presenter> ReactionEngine<P> {
    /// Engine wired to the real clock and thread-local randomness
    pub fn with_defaults(presenter: P, difficulty: Difficulty) -> Self {
        Self::new(presenter, MonotonicClock, ThreadCueRng::new(), difficulty)
    }
}

impl<P: Presenter, C: Clock, R: CueRng> ReactionEngine<P, C, R> {
    pub fn new(presenter: P, clock: C, rng: R, difficulty: Difficulty) -> Self {
        let mut engine = Self {
            session: Session::new(difficulty),
            cue: None,
            cue_timer: Timer::new(),
            celebration_timer: Timer::new(),
            presenter,
            clock,
            rng,
        };
        engine.emit_all();
        engine.presenter.hide_celebration();
        engine.presenter.set_status(STATUS_IDLE);
        engine
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_cue(&self) -> Option<ActiveCue> {
        self.cue
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty
    }

    pub fn is_cue_scheduled(&self) -> bool {
        self.cue_timer.is_pending()
    }

    /// When the scheduled cue will light up, if one is pending
    pub fn next_cue_at(&self) -> Option<Instant> {
        self.cue_timer.deadline()
    }

    pub fn phase(&self) -> Phase {
        if self.session.all_clear {
            Phase::AllClear
        } else if !self.session.playing {
            Phase::Idle
        } else if self.cue.is_some() {
            Phase::CueActive
        } else {
            Phase::AwaitingCue
        }
    }

    pub fn round_progress(&self) -> Vec<RoundProgressItem> {
        round_progress(&self.session)
    }

    pub fn score_summary(&self) -> ScoreSummary {
        ScoreSummary::from_session(&self.session)
    }

    /// Begin a fresh session and schedule the first cue
    pub fn start(&mut self) {
        self.reset_state(false);
        self.session.playing = true;
        info!(difficulty = %self.session.difficulty, "session started");

        self.emit_all();
        self.presenter.hide_celebration();
        self.presenter.set_status(&format!(
            "{} mode started! Rest your fingers on the number keys.",
            self.session.difficulty
        ));
        self.schedule_cue();
    }

    /// Pause: nothing is scheduled or lit, counters are kept
    pub fn stop(&mut self) {
        self.cancel_timers();
        self.cue = None;
        self.session.playing = false;
        info!(round = self.session.round, hits = self.session.hits, "session stopped");

        self.presenter.hide_celebration();
        self.presenter.set_cue(None);
        self.emit_progress();
        self.presenter.set_status(STATUS_PAUSED);
    }

    pub fn reset(&mut self, keep_round: bool) {
        self.reset_state(keep_round);
        info!(keep_round, round = self.session.round, "session reset");

        self.emit_all();
        self.presenter.hide_celebration();
        self.presenter.set_status(STATUS_IDLE);
    }

    /// Takes effect from the next scheduled cue
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.difficulty = difficulty;
        debug!(%difficulty, "difficulty changed");
        self.presenter
            .set_status(&format!("{difficulty} mode selected."));
    }

    /// Fire any timers that are due
    pub fn poll(&mut self) {
        let now = self.clock.now();
        if self.celebration_timer.take_due(now) {
            self.presenter.hide_celebration();
        }
        if self.cue_timer.take_due(now) {
            self.present_cue(now);
        }
    }

    pub fn press_digit(&mut self, pressed: u8) -> PressResult {
        if !self.session.playing || pressed > 9 {
            return PressResult::Ignored;
        }
        let Some(cue) = self.cue else {
            self.presenter.set_status(STATUS_TOO_EARLY);
            return PressResult::TooEarly;
        };

        let now = self.clock.now();
        self.session.attempts += 1;

        if pressed == cue.digit {
            let reaction_ms = elapsed_ms(cue.issued_at, now);
            let round_cleared = self.on_hit(reaction_ms);
            PressResult::Hit {
                reaction_ms,
                round_cleared,
            }
        } else {
            self.on_miss(pressed, cue.digit);
            PressResult::Miss
        }
    }

    fn on_hit(&mut self, reaction_ms: f64) -> bool {
        self.session.record_hit(reaction_ms);
        let cleared = self.session.round_state.land_hit();
        self.cue = None;
        self.session.history.push(HistoryEntry::hit(
            self.session.attempts,
            reaction_ms,
            self.session.combo,
        ));
        debug!(
            reaction_ms,
            combo = self.session.combo,
            enemy_hp = self.session.round_state.enemy_current_hp,
            "hit"
        );

        self.presenter.set_cue(None);
        self.emit_enemy();
        self.emit_progress();
        self.emit_stats();
        self.emit_history();
        self.presenter.set_status(&format!("Hit! {reaction_ms:.0} ms"));

        if cleared {
            self.clear_round();
        } else {
            self.schedule_cue();
        }
        cleared
    }

    fn on_miss(&mut self, pressed: u8, expected: u8) {
        self.session.record_miss();
        self.session
            .history
            .push(HistoryEntry::miss(self.session.attempts));
        debug!(pressed, expected, misses = self.session.misses, "miss");

        self.emit_stats();
        self.emit_history();
        self.presenter.set_status(STATUS_WRONG_KEY);
    }

    fn clear_round(&mut self) {
        let round = self.session.round;
        info!(
            round,
            accuracy = round_accuracy(&self.session),
            hits_this_round = self.session.round_state.hits_this_round,
            "round cleared"
        );

        if round >= MAX_ROUNDS {
            self.session.all_clear = true;
            self.session.playing = false;
            self.cue_timer.cancel();
            let celebration = Celebration::all_clear(self.score_summary());
            info!(summary = ?celebration.summary, "all rounds cleared");
            self.celebrate(celebration);
            self.presenter.set_status(STATUS_ALL_CLEAR);
            self.emit_progress();
            return;
        }

        self.celebrate(Celebration::round_clear(round));
        self.session.advance_round();
        self.emit_enemy();
        self.emit_progress();
        self.emit_stats();
        self.presenter.set_status(&format!(
            "Round {} start! A new enemy appears!",
            self.session.round
        ));
        self.schedule_cue();
    }

    fn celebrate(&mut self, celebration: Celebration) {
        let now = self.clock.now();
        self.celebration_timer
            .arm(now, celebration.dismiss_after());
        self.presenter.show_celebration(&celebration);
    }

    fn schedule_cue(&mut self) {
        if !self.session.playing || self.cue.is_some() {
            return;
        }
        let (min, max) = self.session.difficulty.delay_range_ms();
        let delay = self.rng.next_delay(min, max);
        self.cue_timer.cancel();
        self.cue_timer.arm(self.clock.now(), delay);
        debug!(delay_ms = delay.as_millis() as u64, "cue scheduled");
    }

    fn present_cue(&mut self, now: Instant) {
        if !self.session.playing || self.cue.is_some() {
            return;
        }
        let digit = self.rng.next_digit() % 10;
        self.cue = Some(ActiveCue {
            digit,
            issued_at: now,
        });
        debug!(digit, "cue lit");

        self.presenter.set_cue(Some(digit));
        self.presenter.set_status(&format!("Type {digit}!"));
    }

    fn cancel_timers(&mut self) {
        self.cue_timer.cancel();
        self.celebration_timer.cancel();
    }

    fn reset_state(&mut self, keep_round: bool) {
        self.cancel_timers();
        self.cue = None;
        self.session.reset(keep_round);
    }

    fn emit_stats(&mut self) {
        self.presenter.set_stats(&scoreboard(&self.session));
        self.presenter.set_hud(&Hud::from_session(&self.session));
    }

    fn emit_history(&mut self) {
        self.presenter.set_history(&self.session.history.items());
    }

    fn emit_progress(&mut self) {
        self.presenter
            .set_round_progress(&round_progress(&self.session));
    }

    fn emit_enemy(&mut self) {
        let round = &self.session.round_state;
        self.presenter.set_enemy(&EnemyView {
            round: self.session.round,
            current_hp: round.enemy_current_hp,
            max_hp: round.enemy_max_hp,
        });
    }

    fn emit_all(&mut self) {
        self.presenter.set_cue(self.cue.map(|c| c.digit));
        self.emit_stats();
        self.emit_history();
        self.emit_enemy();
        self.emit_progress();
    }
}
