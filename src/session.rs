use crate::difficulty::Difficulty;
use crate::history::History;
use crate::round::Round;

/// Everything one play attempt accumulates.
///
/// Counters are cumulative across rounds and only a reset zeroes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub round: u32,
    pub round_state: Round,
    pub playing: bool,
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub hits: u32,
    pub misses: u32,
    pub total_reaction_ms: f64,
    pub best_reaction_ms: Option<f64>,
    pub last_reaction_ms: Option<f64>,
    pub combo: u32,
    pub max_combo: u32,
    pub history: History,
    pub all_clear: bool,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            round: 1,
            round_state: Round::new(1),
            playing: false,
            difficulty,
            attempts: 0,
            hits: 0,
            misses: 0,
            total_reaction_ms: 0.0,
            best_reaction_ms: None,
            last_reaction_ms: None,
            combo: 0,
            max_combo: 0,
            history: History::new(),
            all_clear: false,
        }
    }

    /// Zero every counter. The difficulty survives, and the round number does too when `keep_round`.
    pub fn reset(&mut self, keep_round: bool) {
        let round = if keep_round { self.round } else { 1 };
        let mut history = std::mem::take(&mut self.history);
        history.clear();
        *self = Self {
            round,
            round_state: Round::new(round),
            history,
            ..Self::new(self.difficulty)
        };
    }

    pub fn record_hit(&mut self, reaction_ms: f64) {
        self.hits += 1;
        self.total_reaction_ms += reaction_ms;
        self.best_reaction_ms = Some(match self.best_reaction_ms {
            Some(best) => best.min(reaction_ms),
            None => reaction_ms,
        });
        self.last_reaction_ms = Some(reaction_ms);
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.combo = 0;
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
        self.round_state = Round::new(self.round);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;

    #[test]
    fn test_new_session_is_blank() {
        let session = Session::new(Difficulty::Calm);
        assert_eq!(session.round, 1);
        assert_eq!(session.round_state.enemy_max_hp, 10);
        assert!(!session.playing);
        assert_eq!(session.difficulty, Difficulty::Calm);
        assert_eq!(session.best_reaction_ms, None);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_record_hit_tracks_best_and_combo() {
        let mut session = Session::default();
        session.record_hit(400.0);
        session.record_hit(250.0);
        session.record_hit(300.0);

        assert_eq!(session.hits, 3);
        assert_eq!(session.total_reaction_ms, 950.0);
        assert_eq!(session.best_reaction_ms, Some(250.0));
        assert_eq!(session.last_reaction_ms, Some(300.0));
        assert_eq!(session.combo, 3);
        assert_eq!(session.max_combo, 3);
    }

    #[test]
    fn test_miss_breaks_combo_but_keeps_max() {
        let mut session = Session::default();
        session.record_hit(300.0);
        session.record_hit(300.0);
        session.record_miss();
        session.record_hit(300.0);

        assert_eq!(session.combo, 1);
        assert_eq!(session.max_combo, 2);
        assert_eq!(session.misses, 1);
    }

    #[test]
    fn test_full_reset() {
        let mut session = Session::new(Difficulty::Intense);
        session.record_hit(200.0);
        session.record_miss();
        session.attempts = 2;
        session.history.push(HistoryEntry::miss(2));
        session.advance_round();
        session.playing = true;

        session.reset(false);

        assert_eq!(session.round, 1);
        assert_eq!(session.round_state, Round::new(1));
        assert_eq!((session.hits, session.misses, session.attempts), (0, 0, 0));
        assert_eq!(session.best_reaction_ms, None);
        assert_eq!(session.combo, 0);
        assert!(session.history.is_empty());
        assert!(!session.playing);
        assert_eq!(session.difficulty, Difficulty::Intense);
    }

    #[test]
    fn test_reset_keeping_round() {
        let mut session = Session::default();
        session.advance_round();
        session.advance_round();
        session.round_state.land_hit();
        session.record_hit(123.0);
        session.history.push(HistoryEntry::hit(1, 123.0, 1));

        session.reset(true);

        assert_eq!(session.round, 3);
        assert_eq!(session.round_state.enemy_current_hp, 14);
        assert_eq!(session.hits, 0);
        assert!(session.history.is_empty());
    }
}
