use std::time::Duration;

use crate::round::MAX_ROUNDS;
use crate::scoring::ScoreSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CelebrationTone {
    Superb,
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationKind {
    RoundClear { round: u32 },
    AllClear,
}

impl CelebrationKind {
    /// How long the overlay stays up before it dismisses itself
    pub fn dismiss_after(&self) -> Duration {
        match self {
            CelebrationKind::RoundClear { .. } => Duration::from_millis(1600),
            CelebrationKind::AllClear => Duration::from_millis(4000),
        }
    }
}

/// Overlay content shown when an enemy goes down
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub kind: CelebrationKind,
    pub title: String,
    pub subtitle: String,
    pub tone: CelebrationTone,
    pub summary: Option<ScoreSummary>,
}

impl Celebration {
    pub fn round_clear(round: u32) -> Self {
        Self {
            kind: CelebrationKind::RoundClear { round },
            title: format!("Round {round} Clear!"),
            subtitle: "Enemy defeated! On to the next round.".to_string(),
            tone: CelebrationTone::Pop,
            summary: None,
        }
    }

    pub fn all_clear(summary: ScoreSummary) -> Self {
        Self {
            kind: CelebrationKind::AllClear,
            title: "All Clear!".to_string(),
            subtitle: format!("All {MAX_ROUNDS} rounds conquered. Great work!"),
            tone: CelebrationTone::Superb,
            summary: Some(summary),
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        self.kind.dismiss_after()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_round_clear_has_no_summary() {
        let c = Celebration::round_clear(2);
        assert_eq!(c.title, "Round 2 Clear!");
        assert_eq!(c.tone, CelebrationTone::Pop);
        assert!(c.summary.is_none());
        assert_eq!(c.dismiss_after(), Duration::from_millis(1600));
    }

    #[test]
    fn test_all_clear_carries_summary() {
        let mut session = Session::default();
        session.record_hit(321.0);
        let c = Celebration::all_clear(ScoreSummary::from_session(&session));

        assert_eq!(c.title, "All Clear!");
        assert_eq!(c.tone, CelebrationTone::Superb);
        assert_eq!(c.dismiss_after(), Duration::from_secs(4));
        let summary = c.summary.expect("all clear should carry a summary");
        assert_eq!(summary.best_reaction_ms, Some(321.0));
    }

    #[test]
    fn test_tone_names() {
        assert_eq!(CelebrationTone::Superb.to_string(), "superb");
        assert_eq!(CelebrationTone::Pop.to_string(), "pop");
    }
}
