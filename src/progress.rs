use crate::round::{enemy_hp_for_round, MAX_ROUNDS};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RoundStatus {
    Completed,
    /// The round being fought while cues are running
    Current,
    /// The round being fought while the session is paused or idle
    Pending,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundProgressItem {
    pub label: String,
    pub status: RoundStatus,
    pub caption: String,
}

/// Tracker entries for every round of a run
pub fn round_progress(session: &Session) -> Vec<RoundProgressItem> {
    (1..=MAX_ROUNDS)
        .map(|number| {
            let finished_run = session.round > MAX_ROUNDS || session.all_clear;
            let status = if number < session.round || (number == MAX_ROUNDS && finished_run) {
                RoundStatus::Completed
            } else if number == session.round {
                if session.playing {
                    RoundStatus::Current
                } else {
                    RoundStatus::Pending
                }
            } else {
                RoundStatus::Upcoming
            };

            let caption = match status {
                RoundStatus::Completed => "defeated".to_string(),
                RoundStatus::Current | RoundStatus::Pending => format!(
                    "{}/{} HP",
                    session.round_state.enemy_current_hp, session.round_state.enemy_max_hp
                ),
                RoundStatus::Upcoming => format!("{} HP", enemy_hp_for_round(number)),
            };

            RoundProgressItem {
                label: format!("R{number}"),
                status,
                caption,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(items: &[RoundProgressItem]) -> Vec<RoundStatus> {
        items.iter().map(|i| i.status).collect()
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::default();
        let items = round_progress(&session);

        assert_eq!(items.len(), MAX_ROUNDS as usize);
        assert_eq!(items[0].label, "R1");
        assert_eq!(items[0].status, RoundStatus::Pending);
        assert_eq!(items[0].caption, "10/10 HP");
        let captions: Vec<&str> = items[1..].iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["12 HP", "14 HP", "16 HP", "18 HP"]);
    }

    #[test]
    fn test_mid_run_while_playing() {
        let mut session = Session::default();
        session.advance_round();
        session.advance_round();
        session.playing = true;
        session.round_state.land_hit();

        let items = round_progress(&session);
        use RoundStatus::*;
        assert_eq!(
            statuses(&items),
            vec![Completed, Completed, Current, Upcoming, Upcoming]
        );
        assert_eq!(items[0].caption, "defeated");
        assert_eq!(items[2].caption, "13/14 HP");
    }

    #[test]
    fn test_all_clear_marks_final_round() {
        let mut session = Session::default();
        for _ in 1..MAX_ROUNDS {
            session.advance_round();
        }
        while !session.round_state.is_cleared() {
            session.round_state.land_hit();
        }
        session.all_clear = true;

        let items = round_progress(&session);
        assert!(items.iter().all(|i| i.status == RoundStatus::Completed));
        assert!(items.iter().all(|i| i.caption == "defeated"));
    }

    #[test]
    fn test_status_names() {
        assert_eq!(RoundStatus::Pending.to_string(), "pending");
        assert_eq!(RoundStatus::Upcoming.to_string(), "upcoming");
    }
}
