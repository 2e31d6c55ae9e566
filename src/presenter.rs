use crate::celebration::Celebration;
use crate::history::HistoryItem;
use crate::progress::RoundProgressItem;
use crate::scoring::{Hud, StatRow};

/// Enemy panel contents
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyView {
    pub round: u32,
    pub current_hp: u32,
    pub max_hp: u32,
}

impl EnemyView {
    pub fn name(&self) -> String {
        format!("Round {} Enemy", self.round)
    }

    pub fn hp_text(&self) -> String {
        format!("HP: {} / {}", self.current_hp, self.max_hp)
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.current_hp as f64 / self.max_hp as f64
        }
    }

    /// Enemies at or under 30% HP get a warning look
    pub fn is_low(&self) -> bool {
        self.hp_ratio() <= 0.3
    }
}

/// Rendering surface the engine drives after every state change.
///
/// Implementations only display what they are given; they never call back
/// into the engine.
pub trait Presenter {
    fn set_stats(&mut self, rows: &[StatRow]);
    fn set_status(&mut self, text: &str);
    /// An empty slice means "no records yet"
    fn set_history(&mut self, items: &[HistoryItem]);
    fn set_round_progress(&mut self, items: &[RoundProgressItem]);

    fn show_celebration(&mut self, _celebration: &Celebration) {}
    fn hide_celebration(&mut self) {}
    fn set_hud(&mut self, _hud: &Hud) {}
    /// The lit digit, or None when no cue is showing
    fn set_cue(&mut self, _digit: Option<u8>) {}
    fn set_enemy(&mut self, _enemy: &EnemyView) {}
}

/// Presenter that keeps the latest value of every surface, plus a log of
/// status lines and overlays for assertions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingPresenter {
    pub stats: Vec<StatRow>,
    pub status: String,
    pub history: Vec<HistoryItem>,
    pub round_progress: Vec<RoundProgressItem>,
    pub celebration: Option<Celebration>,
    pub hud: Hud,
    pub cue: Option<u8>,
    pub enemy: Option<EnemyView>,
    /// Every status line in the order it was set
    pub status_log: Vec<String>,
    pub celebrations_shown: Vec<Celebration>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stat(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl Presenter for RecordingPresenter {
    fn set_stats(&mut self, rows: &[StatRow]) {
        self.stats = rows.to_vec();
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.status_log.push(text.to_string());
    }

    fn set_history(&mut self, items: &[HistoryItem]) {
        self.history = items.to_vec();
    }

    fn set_round_progress(&mut self, items: &[RoundProgressItem]) {
        self.round_progress = items.to_vec();
    }

    fn show_celebration(&mut self, celebration: &Celebration) {
        self.celebration = Some(celebration.clone());
        self.celebrations_shown.push(celebration.clone());
    }

    fn hide_celebration(&mut self) {
        self.celebration = None;
    }

    fn set_hud(&mut self, hud: &Hud) {
        self.hud = hud.clone();
    }

    fn set_cue(&mut self, digit: Option<u8>) {
        self.cue = digit;
    }

    fn set_enemy(&mut self, enemy: &EnemyView) {
        self.enemy = Some(enemy.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_view_text() {
        let enemy = EnemyView {
            round: 2,
            current_hp: 3,
            max_hp: 12,
        };
        assert_eq!(enemy.name(), "Round 2 Enemy");
        assert_eq!(enemy.hp_text(), "HP: 3 / 12");
        assert!(enemy.is_low());
    }

    #[test]
    fn test_enemy_full_hp_is_not_low() {
        let enemy = EnemyView {
            round: 1,
            current_hp: 10,
            max_hp: 10,
        };
        assert!(!enemy.is_low());
        assert_eq!(enemy.hp_ratio(), 1.0);
    }

    #[test]
    fn test_recording_presenter_keeps_latest() {
        let mut p = RecordingPresenter::new();
        p.set_status("one");
        p.set_status("two");
        p.set_stats(&[StatRow::new("Hits", "3")]);

        assert_eq!(p.status, "two");
        assert_eq!(p.status_log, vec!["one", "two"]);
        assert_eq!(p.stat("Hits"), Some("3"));
        assert_eq!(p.stat("Avg"), None);
    }

    #[test]
    fn test_recording_presenter_celebration_toggle() {
        let mut p = RecordingPresenter::new();
        p.show_celebration(&Celebration::round_clear(1));
        assert!(p.celebration.is_some());
        p.hide_celebration();
        assert!(p.celebration.is_none());
        assert_eq!(p.celebrations_shown.len(), 1);
    }
}
