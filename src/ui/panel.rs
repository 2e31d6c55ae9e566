use reaction_dash::{
    celebration::Celebration,
    history::HistoryItem,
    presenter::{EnemyView, Presenter},
    progress::RoundProgressItem,
    scoring::{Hud, StatRow},
};

/// Latest display state handed over by the engine; the widget renders from it
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub stats: Vec<StatRow>,
    pub status: String,
    pub history: Vec<HistoryItem>,
    pub round_progress: Vec<RoundProgressItem>,
    pub celebration: Option<Celebration>,
    pub hud: Hud,
    pub cue: Option<u8>,
    pub enemy: Option<EnemyView>,
}

impl Presenter for PanelState {
    fn set_stats(&mut self, rows: &[StatRow]) {
        self.stats = rows.to_vec();
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_history(&mut self, items: &[HistoryItem]) {
        self.history = items.to_vec();
    }

    fn set_round_progress(&mut self, items: &[RoundProgressItem]) {
        self.round_progress = items.to_vec();
    }

    fn show_celebration(&mut self, celebration: &Celebration) {
        self.celebration = Some(celebration.clone());
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
    fn test_panel_replaces_lists() {
        let mut panel = PanelState::default();
        panel.set_history(&[HistoryItem {
            label: "#1 Miss".into(),
            value: "Key mismatch".into(),
            tone: None,
        }]);
        assert_eq!(panel.history.len(), 1);

        panel.set_history(&[]);
        assert!(panel.history.is_empty());
    }

    #[test]
    fn test_panel_tracks_cue() {
        let mut panel = PanelState::default();
        panel.set_cue(Some(4));
        assert_eq!(panel.cue, Some(4));
        panel.set_cue(None);
        assert_eq!(panel.cue, None);
    }
}
