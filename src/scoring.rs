//! Derived statistics, recomputed from the session on demand.

use crate::session::Session;

/// Reaction time at which the HUD meter bottoms out, in milliseconds
const METER_SCALE_MS: f64 = 600.0;
const METER_CEILING: f64 = 1.2;

/// One labelled scoreboard cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub value: String,
}

impl StatRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Percentage of presses that hit, or None before the first press
pub fn hit_rate(hits: u32, misses: u32) -> Option<u32> {
    let total = hits + misses;
    if total == 0 {
        return None;
    }
    Some((100.0 * hits as f64 / total as f64).round() as u32)
}

/// Mean reaction time in whole milliseconds, or None before the first hit
pub fn avg_reaction_ms(total_reaction_ms: f64, hits: u32) -> Option<u64> {
    if hits == 0 {
        return None;
    }
    Some((total_reaction_ms / hits as f64).round() as u64)
}

/// Urgency meter fill: faster reactions give a fuller bar
pub fn hud_fill(last_reaction_ms: f64) -> f64 {
    let normalized = (last_reaction_ms / METER_SCALE_MS).min(METER_CEILING);
    (METER_CEILING - normalized).max(0.0)
}

/// Per-round accuracy as shown at a round clear.
///
/// Misses are only tracked per session, so this attributes every miss not
/// explained by earlier rounds' hits to the current round. Display only.
pub fn round_accuracy(session: &Session) -> u32 {
    let round_hits = session.round_state.hits_this_round;
    let earlier_hits = session.hits.saturating_sub(round_hits);
    let round_misses = session.misses.saturating_sub(earlier_hits);
    hit_rate(round_hits, round_misses).unwrap_or(0)
}

fn format_ms(ms: Option<f64>) -> String {
    ms.map_or_else(|| "-".to_string(), |v| format!("{v:.0} ms"))
}

/// Scoreboard rows in display order
pub fn scoreboard(session: &Session) -> Vec<StatRow> {
    let round = &session.round_state;
    vec![
        StatRow::new("Stage", format!("Round {}", session.round)),
        StatRow::new(
            "Enemy HP",
            format!("{}/{}", round.enemy_current_hp, round.enemy_max_hp),
        ),
        StatRow::new("Hits", session.hits.to_string()),
        StatRow::new(
            "Avg",
            avg_reaction_ms(session.total_reaction_ms, session.hits)
                .map_or_else(|| "-".to_string(), |v| format!("{v} ms")),
        ),
        StatRow::new("Fastest", format_ms(session.best_reaction_ms)),
        StatRow::new(
            "Hit Rate",
            hit_rate(session.hits, session.misses)
                .map_or_else(|| "-".to_string(), |v| format!("{v}%")),
        ),
    ]
}

/// Final score block shown with the all-clear celebration
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub avg_reaction_ms: Option<u64>,
    pub best_reaction_ms: Option<f64>,
    pub hit_rate: Option<u32>,
    pub max_combo: u32,
}

impl ScoreSummary {
    pub fn from_session(session: &Session) -> Self {
        Self {
            avg_reaction_ms: avg_reaction_ms(session.total_reaction_ms, session.hits),
            best_reaction_ms: session.best_reaction_ms,
            hit_rate: hit_rate(session.hits, session.misses),
            max_combo: session.max_combo,
        }
    }

    pub fn rows(&self) -> Vec<StatRow> {
        vec![
            StatRow::new(
                "Avg reaction",
                format!("{} ms", self.avg_reaction_ms.unwrap_or(0)),
            ),
            StatRow::new("Fastest", format_ms(self.best_reaction_ms)),
            StatRow::new("Hit rate", format!("{}%", self.hit_rate.unwrap_or(0))),
            StatRow::new("Max combo", format!("x{}", self.max_combo)),
        ]
    }
}

/// Heads-up display values that follow every press
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub last_reaction_ms: Option<f64>,
    pub fill: f64,
    pub combo: u32,
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        Self {
            last_reaction_ms: session.last_reaction_ms,
            fill: session.last_reaction_ms.map_or(0.0, hud_fill),
            combo: session.combo,
        }
    }

    pub fn speed_text(&self) -> String {
        self.last_reaction_ms
            .map_or_else(|| "--".to_string(), |ms| format!("{ms:.0} ms"))
    }

    pub fn combo_text(&self) -> String {
        format!("x{}", self.combo)
    }
}
