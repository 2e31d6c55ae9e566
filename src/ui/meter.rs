use reaction_dash::scoring::Hud;

/// Largest value the HUD fill can take
pub const METER_MAX: f64 = 1.2;

/// HUD fill mapped onto 0.0..=1.0 for a gauge
pub fn meter_ratio(hud: &Hud) -> f64 {
    (hud.fill / METER_MAX).clamp(0.0, 1.0)
}
