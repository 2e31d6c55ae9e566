use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tempo preset controlling how long the player waits between cues
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Calm,
    #[default]
    Normal,
    Intense,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Calm, Difficulty::Normal, Difficulty::Intense];

    /// Inclusive (min, max) delay before the next cue lights up, in milliseconds
    pub fn delay_range_ms(&self) -> (u64, u64) {
        match self {
            Difficulty::Calm => (1200, 2000),
            Difficulty::Normal => (850, 1500),
            Difficulty::Intense => (520, 1100),
        }
    }

    /// Next preset in picker order, wrapping around
    pub fn cycle(&self) -> Difficulty {
        match self {
            Difficulty::Calm => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Intense,
            Difficulty::Intense => Difficulty::Calm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_ranges_match_presets() {
        assert_eq!(Difficulty::Calm.delay_range_ms(), (1200, 2000));
        assert_eq!(Difficulty::Normal.delay_range_ms(), (850, 1500));
        assert_eq!(Difficulty::Intense.delay_range_ms(), (520, 1100));
    }

    #[test]
    fn test_ranges_are_ordered() {
        for d in Difficulty::ALL {
            let (min, max) = d.delay_range_ms();
            assert!(min < max, "{d} has an inverted range");
        }
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Calm.to_string(), "Calm");
        assert_eq!(Difficulty::Intense.to_string(), "Intense");
    }

    #[test]
    fn test_cycle_visits_every_preset() {
        let mut d = Difficulty::Calm;
        let mut seen = vec![d];
        for _ in 0..2 {
            d = d.cycle();
            seen.push(d);
        }
        assert_eq!(seen, Difficulty::ALL.to_vec());
        assert_eq!(d.cycle(), Difficulty::Calm);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::Intense).unwrap();
        assert_eq!(json, "\"intense\"");
        let parsed: Difficulty = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(parsed, Difficulty::Calm);
    }
}
