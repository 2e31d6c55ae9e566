/// Number of enemy encounters in a full run
pub const MAX_ROUNDS: u32 = 5;

/// HP removed from the enemy by each correct press
pub const DAMAGE_PER_HIT: u32 = 1;

const BASE_HP: u32 = 10;
const HP_PER_ROUND: u32 = 2;
const HP_CAP: u32 = 20;

/// Enemy HP for a round: 10, 12, 14, ... capped at 20
pub fn enemy_hp_for_round(round: u32) -> u32 {
    (BASE_HP + HP_PER_ROUND * round.saturating_sub(1)).min(HP_CAP)
}

/// Hit goal for a round. Round completion is driven by enemy HP, which uses
/// the same curve, so this is informational only.
pub fn goal_for_round(round: u32) -> u32 {
    (BASE_HP + HP_PER_ROUND * round.saturating_sub(1)).min(HP_CAP)
}

/// One enemy encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub goal_count: u32,
    pub enemy_max_hp: u32,
    pub enemy_current_hp: u32,
    pub hits_this_round: u32,
}

impl Round {
    pub fn new(number: u32) -> Self {
        let hp = enemy_hp_for_round(number);
        Self {
            number,
            goal_count: goal_for_round(number),
            enemy_max_hp: hp,
            enemy_current_hp: hp,
            hits_this_round: 0,
        }
    }

    /// Apply one hit. Returns true when this hit brought the enemy down.
    pub fn land_hit(&mut self) -> bool {
        let was_alive = !self.is_cleared();
        self.hits_this_round += 1;
        self.enemy_current_hp = self.enemy_current_hp.saturating_sub(DAMAGE_PER_HIT);
        was_alive && self.is_cleared()
    }

    pub fn is_cleared(&self) -> bool {
        self.enemy_current_hp == 0
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(1)
    }
}
