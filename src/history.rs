use std::collections::VecDeque;

/// How many resolved presses the reaction log keeps
pub const HISTORY_CAPACITY: usize = 6;

/// Hits faster than this are highlighted
pub const FAST_REACTION_MS: f64 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    Hit { reaction_ms: f64 },
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum HistoryTone {
    Positive,
    Bright,
    Warn,
}

/// One resolved press in the reaction log
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub sequence: u32,
    pub outcome: PressOutcome,
    pub combo: u32,
}

impl HistoryEntry {
    pub fn hit(sequence: u32, reaction_ms: f64, combo: u32) -> Self {
        Self {
            sequence,
            outcome: PressOutcome::Hit { reaction_ms },
            combo,
        }
    }

    pub fn miss(sequence: u32) -> Self {
        Self {
            sequence,
            outcome: PressOutcome::Miss,
            combo: 0,
        }
    }

    pub fn label(&self) -> String {
        match self.outcome {
            PressOutcome::Hit { reaction_ms } => format!("#{} {:.0}ms", self.sequence, reaction_ms),
            PressOutcome::Miss => format!("#{} Miss", self.sequence),
        }
    }

    pub fn value(&self) -> String {
        match self.outcome {
            PressOutcome::Hit { .. } => format!("Combo x{}", self.combo),
            PressOutcome::Miss => "Key mismatch".to_string(),
        }
    }

    pub fn tone(&self) -> HistoryTone {
        match self.outcome {
            PressOutcome::Hit { reaction_ms } if reaction_ms < FAST_REACTION_MS => {
                HistoryTone::Positive
            }
            PressOutcome::Hit { .. } => HistoryTone::Bright,
            PressOutcome::Miss => HistoryTone::Warn,
        }
    }

    pub fn to_item(&self) -> HistoryItem {
        HistoryItem {
            label: self.label(),
            value: self.value(),
            tone: Some(self.tone()),
        }
    }
}

/// Plain display row handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub label: String,
    pub value: String,
    pub tone: Option<HistoryTone>,
}

/// Newest-first log that drops its oldest entry past capacity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn items(&self) -> Vec<HistoryItem> {
        self.entries.iter().map(HistoryEntry::to_item).collect()
    }
}
