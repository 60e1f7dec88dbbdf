//! Key slots and the stage → slot rotation table.
//!
//! Spreading stages over up to three keys is the only rate-limit mitigation
//! the service has; there is no throttling or backoff.

/// One of the three credential slots of a provider family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    One,
    Two,
    Three,
}

impl KeySlot {
    fn index(self) -> usize {
        match self {
            KeySlot::One => 0,
            KeySlot::Two => 1,
            KeySlot::Three => 2,
        }
    }
}

/// Every LLM call the service makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    JobExtraction,
    Match,
    RoleFit,
    OptimizationPotential,
    CompanyName,
    SelectionProbability,
    ResumeOptimization,
}

pub const KEY_ROTATION: [(Stage, KeySlot); 7] = [
    (Stage::JobExtraction, KeySlot::One),
    (Stage::Match, KeySlot::One),
    (Stage::RoleFit, KeySlot::Two),
    (Stage::OptimizationPotential, KeySlot::Three),
    (Stage::CompanyName, KeySlot::Three),
    (Stage::SelectionProbability, KeySlot::Three),
    (Stage::ResumeOptimization, KeySlot::One),
];

pub fn slot_for(stage: Stage) -> KeySlot {
    KEY_ROTATION
        .iter()
        .find(|(s, _)| *s == stage)
        .map(|(_, slot)| *slot)
        .unwrap_or(KeySlot::One)
}

/// The up-to-three keys supplied for the selected provider. Blank keys are absent.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    slots: [Option<String>; 3],
}

impl ApiKeys {
    pub fn new(key1: Option<String>, key2: Option<String>, key3: Option<String>) -> Self {
        let clean = |k: Option<String>| {
            k.map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        };
        Self {
            slots: [clean(key1), clean(key2), clean(key3)],
        }
    }

    pub fn any(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Key for `stage`; if its slot is empty, the first present key in slot order.
    pub fn for_stage(&self, stage: Stage) -> Option<&str> {
        self.slots[slot_for(stage).index()]
            .as_deref()
            .or_else(|| self.slots.iter().flatten().next().map(String::as_str))
    }
}
