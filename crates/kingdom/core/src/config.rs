/// Policy for combining bonuses of structures with different names.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StackingMode {
    /// Only copies of the same structure add up; distinct structures combine by maximum.
    #[default]
    SameStructuresStack,
    /// Every structure adds up, capped at the tier's max item bonus.
    AllStructuresStack,
}

/// Rules constants and tunable defaults for settlement evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KingdomConfig {
    /// Stacking policy used when the caller does not pick one.
    pub stacking_mode: StackingMode,
}

impl KingdomConfig {
    // ===== rules constants =====
    /// Ceiling of any single item group's bonus.
    pub const MAX_ITEM_LEVEL_BONUS: i32 = 3;
    /// Item-level penalty applied unless a structure prevents it.
    pub const DEFAULT_ITEM_LEVEL_PENALTY: i32 = -2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STACKING_MODE: StackingMode = StackingMode::SameStructuresStack;

    pub fn new() -> Self {
        Self {
            stacking_mode: Self::DEFAULT_STACKING_MODE,
        }
    }

    pub fn with_stacking_mode(stacking_mode: StackingMode) -> Self {
        Self { stacking_mode }
    }
}

impl Default for KingdomConfig {
    fn default() -> Self {
        Self::new()
    }
}
