//! Item groups and the item-level bonuses a settlement grants per group.

/// Magic tradition or rarity tag attached to an available-items rule.
///
/// Rules without a group contribute to the untyped "other" bonus.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemGroup {
    Alchemical,
    Magical,
    Divine,
    Primal,
    Arcane,
    Occult,
    Luxury,
}

/// Item-level bonuses of a settlement, one signed value per purchasable group.
///
/// Values may be negative: a settlement without a penalty-preventing structure
/// starts at -2 for every group.
///
/// The values form a layered chain:
///
/// ```text
/// other ─┬─ alchemical
///        └─ magical ─┬─ divine ── luxury_divine
///                    ├─ primal ── luxury_primal
///                    ├─ arcane ── luxury_arcane
///                    ├─ occult ── luxury_occult
///                    └─ luxury_magical
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLevelBonuses {
    pub other: i32,
    pub alchemical: i32,
    pub magical: i32,
    pub divine: i32,
    pub primal: i32,
    pub arcane: i32,
    pub occult: i32,
    pub luxury_magical: i32,
    pub luxury_occult: i32,
    pub luxury_arcane: i32,
    pub luxury_primal: i32,
    pub luxury_divine: i32,
}

impl ItemLevelBonuses {
    /// Every group at the same value.
    pub const fn uniform(value: i32) -> Self {
        Self {
            other: value,
            alchemical: value,
            magical: value,
            divine: value,
            primal: value,
            arcane: value,
            occult: value,
            luxury_magical: value,
            luxury_occult: value,
            luxury_arcane: value,
            luxury_primal: value,
            luxury_divine: value,
        }
    }
}
