//! Aggregated output of a settlement evaluation.

use std::collections::BTreeMap;

use strum::{EnumCount, IntoEnumIterator};

use super::commodity::CommodityStorage;
use crate::config::KingdomConfig;
use super::item::ItemLevelBonuses;
use super::settlement::SettlementConfig;
use super::skill::{Activity, Skill};

/// Bonus to one skill: a flat value plus stronger per-activity overrides.
///
/// Every entry in `activities` is strictly greater than `value`; overrides that
/// would not beat the flat bonus are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillItemBonus {
    pub value: i32,
    pub activities: BTreeMap<Activity, i32>,
}

impl SkillItemBonus {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            activities: BTreeMap::new(),
        }
    }

    /// Bonus that applies when rolling this skill for `activity`.
    pub fn for_activity(&self, activity: &Activity) -> i32 {
        self.activities
            .get(activity)
            .copied()
            .unwrap_or(self.value)
            .max(self.value)
    }
}

/// Skill bonuses for all sixteen skills.
///
/// Always holds exactly one [`SkillItemBonus`] per [`Skill`], zero-initialised,
/// so lookups are total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillBonuses([SkillItemBonus; Skill::COUNT]);

impl SkillBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> &SkillItemBonus {
        &self.0[skill.index()]
    }

    pub fn get_mut(&mut self, skill: Skill) -> &mut SkillItemBonus {
        &mut self.0[skill.index()]
    }

    /// Iterates skills in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, &SkillItemBonus)> {
        Skill::iter().zip(self.0.iter())
    }
}

/// Aggregated effect of every structure in a settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureResult {
    /// Tier descriptor used for this evaluation.
    pub config: SettlementConfig,
    pub allow_capital_investment: bool,
    /// Structure notes, deduplicated in first-seen order.
    pub notes: Vec<String>,
    pub skill_bonuses: SkillBonuses,
    pub item_level_bonuses: ItemLevelBonuses,
    pub settlement_event_bonus: i32,
    pub leadership_activity_bonus: i32,
    pub storage: CommodityStorage,
    pub increase_leadership_activities: bool,
    pub consumption_reduction: u32,
    /// Base consumption minus reductions, never below zero.
    pub consumption: u32,
    /// Activities unlocked by structures; duplicates are kept.
    pub unlock_activities: Vec<Activity>,
    pub residential_lots: u32,
    pub has_bridge: bool,
    pub lots: u32,
}

impl StructureResult {
    /// What the tier grants with no structures: no bonuses, and every item
    /// group at the default penalty.
    pub fn empty(config: SettlementConfig) -> Self {
        Self {
            consumption: config.consumption,
            config,
            allow_capital_investment: false,
            notes: Vec::new(),
            skill_bonuses: SkillBonuses::new(),
            item_level_bonuses: ItemLevelBonuses::uniform(
                KingdomConfig::DEFAULT_ITEM_LEVEL_PENALTY,
            ),
            settlement_event_bonus: 0,
            leadership_activity_bonus: 0,
            storage: CommodityStorage::new(),
            increase_leadership_activities: false,
            consumption_reduction: 0,
            unlock_activities: Vec::new(),
            residential_lots: 0,
            has_bridge: false,
            lots: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::item_level_bonuses;

    #[test]
    fn empty_result_carries_the_penalty_chain() {
        let empty = StructureResult::empty(SettlementConfig::for_level(1));
        assert_eq!(empty.item_level_bonuses, item_level_bonuses(&[]));
        assert_eq!(empty.item_level_bonuses.luxury_divine, -2);
        assert_eq!(empty.consumption, 1);
    }

    #[test]
    fn every_skill_starts_at_zero() {
        let bonuses = SkillBonuses::new();
        assert_eq!(bonuses.iter().count(), 16);
        for (_, bonus) in bonuses.iter() {
            assert_eq!(bonus.value, 0);
            assert!(bonus.activities.is_empty());
        }
    }

    #[test]
    fn get_mut_addresses_the_right_slot() {
        let mut bonuses = SkillBonuses::new();
        bonuses.get_mut(Skill::Warfare).value = 2;
        assert_eq!(bonuses.get(Skill::Warfare).value, 2);
        assert_eq!(bonuses.get(Skill::Wilderness).value, 0);
        let (skill, bonus) = bonuses.iter().find(|(_, b)| b.value == 2).unwrap();
        assert_eq!(skill, Skill::Warfare);
        assert_eq!(bonus.value, 2);
    }

    #[test]
    fn activity_override_falls_back_to_flat() {
        let mut bonus = SkillItemBonus::new(1);
        bonus.activities.insert(Activity::from("Quell Unrest"), 2);
        assert_eq!(bonus.for_activity(&Activity::from("Quell Unrest")), 2);
        assert_eq!(bonus.for_activity(&Activity::from("Celebrate Holiday")), 1);
    }
}
