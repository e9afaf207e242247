//! Structure definitions and the bonus rules they carry.
//!
//! A [`Structure`] is static content: the engine reads it, derives new values
//! from it, and never writes back. Duplicates of the same structure are
//! identified by [`Structure::name`].

use super::commodity::CommodityStorage;
use super::item::ItemGroup;
use super::skill::{Activity, Skill};

/// Tag describing what kind of structure a building is.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StructureTrait {
    Building,
    Yard,
    Edifice,
    /// Counts towards the settlement's residential lots.
    Residential,
    Famous,
    Infamous,
}

/// Item bonus to a skill, optionally restricted to a single activity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBonusRule {
    pub skill: Skill,
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub activity: Option<Activity>,
}

impl SkillBonusRule {
    /// Bonus that applies to every check with the skill.
    pub fn skill(skill: Skill, value: i32) -> Self {
        Self {
            skill,
            value,
            activity: None,
        }
    }

    /// Bonus that applies only when the skill is rolled for `activity`.
    pub fn activity(skill: Skill, activity: impl Into<Activity>, value: i32) -> Self {
        Self {
            skill,
            value,
            activity: Some(activity.into()),
        }
    }

    pub fn is_skill_only(&self) -> bool {
        self.activity.is_none()
    }

    #[must_use]
    pub(crate) fn with_value(&self, value: i32) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

/// Item bonus to an activity, whatever skill it is rolled with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityBonusRule {
    pub activity: Activity,
    pub value: i32,
}

impl ActivityBonusRule {
    pub fn new(activity: impl Into<Activity>, value: i32) -> Self {
        Self {
            activity: activity.into(),
            value,
        }
    }
}

/// Raises the item level purchasable in the settlement.
///
/// `maximum_stacks` caps how far copies of the same structure may stack this
/// rule; without it duplicates add up freely.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailableItemsRule {
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub group: Option<ItemGroup>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maximum_stacks: Option<i32>,
}

impl AvailableItemsRule {
    /// Untyped bonus, contributing to "other".
    pub fn untyped(value: i32) -> Self {
        Self {
            value,
            group: None,
            maximum_stacks: None,
        }
    }

    pub fn group(group: ItemGroup, value: i32) -> Self {
        Self {
            value,
            group: Some(group),
            maximum_stacks: None,
        }
    }

    #[must_use]
    pub fn with_maximum_stacks(mut self, maximum_stacks: i32) -> Self {
        self.maximum_stacks = Some(maximum_stacks);
        self
    }
}

/// Plain numeric bonus (settlement events, leadership activities).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRule {
    pub value: i32,
}

impl ValueRule {
    pub const fn new(value: i32) -> Self {
        Self { value }
    }
}

/// A building definition contributing rules to a settlement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Structure {
    /// Identity key; copies of a structure share a name.
    pub name: String,
    pub traits: Vec<StructureTrait>,
    /// Lots occupied; `None` means one lot.
    pub lots: Option<u32>,
    pub is_bridge: bool,
    pub prevent_item_level_penalty: bool,
    pub enable_capital_investment: bool,
    pub increase_leadership_activities: bool,
    pub consumption_reduction: Option<u32>,
    pub storage: CommodityStorage,
    pub notes: Option<String>,
    pub unlock_activities: Vec<Activity>,
    pub skill_bonus_rules: Vec<SkillBonusRule>,
    pub activity_bonus_rules: Vec<ActivityBonusRule>,
    pub available_items_rules: Vec<AvailableItemsRule>,
    pub settlement_event_rules: Vec<ValueRule>,
    pub leadership_activity_rules: Vec<ValueRule>,
}

impl Structure {
    /// Creates an empty structure with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Lots occupied, defaulting to one.
    pub fn lot_count(&self) -> u32 {
        self.lots.unwrap_or(1)
    }

    pub fn has_trait(&self, tag: StructureTrait) -> bool {
        self.traits.contains(&tag)
    }

    pub fn is_residential(&self) -> bool {
        self.has_trait(StructureTrait::Residential)
    }

    // ===== builder helpers =====

    #[must_use]
    pub fn with_trait(mut self, tag: StructureTrait) -> Self {
        self.traits.push(tag);
        self
    }

    #[must_use]
    pub fn with_lots(mut self, lots: u32) -> Self {
        self.lots = Some(lots);
        self
    }

    #[must_use]
    pub fn with_bridge(mut self) -> Self {
        self.is_bridge = true;
        self
    }

    #[must_use]
    pub fn with_item_level_penalty_prevented(mut self) -> Self {
        self.prevent_item_level_penalty = true;
        self
    }

    #[must_use]
    pub fn with_capital_investment(mut self) -> Self {
        self.enable_capital_investment = true;
        self
    }

    #[must_use]
    pub fn with_increased_leadership_activities(mut self) -> Self {
        self.increase_leadership_activities = true;
        self
    }

    #[must_use]
    pub fn with_consumption_reduction(mut self, reduction: u32) -> Self {
        self.consumption_reduction = Some(reduction);
        self
    }

    #[must_use]
    pub fn with_storage(mut self, storage: CommodityStorage) -> Self {
        self.storage = storage;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_unlocked_activity(mut self, activity: impl Into<Activity>) -> Self {
        self.unlock_activities.push(activity.into());
        self
    }

    #[must_use]
    pub fn with_skill_bonus(mut self, rule: SkillBonusRule) -> Self {
        self.skill_bonus_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_activity_bonus(mut self, rule: ActivityBonusRule) -> Self {
        self.activity_bonus_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_available_items(mut self, rule: AvailableItemsRule) -> Self {
        self.available_items_rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_settlement_event_bonus(mut self, value: i32) -> Self {
        self.settlement_event_rules.push(ValueRule::new(value));
        self
    }

    #[must_use]
    pub fn with_leadership_activity_bonus(mut self, value: i32) -> Self {
        self.leadership_activity_rules.push(ValueRule::new(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lots_default_to_one() {
        assert_eq!(Structure::named("Shrine").lot_count(), 1);
        assert_eq!(Structure::named("Castle").with_lots(4).lot_count(), 4);
    }

    #[test]
    fn residential_is_a_trait_tag() {
        let houses = Structure::named("Houses")
            .with_trait(StructureTrait::Building)
            .with_trait(StructureTrait::Residential);
        assert!(houses.is_residential());
        assert!(!Structure::named("Mill").is_residential());
    }

    #[test]
    fn with_value_keeps_scope() {
        let rule = SkillBonusRule::activity(Skill::Trade, "Collect Taxes", 1);
        let scaled = rule.with_value(3);
        assert_eq!(scaled.value, 3);
        assert_eq!(scaled.activity, Some(Activity::from("Collect Taxes")));
        assert!(!scaled.is_skill_only());
    }
}
