//! Capital influence on the other settlements of a kingdom.

use crate::model::{SkillBonuses, SkillItemBonus, StructureResult};

/// Merges the capital's result into a settlement's result.
///
/// - leadership-activity bonus: the larger of both
/// - `increase_leadership_activities`: always the capital's
/// - unlocked activities: the capital's, followed by the settlement's
/// - skill bonuses: see [`merge_skill_bonuses`]
///
/// Everything else is taken from `settlement` unchanged.
pub fn merge_capital(capital: &StructureResult, settlement: &StructureResult) -> StructureResult {
    StructureResult {
        leadership_activity_bonus: capital
            .leadership_activity_bonus
            .max(settlement.leadership_activity_bonus),
        increase_leadership_activities: capital.increase_leadership_activities,
        unlock_activities: capital
            .unlock_activities
            .iter()
            .chain(&settlement.unlock_activities)
            .cloned()
            .collect(),
        skill_bonuses: merge_skill_bonuses(&capital.skill_bonuses, &settlement.skill_bonuses),
        ..settlement.clone()
    }
}

/// Per skill: the larger flat value, and per activity the larger override.
///
/// Overrides that do not exceed the merged flat value are dropped.
pub fn merge_skill_bonuses(capital: &SkillBonuses, settlement: &SkillBonuses) -> SkillBonuses {
    capital
        .iter()
        .fold(SkillBonuses::new(), |mut merged, (skill, ours)| {
            *merged.get_mut(skill) = merge_skill(ours, settlement.get(skill));
            merged
        })
}

fn merge_skill(capital: &SkillItemBonus, settlement: &SkillItemBonus) -> SkillItemBonus {
    let value = capital.value.max(settlement.value);
    let mut activities = capital.activities.clone();
    for (activity, &bonus) in &settlement.activities {
        activities
            .entry(activity.clone())
            .and_modify(|current| *current = (*current).max(bonus))
            .or_insert(bonus);
    }
    activities.retain(|_, bonus| *bonus > value);
    SkillItemBonus { value, activities }
}
