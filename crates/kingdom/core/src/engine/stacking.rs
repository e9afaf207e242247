//! Capped summation of skill bonuses across distinct structures.
//!
//! Used only under [`StackingMode::AllStructuresStack`](crate::StackingMode).
//! The reduction runs in a fixed order:
//!
//! ```text
//! skill-only totals ──┐
//!                     ├──> fold skill totals into activity totals ──> rewrite rules
//! activity totals ────┘
//! ```
//!
//! Skill-only totals are complete before any fold starts, so an activity
//! bonus never ends up weaker than the general skill bonus it rides on.

use std::collections::BTreeMap;

use super::errors::EvaluationError;
use crate::model::{Activity, Skill, SkillBonusRule, Structure};

/// Capped running total per skill over skill-only rules.
pub type SkillTotals = BTreeMap<Skill, i32>;

/// Capped running total per (skill, activity) over activity-scoped rules.
pub type ActivityTotals = BTreeMap<(Skill, Activity), i32>;

/// Re-derives every skill bonus rule value as a capped sum over all grouped
/// structures.
///
/// # Errors
///
/// [`EvaluationError::MissingStackedTotal`] if a rule has no reduced total,
/// which would mean the passes and the rewrite disagree.
pub fn stack_all_structure_bonuses(
    grouped: &[Structure],
    max_item_bonus: i32,
) -> Result<Vec<Structure>, EvaluationError> {
    let rules = || grouped.iter().flat_map(|s| s.skill_bonus_rules.iter());

    let skill_totals = sum_skill_only_rules(rules(), max_item_bonus);
    let activity_totals = sum_activity_rules(rules(), max_item_bonus);
    let activity_totals = fold_skill_totals(activity_totals, &skill_totals, max_item_bonus);

    tracing::trace!(
        skills = skill_totals.len(),
        activities = activity_totals.len(),
        "stacked skill bonuses across structures"
    );

    grouped
        .iter()
        .map(|structure| rewrite_rules(structure, &skill_totals, &activity_totals))
        .collect()
}

/// Pass 1: sums skill-only values per skill, capping after each addition.
pub fn sum_skill_only_rules<'a>(
    rules: impl IntoIterator<Item = &'a SkillBonusRule>,
    max_item_bonus: i32,
) -> SkillTotals {
    rules
        .into_iter()
        .filter(|rule| rule.is_skill_only())
        .fold(SkillTotals::new(), |mut totals, rule| {
            let total = totals.entry(rule.skill).or_insert(0);
            *total = capped_add(*total, rule.value, max_item_bonus);
            totals
        })
}

/// Pass 2: sums activity-scoped values per (skill, activity), capping after
/// each addition.
pub fn sum_activity_rules<'a>(
    rules: impl IntoIterator<Item = &'a SkillBonusRule>,
    max_item_bonus: i32,
) -> ActivityTotals {
    rules
        .into_iter()
        .filter_map(|rule| rule.activity.as_ref().map(|activity| (rule, activity)))
        .fold(ActivityTotals::new(), |mut totals, (rule, activity)| {
            let total = totals.entry((rule.skill, activity.clone())).or_insert(0);
            *total = capped_add(*total, rule.value, max_item_bonus);
            totals
        })
}

/// Pass 3: adds each finished skill-only total onto every activity total of
/// the same skill.
pub fn fold_skill_totals(
    activity_totals: ActivityTotals,
    skill_totals: &SkillTotals,
    max_item_bonus: i32,
) -> ActivityTotals {
    activity_totals
        .into_iter()
        .map(|((skill, activity), total)| {
            let general = skill_totals.get(&skill).copied().unwrap_or(0);
            ((skill, activity), capped_add(total, general, max_item_bonus))
        })
        .collect()
}

fn rewrite_rules(
    structure: &Structure,
    skill_totals: &SkillTotals,
    activity_totals: &ActivityTotals,
) -> Result<Structure, EvaluationError> {
    let skill_bonus_rules = structure
        .skill_bonus_rules
        .iter()
        .map(|rule| {
            let total = match &rule.activity {
                Some(activity) => activity_totals.get(&(rule.skill, activity.clone())),
                None => skill_totals.get(&rule.skill),
            };
            total
                .map(|&value| rule.with_value(value))
                .ok_or_else(|| EvaluationError::MissingStackedTotal {
                    structure: structure.name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Structure {
        skill_bonus_rules,
        ..structure.clone()
    })
}

fn capped_add(total: i32, value: i32, max_item_bonus: i32) -> i32 {
    total.saturating_add(value).min(max_item_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(name: &str, rules: &[SkillBonusRule]) -> Structure {
        rules
            .iter()
            .cloned()
            .fold(Structure::named(name), Structure::with_skill_bonus)
    }

    #[test]
    fn distinct_structures_sum_up_to_cap() {
        let grouped = [
            structure("Market", &[SkillBonusRule::skill(Skill::Trade, 2)]),
            structure("Bank", &[SkillBonusRule::skill(Skill::Trade, 2)]),
        ];
        let stacked = stack_all_structure_bonuses(&grouped, 3).unwrap();
        assert_eq!(stacked[0].skill_bonus_rules[0].value, 3);
        assert_eq!(stacked[1].skill_bonus_rules[0].value, 3);
    }

    #[test]
    fn skill_totals_cap_after_each_addition() {
        // 3 -> capped 2, then -1 -> 1. Summing first would give 2.
        let rules = [
            SkillBonusRule::skill(Skill::Arts, 3),
            SkillBonusRule::skill(Skill::Arts, -1),
        ];
        let totals = sum_skill_only_rules(&rules, 2);
        assert_eq!(totals[&Skill::Arts], 1);
    }

    #[test]
    fn activity_totals_ignore_skill_only_rules() {
        let rules = [
            SkillBonusRule::skill(Skill::Defense, 1),
            SkillBonusRule::activity(Skill::Defense, "Fortify Hex", 1),
            SkillBonusRule::activity(Skill::Defense, "Fortify Hex", 1),
        ];
        let totals = sum_activity_rules(&rules, 3);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&(Skill::Defense, Activity::from("Fortify Hex"))], 2);
    }

    #[test]
    fn fold_uses_completed_skill_totals() {
        // The skill-only rule appears after the activity rule; the fold must
        // still see the full skill total.
        let grouped = [
            structure(
                "Barracks",
                &[SkillBonusRule::activity(Skill::Warfare, "Recruit Army", 1)],
            ),
            structure("Garrison", &[SkillBonusRule::skill(Skill::Warfare, 1)]),
            structure("Keep", &[SkillBonusRule::skill(Skill::Warfare, 1)]),
        ];
        let stacked = stack_all_structure_bonuses(&grouped, 3).unwrap();
        assert_eq!(stacked[0].skill_bonus_rules[0].value, 3);
        assert_eq!(stacked[1].skill_bonus_rules[0].value, 2);
        assert_eq!(stacked[2].skill_bonus_rules[0].value, 2);
    }

    #[test]
    fn fold_caps_activity_totals() {
        let mut activity_totals = ActivityTotals::new();
        activity_totals.insert((Skill::Magic, Activity::from("Prognostication")), 2);
        let skill_totals = SkillTotals::from([(Skill::Magic, 2)]);

        let folded = fold_skill_totals(activity_totals, &skill_totals, 3);
        assert_eq!(folded[&(Skill::Magic, Activity::from("Prognostication"))], 3);
    }

    #[test]
    fn activity_without_skill_total_keeps_its_own_sum() {
        let grouped = [structure(
            "Library",
            &[SkillBonusRule::activity(Skill::Scholarship, "Rest and Relax", 1)],
        )];
        let stacked = stack_all_structure_bonuses(&grouped, 2).unwrap();
        assert_eq!(stacked[0].skill_bonus_rules[0].value, 1);
    }
}
