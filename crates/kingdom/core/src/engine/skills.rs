//! Reduction of skill bonus rules into per-skill flat bonuses and overrides.

use crate::model::{SkillBonusRule, SkillBonuses, Structure};

/// Reduces every skill bonus rule into [`SkillBonuses`].
///
/// Two passes over the rules:
/// 1. the flat bonus of a skill is the largest skill-only value (floor 0);
/// 2. an activity-scoped value becomes an override only if it beats both the
///    finished flat bonus and any override already recorded for the pair.
pub fn skill_bonuses(structures: &[Structure]) -> SkillBonuses {
    let rules = || structures.iter().flat_map(|s| s.skill_bonus_rules.iter());

    let flat = rules()
        .filter(|rule| rule.is_skill_only())
        .fold(SkillBonuses::new(), |mut bonuses, rule| {
            let bonus = bonuses.get_mut(rule.skill);
            bonus.value = bonus.value.max(rule.value);
            bonuses
        });

    rules().fold(flat, apply_activity_override)
}

fn apply_activity_override(mut bonuses: SkillBonuses, rule: &SkillBonusRule) -> SkillBonuses {
    let Some(activity) = &rule.activity else {
        return bonuses;
    };
    let bonus = bonuses.get_mut(rule.skill);
    let recorded = bonus.activities.get(activity).copied().unwrap_or(0);
    if rule.value > bonus.value && rule.value > recorded {
        bonus.activities.insert(activity.clone(), rule.value);
    }
    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, Skill};

    fn with_rules(rules: &[SkillBonusRule]) -> Vec<Structure> {
        rules
            .iter()
            .enumerate()
            .map(|(i, rule)| Structure::named(format!("S{i}")).with_skill_bonus(rule.clone()))
            .collect()
    }

    #[test]
    fn flat_bonus_is_the_maximum() {
        let structures = with_rules(&[
            SkillBonusRule::skill(Skill::Trade, 1),
            SkillBonusRule::skill(Skill::Trade, 2),
            SkillBonusRule::skill(Skill::Trade, 1),
        ]);
        assert_eq!(skill_bonuses(&structures).get(Skill::Trade).value, 2);
    }

    #[test]
    fn negative_values_never_lower_the_flat_bonus() {
        let structures = with_rules(&[SkillBonusRule::skill(Skill::Intrigue, -1)]);
        assert_eq!(skill_bonuses(&structures).get(Skill::Intrigue).value, 0);
    }

    #[test]
    fn redundant_override_is_dropped() {
        let structures = with_rules(&[
            SkillBonusRule::skill(Skill::Defense, 2),
            SkillBonusRule::activity(Skill::Defense, "Fortify Walls", 1),
        ]);
        let bonuses = skill_bonuses(&structures);
        assert_eq!(bonuses.get(Skill::Defense).value, 2);
        assert!(bonuses.get(Skill::Defense).activities.is_empty());
    }

    #[test]
    fn override_is_compared_against_the_final_flat_bonus() {
        // The override is listed before the flat rule that makes it redundant.
        let structures = with_rules(&[
            SkillBonusRule::activity(Skill::Politics, "Improve Lifestyle", 1),
            SkillBonusRule::skill(Skill::Politics, 1),
        ]);
        let bonuses = skill_bonuses(&structures);
        assert!(bonuses.get(Skill::Politics).activities.is_empty());
    }

    #[test]
    fn strongest_override_wins() {
        let structures = with_rules(&[
            SkillBonusRule::skill(Skill::Folklore, 1),
            SkillBonusRule::activity(Skill::Folklore, "Celebrate Holiday", 2),
            SkillBonusRule::activity(Skill::Folklore, "Celebrate Holiday", 3),
            SkillBonusRule::activity(Skill::Folklore, "Celebrate Holiday", 2),
        ]);
        let bonus = skill_bonuses(&structures).get(Skill::Folklore).clone();
        assert_eq!(bonus.value, 1);
        assert_eq!(
            bonus.activities.get(&Activity::from("Celebrate Holiday")),
            Some(&3)
        );
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let bonuses = skill_bonuses(&[]);
        assert!(bonuses.iter().all(|(_, b)| b.value == 0 && b.activities.is_empty()));
    }
}
