//! Rewrites activity bonus rules as activity-scoped skill bonus rules.

use super::errors::EvaluationError;
use crate::env::ActivityOracle;
use crate::model::{SkillBonusRule, Structure};

/// Expands every activity bonus rule into one skill bonus rule per skill the
/// activity is rolled with, tagged with that activity.
///
/// Expanded rules are appended after the structure's own skill bonus rules, so
/// every later pass only has to understand skill bonus rules.
///
/// # Errors
///
/// Returns [`EvaluationError::UnknownActivity`] when the oracle knows no skill
/// for a referenced activity.
pub fn unionize_structures<O>(
    structures: &[Structure],
    oracle: &O,
) -> Result<Vec<Structure>, EvaluationError>
where
    O: ActivityOracle + ?Sized,
{
    structures
        .iter()
        .map(|structure| unionize_structure(structure, oracle))
        .collect()
}

fn unionize_structure<O>(structure: &Structure, oracle: &O) -> Result<Structure, EvaluationError>
where
    O: ActivityOracle + ?Sized,
{
    let mut skill_bonus_rules = structure.skill_bonus_rules.clone();

    for rule in &structure.activity_bonus_rules {
        let skills = oracle
            .skills_for(&rule.activity)
            .filter(|skills| !skills.is_empty())
            .ok_or_else(|| EvaluationError::UnknownActivity {
                structure: structure.name.clone(),
                activity: rule.activity.clone(),
            })?;
        skill_bonus_rules.extend(
            skills
                .iter()
                .map(|&skill| SkillBonusRule::activity(skill, rule.activity.clone(), rule.value)),
        );
    }

    Ok(Structure {
        skill_bonus_rules,
        ..structure.clone()
    })
}
