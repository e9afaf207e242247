//! Collapses copies of the same structure into a single, intensified entry.

use std::collections::BTreeMap;

use crate::model::{AvailableItemsRule, Structure, ValueRule};

/// Groups structures by name, scaling rule values by the number of copies.
///
/// For a structure built `count` times every rule value is multiplied by
/// `count`, then:
/// - skill, settlement-event and leadership-activity values are capped at
///   `max_item_bonus` (even for a single copy),
/// - available-items values are capped at the rule's own `maximum_stacks`,
///   or left unconstrained when the rule has none.
///
/// Output order follows the first occurrence of each name; the definition used
/// is the last copy seen.
pub fn group_structures(structures: &[Structure], max_item_bonus: i32) -> Vec<Structure> {
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
    let mut occurrences: Vec<(&Structure, i32)> = Vec::new();

    for structure in structures {
        match positions.get(structure.name.as_str()) {
            Some(&position) => {
                let (definition, count) = &mut occurrences[position];
                *definition = structure;
                *count = count.saturating_add(1);
            }
            None => {
                positions.insert(structure.name.as_str(), occurrences.len());
                occurrences.push((structure, 1));
            }
        }
    }

    occurrences
        .into_iter()
        .map(|(structure, count)| scale_structure(structure, count, max_item_bonus))
        .collect()
}

fn scale_structure(structure: &Structure, count: i32, max_item_bonus: i32) -> Structure {
    let capped = |value: i32| value.saturating_mul(count).min(max_item_bonus);
    let scale_values = |rules: &[ValueRule]| -> Vec<ValueRule> {
        rules
            .iter()
            .map(|rule| ValueRule::new(capped(rule.value)))
            .collect()
    };

    Structure {
        skill_bonus_rules: structure
            .skill_bonus_rules
            .iter()
            .map(|rule| rule.with_value(capped(rule.value)))
            .collect(),
        available_items_rules: structure
            .available_items_rules
            .iter()
            .map(|rule| scale_items_rule(rule, count))
            .collect(),
        settlement_event_rules: scale_values(&structure.settlement_event_rules),
        leadership_activity_rules: scale_values(&structure.leadership_activity_rules),
        ..structure.clone()
    }
}

fn scale_items_rule(rule: &AvailableItemsRule, count: i32) -> AvailableItemsRule {
    let stacked = rule.value.saturating_mul(count);
    AvailableItemsRule {
        value: match rule.maximum_stacks {
            Some(maximum) => stacked.min(maximum),
            None => stacked,
        },
        ..rule.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemGroup, Skill, SkillBonusRule};

    fn trade_post() -> Structure {
        Structure::named("Trade Post").with_skill_bonus(SkillBonusRule::skill(Skill::Trade, 2))
    }

    #[test]
    fn duplicates_double_and_cap() {
        let grouped = group_structures(&[trade_post(), trade_post()], 3);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].skill_bonus_rules[0].value, 3);
    }

    #[test]
    fn single_copy_is_still_capped() {
        let grouped = group_structures(&[trade_post()], 1);
        assert_eq!(grouped[0].skill_bonus_rules[0].value, 1);
    }

    #[test]
    fn order_follows_first_occurrence() {
        let structures = [
            Structure::named("Mill"),
            Structure::named("Granary"),
            Structure::named("Mill"),
            Structure::named("Shrine"),
        ];
        let names: Vec<_> = group_structures(&structures, 1)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Mill", "Granary", "Shrine"]);
    }

    #[test]
    fn event_and_leadership_rules_are_capped() {
        let watchtower = Structure::named("Watchtower")
            .with_settlement_event_bonus(1)
            .with_leadership_activity_bonus(1);
        let grouped = group_structures(&[watchtower.clone(), watchtower.clone(), watchtower], 2);
        assert_eq!(grouped[0].settlement_event_rules[0].value, 2);
        assert_eq!(grouped[0].leadership_activity_rules[0].value, 2);
    }

    #[test]
    fn item_rules_respect_their_own_stack_limit() {
        let shop = Structure::named("Magic Shop")
            .with_available_items(AvailableItemsRule::group(ItemGroup::Magical, 1))
            .with_available_items(AvailableItemsRule::untyped(1).with_maximum_stacks(3));
        let grouped = group_structures(&vec![shop; 5], 1);
        let rules = &grouped[0].available_items_rules;
        // Unlimited rule ignores the tier ceiling entirely.
        assert_eq!(rules[0].value, 5);
        assert_eq!(rules[1].value, 3);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let structures = [trade_post(), trade_post()];
        let _ = group_structures(&structures, 3);
        assert_eq!(structures[0].skill_bonus_rules[0].value, 2);
    }
}
