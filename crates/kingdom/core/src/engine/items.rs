//! Item-level bonuses per item group.

use crate::config::KingdomConfig;
use crate::model::{ItemGroup, ItemLevelBonuses, Structure};

/// Computes layered item-level bonuses.
///
/// - penalty: -2 unless any structure prevents it, then 0
/// - other: sum of all untyped values plus the penalty (no ceiling)
/// - each typed group: its largest single value, floored at 0 and capped at 3
///
/// Groups are then layered onto their parents: alchemical and magical onto
/// other; divine, primal, arcane and occult onto magical; the luxury bonus onto
/// magical and each of the four traditions.
pub fn item_level_bonuses(structures: &[Structure]) -> ItemLevelBonuses {
    let penalty = if structures.iter().any(|s| s.prevent_item_level_penalty) {
        0
    } else {
        KingdomConfig::DEFAULT_ITEM_LEVEL_PENALTY
    };

    let other = untyped_bonus(structures).saturating_add(penalty);
    let layered =
        |parent: i32, group: ItemGroup| parent.saturating_add(group_bonus(structures, group));

    let magical = layered(other, ItemGroup::Magical);
    let divine = layered(magical, ItemGroup::Divine);
    let primal = layered(magical, ItemGroup::Primal);
    let arcane = layered(magical, ItemGroup::Arcane);
    let occult = layered(magical, ItemGroup::Occult);

    ItemLevelBonuses {
        other,
        alchemical: layered(other, ItemGroup::Alchemical),
        magical,
        divine,
        primal,
        arcane,
        occult,
        luxury_magical: layered(magical, ItemGroup::Luxury),
        luxury_occult: layered(occult, ItemGroup::Luxury),
        luxury_arcane: layered(arcane, ItemGroup::Luxury),
        luxury_primal: layered(primal, ItemGroup::Luxury),
        luxury_divine: layered(divine, ItemGroup::Luxury),
    }
}

/// Untyped values always stack.
fn untyped_bonus(structures: &[Structure]) -> i32 {
    structures
        .iter()
        .flat_map(|s| s.available_items_rules.iter())
        .filter(|rule| rule.group.is_none())
        .fold(0i32, |sum, rule| sum.saturating_add(rule.value))
}

/// Typed values never stack: the best single rule counts.
fn group_bonus(structures: &[Structure], group: ItemGroup) -> i32 {
    structures
        .iter()
        .flat_map(|s| s.available_items_rules.iter())
        .filter(|rule| rule.group == Some(group))
        .map(|rule| rule.value)
        .fold(0, i32::max)
        .min(KingdomConfig::MAX_ITEM_LEVEL_BONUS)
}
