//! Scalar aggregations: event and leadership bonuses, storage, consumption,
//! lots, flags and notes.

use std::collections::BTreeMap;

use crate::model::{Activity, CommodityStorage, Structure, ValueRule};

/// Largest settlement-event rule value (floor 0).
pub fn settlement_event_bonus(structures: &[Structure]) -> i32 {
    max_rule_value(structures, |s| s.settlement_event_rules.as_slice())
}

/// Largest leadership-activity rule value (floor 0).
pub fn leadership_activity_bonus(structures: &[Structure]) -> i32 {
    max_rule_value(structures, |s| s.leadership_activity_rules.as_slice())
}

fn max_rule_value<F>(structures: &[Structure], rules: F) -> i32
where
    F: Fn(&Structure) -> &[ValueRule],
{
    structures
        .iter()
        .flat_map(|s| rules(s).iter())
        .map(|rule| rule.value)
        .fold(0, i32::max)
}

/// Storage increases summed per commodity.
pub fn storage_increases(structures: &[Structure]) -> CommodityStorage {
    structures
        .iter()
        .fold(CommodityStorage::new(), |total, s| total.combined(&s.storage))
}

/// Total consumption reduction.
///
/// Copies of the same structure count once: per name only the largest
/// reduction is kept, then the per-name values are summed.
pub fn consumption_reduction(structures: &[Structure]) -> u32 {
    structures
        .iter()
        .filter_map(|s| {
            s.consumption_reduction
                .filter(|&reduction| reduction > 0)
                .map(|reduction| (s.name.as_str(), reduction))
        })
        .fold(BTreeMap::<&str, u32>::new(), |mut per_name, (name, reduction)| {
            let best = per_name.entry(name).or_insert(0);
            *best = (*best).max(reduction);
            per_name
        })
        .into_values()
        .fold(0u32, u32::saturating_add)
}

/// Activities unlocked by the structures, in order, duplicates included.
pub fn unlocked_activities(structures: &[Structure]) -> Vec<Activity> {
    structures
        .iter()
        .flat_map(|s| s.unlock_activities.iter().cloned())
        .collect()
}

/// Lots occupied by all structures.
pub fn total_lots(structures: &[Structure]) -> u32 {
    sum_lots(structures.iter())
}

/// Lots occupied by residential structures.
pub fn residential_lots(structures: &[Structure]) -> u32 {
    sum_lots(structures.iter().filter(|s| s.is_residential()))
}

fn sum_lots<'a>(structures: impl Iterator<Item = &'a Structure>) -> u32 {
    structures.fold(0u32, |sum, s| sum.saturating_add(s.lot_count()))
}

/// Structure notes with duplicates removed, in first-seen order.
pub fn distinct_notes(structures: &[Structure]) -> Vec<String> {
    structures
        .iter()
        .filter_map(|s| s.notes.as_deref())
        .fold(Vec::new(), |mut notes: Vec<String>, note| {
            if !notes.iter().any(|seen| seen == note) {
                notes.push(note.to_string());
            }
            notes
        })
}
