//! Settlement evaluation pipeline.
//!
//! The [`SettlementEngine`] turns a settlement's structure list into a
//! [`StructureResult`]. Every evaluation runs the same passes over immutable
//! input:
//!
//! ```text
//! validate → unionize → group → stack (all-structures-stack only) → aggregate
//! ```
//!
//! Aggregates that describe the physical settlement (storage, lots, bridge,
//! consumption, notes, flags) read the raw list; bonus aggregates read the
//! grouped list.

mod capital;
mod errors;
mod grouping;
mod items;
mod kingdom;
mod skills;
mod stacking;
mod totals;
mod unionize;
mod validation;

pub use capital::{merge_capital, merge_skill_bonuses};
pub use errors::{EvaluationError, GroupLabel};
pub use grouping::group_structures;
pub use items::item_level_bonuses;
pub use kingdom::SettlementEvaluation;
pub use skills::skill_bonuses;
pub use stacking::{
    ActivityTotals, SkillTotals, fold_skill_totals, stack_all_structure_bonuses,
    sum_activity_rules, sum_skill_only_rules,
};
pub use totals::{
    consumption_reduction, distinct_notes, leadership_activity_bonus, residential_lots,
    settlement_event_bonus, storage_increases, total_lots, unlocked_activities,
};
pub use unionize::unionize_structures;
pub use validation::validate_structures;

use crate::config::StackingMode;
use crate::env::ActivityOracle;
use crate::model::{SettlementConfig, Structure, StructureResult};

/// Evaluates settlements against a fixed activity oracle.
///
/// The engine holds no state of its own; one instance can evaluate any number
/// of settlements.
pub struct SettlementEngine<'a, O: ActivityOracle + ?Sized> {
    oracle: &'a O,
}

impl<'a, O: ActivityOracle + ?Sized> SettlementEngine<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Computes the aggregated bonuses of `structures` for a settlement of
    /// `settlement_level` under `stacking_mode`.
    ///
    /// # Errors
    ///
    /// Any [`EvaluationError`] raised by the boundary check or by activity
    /// lookup. No partial result is produced.
    pub fn evaluate(
        &self,
        structures: &[Structure],
        settlement_level: i32,
        stacking_mode: StackingMode,
    ) -> Result<StructureResult, EvaluationError> {
        let config = SettlementConfig::for_level(settlement_level);
        tracing::debug!(
            structures = structures.len(),
            level = settlement_level,
            tier = %config.settlement_type,
            mode = %stacking_mode,
            "evaluating settlement"
        );

        validate_structures(structures)?;
        let unionized = unionize_structures(structures, self.oracle)?;
        let grouped = group_structures(&unionized, config.max_item_bonus);
        let grouped = match stacking_mode {
            StackingMode::SameStructuresStack => grouped,
            StackingMode::AllStructuresStack => {
                stack_all_structure_bonuses(&grouped, config.max_item_bonus)?
            }
        };
        tracing::trace!(distinct = grouped.len(), "grouped structures");

        Ok(build_result(config, structures, &grouped))
    }
}

/// Evaluates a single settlement without constructing an engine.
pub fn evaluate_structures<O>(
    oracle: &O,
    structures: &[Structure],
    settlement_level: i32,
    stacking_mode: StackingMode,
) -> Result<StructureResult, EvaluationError>
where
    O: ActivityOracle + ?Sized,
{
    SettlementEngine::new(oracle).evaluate(structures, settlement_level, stacking_mode)
}

fn build_result(
    config: SettlementConfig,
    raw: &[Structure],
    grouped: &[Structure],
) -> StructureResult {
    let consumption_reduction = consumption_reduction(raw);

    StructureResult {
        consumption: config.consumption.saturating_sub(consumption_reduction),
        consumption_reduction,
        allow_capital_investment: raw.iter().any(|s| s.enable_capital_investment),
        notes: distinct_notes(raw),
        skill_bonuses: skill_bonuses(grouped),
        item_level_bonuses: item_level_bonuses(grouped),
        settlement_event_bonus: settlement_event_bonus(grouped),
        leadership_activity_bonus: leadership_activity_bonus(grouped),
        storage: storage_increases(raw),
        increase_leadership_activities: raw.iter().any(|s| s.increase_leadership_activities),
        unlock_activities: unlocked_activities(grouped),
        residential_lots: residential_lots(raw),
        has_bridge: raw.iter().any(|s| s.is_bridge),
        lots: total_lots(raw),
        config,
    }
}
