//! JSON reports written to stdout.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use kingdom_core::{
    Activity, CommodityStorage, ItemLevelBonuses, SettlementEvaluation, SettlementType, Skill,
    SkillItemBonus, StackingMode,
};
use serde::Serialize;

/// Evaluation of a whole kingdom.
#[derive(Debug, Serialize)]
pub struct KingdomReport<'a> {
    pub stacking_mode: StackingMode,
    pub settlements: Vec<SettlementReport<'a>>,
}

impl<'a> KingdomReport<'a> {
    pub fn new(stacking_mode: StackingMode, evaluations: &'a [SettlementEvaluation]) -> Self {
        Self {
            stacking_mode,
            settlements: evaluations.iter().map(SettlementReport::new).collect(),
        }
    }
}

/// One settlement, with skills keyed by name.
#[derive(Debug, Serialize)]
pub struct SettlementReport<'a> {
    pub name: &'a str,
    pub capital: bool,
    pub level: i32,
    pub settlement_type: SettlementType,
    /// Skills with a non-zero bonus or at least one override.
    pub skills: BTreeMap<Skill, &'a SkillItemBonus>,
    pub item_levels: &'a ItemLevelBonuses,
    pub settlement_event_bonus: i32,
    pub leadership_activity_bonus: i32,
    pub increase_leadership_activities: bool,
    pub allow_capital_investment: bool,
    pub storage: &'a CommodityStorage,
    pub consumption: u32,
    pub consumption_reduction: u32,
    pub lots: u32,
    pub residential_lots: u32,
    pub has_bridge: bool,
    pub unlock_activities: &'a [Activity],
    pub notes: &'a [String],
}

impl<'a> SettlementReport<'a> {
    pub fn new(evaluation: &'a SettlementEvaluation) -> Self {
        let result = &evaluation.result;
        Self {
            name: &evaluation.name,
            capital: evaluation.capital,
            level: result.config.level,
            settlement_type: result.config.settlement_type,
            skills: result
                .skill_bonuses
                .iter()
                .filter(|(_, bonus)| bonus.value != 0 || !bonus.activities.is_empty())
                .collect(),
            item_levels: &result.item_level_bonuses,
            settlement_event_bonus: result.settlement_event_bonus,
            leadership_activity_bonus: result.leadership_activity_bonus,
            increase_leadership_activities: result.increase_leadership_activities,
            allow_capital_investment: result.allow_capital_investment,
            storage: &result.storage,
            consumption: result.consumption,
            consumption_reduction: result.consumption_reduction,
            lots: result.lots,
            residential_lots: result.residential_lots,
            has_bridge: result.has_bridge,
            unlock_activities: &result.unlock_activities,
            notes: &result.notes,
        }
    }
}

/// Serializes `report` to `out` followed by a newline.
pub fn write_json<T: Serialize>(out: &mut impl Write, report: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    Ok(())
}
