use crate::config::StackingMode;
use crate::env::ActivityOracle;
use crate::model::{Settlement, StructureResult};

use super::{EvaluationError, SettlementEngine, merge_capital};

/// Evaluated settlement of a kingdom roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlementEvaluation {
    pub name: String,
    /// Whether this settlement acted as the kingdom's capital.
    pub capital: bool,
    pub result: StructureResult,
}

/// Kingdom-wide evaluation for SettlementEngine.
impl<'a, O: ActivityOracle + ?Sized> SettlementEngine<'a, O> {
    /// Evaluates every settlement of a kingdom and applies capital influence.
    ///
    /// The first settlement flagged as capital is the capital; every other
    /// settlement's result is merged with it via [`merge_capital`]. Results are
    /// returned in roster order. Without a capital, results are left unmerged.
    ///
    /// # Errors
    ///
    /// The first [`EvaluationError`] raised by any settlement.
    pub fn evaluate_kingdom(
        &self,
        settlements: &[Settlement],
        stacking_mode: StackingMode,
    ) -> Result<Vec<SettlementEvaluation>, EvaluationError> {
        let capital_index = settlements.iter().position(|s| s.capital);

        for extra in settlements
            .iter()
            .enumerate()
            .filter(|&(index, s)| s.capital && Some(index) != capital_index)
            .map(|(_, s)| s)
        {
            tracing::warn!(
                settlement = %extra.name,
                "settlement is flagged as capital but another capital comes first; treating it as a regular settlement"
            );
        }

        let results = settlements
            .iter()
            .map(|s| self.evaluate(&s.structures, s.level, stacking_mode))
            .collect::<Result<Vec<_>, _>>()?;

        let capital_result = capital_index.map(|index| results[index].clone());
        tracing::debug!(
            settlements = settlements.len(),
            capital = capital_index.map(|index| settlements[index].name.as_str()),
            "evaluated kingdom"
        );

        Ok(settlements
            .iter()
            .zip(results)
            .enumerate()
            .map(|(index, (settlement, result))| {
                let is_capital = Some(index) == capital_index;
                let result = match &capital_result {
                    Some(capital) if !is_capital => merge_capital(capital, &result),
                    _ => result,
                };
                SettlementEvaluation {
                    name: settlement.name.clone(),
                    capital: is_capital,
                    result,
                }
            })
            .collect())
    }
}
