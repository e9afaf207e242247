//! Boundary checks run before any reduction pass.

use super::errors::{EvaluationError, GroupLabel};
use crate::model::Structure;

/// Rejects structure lists the reduction passes cannot give meaning to.
///
/// Activity references are checked later, by [`super::unionize_structures`],
/// because only the oracle knows them.
pub fn validate_structures(structures: &[Structure]) -> Result<(), EvaluationError> {
    for (index, structure) in structures.iter().enumerate() {
        if structure.name.trim().is_empty() {
            return Err(EvaluationError::EmptyStructureName { index });
        }

        if let Some(rule) = structure
            .available_items_rules
            .iter()
            .find(|rule| rule.maximum_stacks.is_some_and(|stacks| stacks < 0))
        {
            return Err(EvaluationError::NegativeStackLimit {
                structure: structure.name.clone(),
                group: GroupLabel(rule.group),
                maximum_stacks: rule.maximum_stacks.unwrap_or_default(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, RuleError};
    use crate::model::{AvailableItemsRule, ItemGroup};

    #[test]
    fn accepts_empty_list() {
        assert_eq!(validate_structures(&[]), Ok(()));
    }

    #[test]
    fn rejects_blank_name() {
        let structures = [Structure::named("Shrine"), Structure::named("  ")];
        let err = validate_structures(&structures).unwrap_err();
        assert_eq!(err, EvaluationError::EmptyStructureName { index: 1 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "EVALUATION_EMPTY_STRUCTURE_NAME");
    }

    #[test]
    fn rejects_negative_stack_limit() {
        let structures = [Structure::named("Occult Shop").with_available_items(
            AvailableItemsRule::group(ItemGroup::Occult, 1).with_maximum_stacks(-1),
        )];
        let err = validate_structures(&structures).unwrap_err();
        assert_eq!(
            err.to_string(),
            "structure 'Occult Shop' caps occult item stacks at -1"
        );
    }

    #[test]
    fn zero_stack_limit_is_allowed() {
        let structures = [Structure::named("Marketplace")
            .with_available_items(AvailableItemsRule::untyped(1).with_maximum_stacks(0))];
        assert!(validate_structures(&structures).is_ok());
    }
}
