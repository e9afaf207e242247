use crate::error::{ErrorSeverity, RuleError};
use crate::model::{Activity, ItemGroup};

/// Reasons an evaluation refuses its input.
///
/// All variants are raised by the boundary check before any reduction pass,
/// except [`EvaluationError::MissingStackedTotal`], which signals a bug in the
/// stacking reducer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationError {
    /// A structure has a blank name and cannot be grouped.
    #[error("structure at position {index} has an empty name")]
    EmptyStructureName { index: usize },

    /// An activity bonus rule references an activity without any known skill.
    #[error("structure '{structure}' grants a bonus to unknown activity '{activity}'")]
    UnknownActivity {
        structure: String,
        activity: Activity,
    },

    /// An available-items rule caps its stacks below zero.
    #[error("structure '{structure}' caps {group} item stacks at {maximum_stacks}")]
    NegativeStackLimit {
        structure: String,
        group: GroupLabel,
        maximum_stacks: i32,
    },

    /// The stacking reducer lost track of a rule it summed.
    #[error("no stacked total recorded for a rule of structure '{structure}'")]
    MissingStackedTotal { structure: String },
}

/// Display wrapper for an optional item group ("other" when untyped).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupLabel(pub Option<ItemGroup>);

impl core::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(group) => write!(f, "{group}"),
            None => f.write_str("other"),
        }
    }
}

impl RuleError for EvaluationError {
    fn severity(&self) -> ErrorSeverity {
        use EvaluationError::*;
        match self {
            EmptyStructureName { .. } | UnknownActivity { .. } | NegativeStackLimit { .. } => {
                ErrorSeverity::Validation
            }
            MissingStackedTotal { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use EvaluationError::*;
        match self {
            EmptyStructureName { .. } => "EVALUATION_EMPTY_STRUCTURE_NAME",
            UnknownActivity { .. } => "EVALUATION_UNKNOWN_ACTIVITY",
            NegativeStackLimit { .. } => "EVALUATION_NEGATIVE_STACK_LIMIT",
            MissingStackedTotal { .. } => "EVALUATION_MISSING_STACKED_TOTAL",
        }
    }
}
