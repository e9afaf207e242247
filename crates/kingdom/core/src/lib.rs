//! Deterministic settlement rules shared by every kingdom tool.
//!
//! `kingdom-core` turns the structures built in a settlement into the bonuses
//! that settlement grants: skill bonuses with per-activity overrides, item
//! levels per item group, storage, consumption and lot usage. All evaluation
//! flows through [`engine::SettlementEngine`], which performs no I/O; content
//! loading lives in `kingdom-content`.
//!
//! ```
//! use kingdom_core::{ActivityTable, SettlementEngine, Skill, SkillBonusRule, StackingMode, Structure};
//!
//! let activities = ActivityTable::new();
//! let market = Structure::named("Marketplace").with_skill_bonus(SkillBonusRule::skill(Skill::Trade, 1));
//!
//! let result = SettlementEngine::new(&activities)
//!     .evaluate(&[market.clone(), market], 5, StackingMode::SameStructuresStack)
//!     .unwrap();
//! assert_eq!(result.skill_bonuses.get(Skill::Trade).value, 2);
//! ```
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod model;

pub use config::{KingdomConfig, StackingMode};
pub use engine::{
    EvaluationError, SettlementEngine, SettlementEvaluation, evaluate_structures, merge_capital,
};
pub use env::{ActivityOracle, ActivityTable};
pub use error::{ErrorSeverity, RuleError};
pub use model::{
    Activity, ActivityBonusRule, AvailableItemsRule, Commodity, CommodityStorage, ItemGroup,
    ItemLevelBonuses, Settlement, SettlementConfig, SettlementType, Skill, SkillBonusRule,
    SkillBonuses, SkillItemBonus, Structure, StructureResult, StructureTrait, ValueRule,
};
