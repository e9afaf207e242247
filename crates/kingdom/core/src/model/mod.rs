//! Canonical data types consumed and produced by the engine.
//!
//! Inputs ([`Structure`], [`Settlement`]) are read-only content; outputs
//! ([`StructureResult`]) are built fresh on every evaluation.
mod commodity;
mod item;
mod result;
mod settlement;
mod skill;
mod structure;

pub use commodity::{Commodity, CommodityStorage};
pub use item::{ItemGroup, ItemLevelBonuses};
pub use result::{SkillBonuses, SkillItemBonus, StructureResult};
pub use settlement::{Settlement, SettlementConfig, SettlementType};
pub use skill::{Activity, Skill};
pub use structure::{
    ActivityBonusRule, AvailableItemsRule, SkillBonusRule, Structure, StructureTrait, ValueRule,
};
