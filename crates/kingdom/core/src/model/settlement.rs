//! Settlement tiers and settlement roster entries.

use super::structure::Structure;

/// Settlement size classification.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SettlementType {
    Village,
    Town,
    City,
    Metropolis,
}

/// Tier descriptor derived from a settlement level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlementConfig {
    pub settlement_type: SettlementType,
    /// Level this descriptor was derived from.
    pub level: i32,
    /// Base commodity consumption before reductions.
    pub consumption: u32,
    pub influence: u32,
    /// Ceiling for every per-skill, settlement-event and leadership bonus.
    pub max_item_bonus: i32,
    pub population: String,
    pub maximum_lots: String,
    /// Minimum kingdom level needed to grow a settlement into this tier.
    pub required_kingdom_level: u32,
}

impl SettlementConfig {
    /// Returns the tier for a settlement level.
    ///
    /// | Level    | Tier       | Consumption | Influence | Max item bonus |
    /// |----------|------------|-------------|-----------|----------------|
    /// | < 2      | Village    | 1           | 0         | 1              |
    /// | 2 ..= 4  | Town       | 2           | 1         | 1              |
    /// | 5 ..= 9  | City       | 4           | 2         | 2              |
    /// | >= 10    | Metropolis | 6           | 3         | 3              |
    ///
    /// ```
    /// # use kingdom_core::{SettlementConfig, SettlementType};
    /// assert_eq!(SettlementConfig::for_level(7).settlement_type, SettlementType::City);
    /// assert_eq!(SettlementConfig::for_level(-3).settlement_type, SettlementType::Village);
    /// ```
    pub fn for_level(level: i32) -> Self {
        let settlement_type = SettlementType::for_level(level);
        let (consumption, influence, max_item_bonus, required_kingdom_level, maximum_lots, population) =
            match settlement_type {
                SettlementType::Village => (1, 0, 1, 1, "1", "400 or less"),
                SettlementType::Town => (2, 1, 1, 3, "4", "401-2000"),
                SettlementType::City => (4, 2, 2, 9, "9", "2001–25000"),
                SettlementType::Metropolis => (6, 3, 3, 15, "10+", "25001+"),
            };
        Self {
            settlement_type,
            level,
            consumption,
            influence,
            max_item_bonus,
            population: population.to_string(),
            maximum_lots: maximum_lots.to_string(),
            required_kingdom_level,
        }
    }
}

impl SettlementType {
    /// Tier band containing `level`; bands are contiguous and cover every integer.
    pub const fn for_level(level: i32) -> Self {
        if level < 2 {
            Self::Village
        } else if level < 5 {
            Self::Town
        } else if level < 10 {
            Self::City
        } else {
            Self::Metropolis
        }
    }
}

/// A settlement of the kingdom together with the structures built in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub name: String,
    pub level: i32,
    /// Whether this settlement is the kingdom's capital.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capital: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub structures: Vec<Structure>,
}

impl Settlement {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            capital: false,
            structures: Vec::new(),
        }
    }

    #[must_use]
    pub fn as_capital(mut self) -> Self {
        self.capital = true;
        self
    }

    #[must_use]
    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structures.push(structure);
        self
    }
}
