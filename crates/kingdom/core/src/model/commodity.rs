//! Commodities and per-commodity storage capacity.

/// The five kingdom commodities.
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Commodity {
    Ore,
    Lumber,
    Food,
    Stone,
    Luxuries,
}

/// Storage increments, one counter per [`Commodity`].
///
/// Used both for a single structure's contribution and for the settlement
/// total; missing fields in content files default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommodityStorage {
    pub ore: u32,
    pub lumber: u32,
    pub food: u32,
    pub stone: u32,
    pub luxuries: u32,
}

impl CommodityStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored amount for a commodity.
    pub fn get(&self, commodity: Commodity) -> u32 {
        match commodity {
            Commodity::Ore => self.ore,
            Commodity::Lumber => self.lumber,
            Commodity::Food => self.food,
            Commodity::Stone => self.stone,
            Commodity::Luxuries => self.luxuries,
        }
    }

    /// Sets a single commodity (builder pattern).
    #[must_use]
    pub fn with(mut self, commodity: Commodity, amount: u32) -> Self {
        *self.slot_mut(commodity) = amount;
        self
    }

    /// Adds another storage record commodity by commodity (saturating).
    #[must_use]
    pub fn combined(self, other: &CommodityStorage) -> Self {
        Self {
            ore: self.ore.saturating_add(other.ore),
            lumber: self.lumber.saturating_add(other.lumber),
            food: self.food.saturating_add(other.food),
            stone: self.stone.saturating_add(other.stone),
            luxuries: self.luxuries.saturating_add(other.luxuries),
        }
    }

    fn slot_mut(&mut self, commodity: Commodity) -> &mut u32 {
        match commodity {
            Commodity::Ore => &mut self.ore,
            Commodity::Lumber => &mut self.lumber,
            Commodity::Food => &mut self.food,
            Commodity::Stone => &mut self.stone,
            Commodity::Luxuries => &mut self.luxuries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn combined_adds_each_commodity_independently() {
        let granary = CommodityStorage::new().with(Commodity::Food, 1);
        let stockyard = CommodityStorage::new()
            .with(Commodity::Lumber, 1)
            .with(Commodity::Stone, 1)
            .with(Commodity::Ore, 1);

        let total = granary.combined(&granary).combined(&stockyard);

        assert_eq!(total.get(Commodity::Food), 2);
        assert_eq!(total.get(Commodity::Lumber), 1);
        assert_eq!(total.get(Commodity::Stone), 1);
        assert_eq!(total.get(Commodity::Ore), 1);
        assert_eq!(total.get(Commodity::Luxuries), 0);
    }

    #[test]
    fn combined_saturates() {
        let full = CommodityStorage::new().with(Commodity::Ore, u32::MAX);
        assert_eq!(full.combined(&full).ore, u32::MAX);
    }

    #[test]
    fn every_commodity_has_a_slot() {
        for commodity in Commodity::iter() {
            let storage = CommodityStorage::new().with(commodity, 7);
            assert_eq!(storage.get(commodity), 7);
        }
    }
}
