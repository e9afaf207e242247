//! Kingdom skills and the activities that use them.

use core::fmt;

/// One of the sixteen kingdom skills.
///
/// The set is closed: every aggregation keeps exactly one slot per skill, so
/// the discriminant doubles as a dense index (see [`Skill::index`]).
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    Agriculture,
    Arts,
    Boating,
    Defense,
    Engineering,
    Exploration,
    Folklore,
    Industry,
    Intrigue,
    Magic,
    Politics,
    Scholarship,
    Statecraft,
    Trade,
    Warfare,
    Wilderness,
}

impl Skill {
    /// Dense index of this skill, in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A named kingdom activity (e.g. "Establish Trade Agreement").
///
/// Activities are open-ended content: which skills an activity rolls is
/// answered by an [`ActivityOracle`](crate::env::ActivityOracle), not by this
/// type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Activity(String);

impl Activity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Activity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Activity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Activity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn sixteen_skills_with_dense_indices() {
        assert_eq!(Skill::COUNT, 16);
        for (position, skill) in Skill::iter().enumerate() {
            assert_eq!(skill.index(), position);
        }
    }

    #[test]
    fn skill_names_parse_case_insensitively() {
        assert_eq!(Skill::from_str("Trade").unwrap(), Skill::Trade);
        assert_eq!(Skill::from_str("wilderness").unwrap(), Skill::Wilderness);
        assert_eq!(Skill::Statecraft.to_string(), "statecraft");
        assert!(Skill::from_str("sailing").is_err());
    }
}
