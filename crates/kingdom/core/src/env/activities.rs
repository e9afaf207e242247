use std::collections::BTreeMap;

use crate::model::{Activity, Skill};

/// Read-only registry answering which skills an activity is rolled with.
pub trait ActivityOracle: Send + Sync {
    /// Skills usable for `activity`, or `None` if the activity is unknown.
    fn skills_for(&self, activity: &Activity) -> Option<&[Skill]>;
}

/// In-memory [`ActivityOracle`] backed by an ordered table.
///
/// Content loaders build one from data files; tests build one inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActivityTable {
    activities: BTreeMap<Activity, Vec<Skill>>,
}

impl ActivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `activity` with its skills, replacing any previous entry.
    pub fn insert(&mut self, activity: impl Into<Activity>, skills: impl Into<Vec<Skill>>) {
        self.activities.insert(activity.into(), skills.into());
    }

    /// Builder form of [`ActivityTable::insert`].
    #[must_use]
    pub fn with(mut self, activity: impl Into<Activity>, skills: impl Into<Vec<Skill>>) -> Self {
        self.insert(activity, skills);
        self
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Activity, &[Skill])> {
        self.activities
            .iter()
            .map(|(activity, skills)| (activity, skills.as_slice()))
    }
}

impl ActivityOracle for ActivityTable {
    fn skills_for(&self, activity: &Activity) -> Option<&[Skill]> {
        self.activities.get(activity).map(Vec::as_slice)
    }
}

impl<A: Into<Activity>, S: Into<Vec<Skill>>> FromIterator<(A, S)> for ActivityTable {
    fn from_iter<I: IntoIterator<Item = (A, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (activity, skills) in iter {
            table.insert(activity, skills);
        }
        table
    }
}
