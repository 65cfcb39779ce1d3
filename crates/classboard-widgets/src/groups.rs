//! Group maker

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::picker::parse_names;
use crate::ContentModel;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupMaker {
    /// Newline-separated names
    pub names: String,
    pub group_count: usize,
    /// Last generated groups; empty while editing
    pub groups: Vec<Vec<String>>,
}

impl Default for GroupMaker {
    fn default() -> Self {
        Self {
            names: String::new(),
            group_count: Self::MIN_GROUPS,
            groups: Vec::new(),
        }
    }
}

impl ContentModel for GroupMaker {
    const KIND: WidgetKind = WidgetKind::GroupMaker;
}

impl GroupMaker {
    pub const MIN_GROUPS: usize = 2;
    pub const MAX_GROUPS: usize = 20;

    pub fn set_names(&mut self, names: impl Into<String>) -> Payload {
        self.names = names.into();
        self.patch(&["names"])
    }

    pub fn increment(&mut self) -> Payload {
        self.set_group_count(self.group_count.saturating_add(1))
    }

    pub fn decrement(&mut self) -> Payload {
        self.set_group_count(self.group_count.saturating_sub(1))
    }

    pub fn set_group_count(&mut self, count: usize) -> Payload {
        self.group_count = count.clamp(Self::MIN_GROUPS, Self::MAX_GROUPS);
        self.patch(&["groupCount"])
    }

    /// Shuffle the names and deal them round-robin into groups.
    ///
    /// Returns `None` and keeps the current groups when there are no names.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Payload> {
        let mut names = parse_names(&self.names);
        if names.is_empty() {
            return None;
        }
        names.shuffle(rng);

        let count = self.group_count.clamp(Self::MIN_GROUPS, Self::MAX_GROUPS);
        let mut groups = vec![Vec::new(); count];
        for (index, name) in names.into_iter().enumerate() {
            groups[index % count].push(name);
        }

        self.group_count = count;
        self.groups = groups;
        Some(self.patch(&["names", "groupCount", "groups"]))
    }

    /// Back to editing
    pub fn reset(&mut self) -> Payload {
        self.groups.clear();
        self.patch(&["groups"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn class_of(n: usize) -> String {
        (1..=n).map(|i| format!("Student {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_group_count_bounds() {
        let mut maker = GroupMaker::default();
        maker.decrement();
        assert_eq!(maker.group_count, 2);

        maker.set_group_count(50);
        assert_eq!(maker.group_count, 20);
        let patch = maker.increment();
        assert_eq!(patch.get("groupCount").unwrap(), 20);
    }

    #[test]
    fn test_deals_everyone_evenly() {
        let mut maker = GroupMaker::default();
        maker.set_names(class_of(11));
        maker.set_group_count(3);

        let patch = maker.generate(&mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(patch.get("groups").unwrap().as_array().unwrap().len(), 3);

        let sizes: Vec<usize> = maker.groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 3]);

        let mut everyone: Vec<String> = maker.groups.concat();
        everyone.sort();
        let mut expected = parse_names(&class_of(11));
        expected.sort();
        assert_eq!(everyone, expected);
    }

    #[test]
    fn test_more_groups_than_names() {
        let mut maker = GroupMaker::default();
        maker.set_names("Ada\nGrace");
        maker.set_group_count(4);
        maker.generate(&mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(maker.groups.len(), 4);
        assert_eq!(maker.groups.iter().filter(|g| g.is_empty()).count(), 2);
    }

    #[test]
    fn test_no_names_keeps_groups() {
        let mut maker = GroupMaker::default();
        assert!(maker.generate(&mut StdRng::seed_from_u64(1)).is_none());
        assert!(maker.groups.is_empty());
    }

    #[test]
    fn test_reset_clears_groups() {
        let mut maker = GroupMaker::default();
        maker.set_names(class_of(4));
        maker.generate(&mut StdRng::seed_from_u64(5));
        let patch = maker.reset();
        assert!(maker.groups.is_empty());
        assert_eq!(patch.get("groups").unwrap().as_array().unwrap().len(), 0);
        assert_eq!(maker.names, class_of(4));
    }
}
