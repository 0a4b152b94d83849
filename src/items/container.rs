//! Item container
//!
//! Items are kept in groups: identical items stack into one group, in the
//! order they were first added.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::item::SolItem;

/// Decides whether two items share a group
pub trait Stackable {
    fn is_same(&self, other: &Self) -> bool;
}

impl Stackable for SolItem {
    fn is_same(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

/// Grouped item storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemContainer<T> {
    groups: Vec<Vec<T>>,
}

impl<T> Default for ItemContainer<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> ItemContainer<T> {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from explicit groups, dropping empty ones
    pub fn from_groups(groups: Vec<Vec<T>>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of items
    pub fn count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in order
    pub fn groups(&self) -> impl Iterator<Item = &[T]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Iterate every item, group by group
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.groups.iter().flatten()
    }

    /// Remove every item matching `f`, dropping groups left empty.
    /// Returns the number of removed items.
    pub fn remove_where<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.count();
        for group in &mut self.groups {
            group.retain(|item| !f(item));
        }
        self.groups.retain(|g| !g.is_empty());
        before - self.count()
    }

    /// Items flattened for saving: group order is kept, each group's items
    /// come out newest first.
    pub fn flatten_reversed_groups(&self) -> Vec<&T> {
        self.groups
            .iter()
            .flat_map(|group| group.iter().rev())
            .collect()
    }
}

impl<T: Stackable> ItemContainer<T> {
    /// Add an item to the group of identical items, or start a new group
    pub fn add(&mut self, item: T) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.first().is_some_and(|first| first.is_same(&item)))
        {
            Some(group) => group.push(item),
            None => self.groups.push(vec![item]),
        }
    }
}

impl ItemContainer<SolItem> {
    /// Load every empty gun with a finite clip from a matching clip item in
    /// the container, consuming one clip per gun. Returns the number of guns
    /// loaded.
    pub fn reload_guns(&mut self) -> usize {
        let mut available: HashMap<String, usize> = HashMap::new();
        for clip in self.iter().filter_map(SolItem::as_clip) {
            *available.entry(clip.code.clone()).or_default() += 1;
        }

        let mut consumed: HashMap<String, usize> = HashMap::new();
        for item in self.groups.iter_mut().flatten() {
            let Some(gun) = item.as_gun_mut() else {
                continue;
            };
            if gun.ammo > 0 || gun.clip.infinite {
                continue;
            }
            let Some(left) = available.get_mut(&gun.clip.code).filter(|n| **n > 0) else {
                continue;
            };
            *left -= 1;
            *consumed.entry(gun.clip.code.clone()).or_default() += 1;
            gun.load();
        }

        let loaded: usize = consumed.values().sum();
        for (code, mut count) in consumed {
            self.remove_where(|item| {
                let hit = count > 0 && item.as_clip().is_some_and(|clip| clip.code == code);
                if hit {
                    count -= 1;
                }
                hit
            });
        }
        loaded
    }
}

impl<T: Stackable> FromIterator<T> for ItemContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        for item in iter {
            container.add(item);
        }
        container
    }
}
