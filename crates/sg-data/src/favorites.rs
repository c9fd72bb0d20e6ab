//! The user's set of favorited stores

use ahash::AHashSet;

use crate::catalog::StoreId;

/// Set of favorited store ids
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    ids: AHashSet<StoreId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = StoreId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership for a store; returns the new membership
    pub fn toggle(&mut self, id: &StoreId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &StoreId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in a stable order, for persistence and listing
    pub fn sorted_ids(&self) -> Vec<StoreId> {
        let mut ids: Vec<_> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}
