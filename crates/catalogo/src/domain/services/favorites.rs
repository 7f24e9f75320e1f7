use std::{collections::BTreeSet, sync::Mutex};

use crate::domain::repositories::storage::{KeyValueStore, StorageError};

pub const FAVORITES_KEY: &str = "catalogo_favs_v1";

/// Favorite character ids, persisted as a json array under [`FAVORITES_KEY`].
///
/// The store is the only source of truth: every call reads it again, so two
/// processes sharing a store see each other's changes.
pub struct FavoritesService<S>
where
    S: KeyValueStore,
{
    store: S,
    write_lock: Mutex<()>,
}

impl<S> FavoritesService<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn get_all(&self) -> BTreeSet<i64> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                warn!("failed to read favorites: {e}");
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!("ignoring malformed favorites {raw:?}: {e}");
                BTreeSet::new()
            }
        }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.get_all().contains(&id)
    }

    pub fn set_favorite(&self, id: i64, on: bool) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.set_locked(self.get_all(), id, on);
    }

    /// Flip the favorite state of `id`, returning the new state
    pub fn toggle(&self, id: i64) -> bool {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let favorites = self.get_all();
        let on = !favorites.contains(&id);
        self.set_locked(favorites, id, on);

        on
    }

    /// Caller must hold `write_lock` since `favorites` was read
    fn set_locked(&self, mut favorites: BTreeSet<i64>, id: i64, on: bool) {
        let changed = if on {
            favorites.insert(id)
        } else {
            favorites.remove(&id)
        };

        if !changed {
            return;
        }

        let ids: Vec<i64> = favorites.into_iter().collect();
        let result = serde_json::to_string(&ids)
            .map_err(StorageError::from)
            .and_then(|encoded| self.store.set(FAVORITES_KEY, &encoded));

        match result {
            Ok(()) => debug!("favorite {id} set to {on}"),
            Err(e) => warn!("failed to persist favorite {id}: {e}"),
        }
    }
}
