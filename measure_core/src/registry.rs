//! Map from quantity kinds to their system units.
//!
//! A [`UnitRegistry`] is keyed by any tag type. Lookups take a read lock;
//! [`UnitRegistry::get_or_insert_with`] inserts under the write lock so that
//! concurrent first use from many threads yields a single stored unit.

use crate::unit::Unit;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
pub struct UnitRegistry<K> {
    units: RwLock<HashMap<K, Unit>>,
}

impl<K> Default for UnitRegistry<K> {
    fn default() -> Self {
        Self {
            units: RwLock::new(HashMap::new()),
        }
    }
}

impl<K> UnitRegistry<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            units: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_units(units: impl IntoIterator<Item = (K, Unit)>) -> Self {
        Self {
            units: RwLock::new(units.into_iter().collect()),
        }
    }

    /// Unit registered for `kind`, or `None` with a warning when absent.
    pub fn get(&self, kind: &K) -> Option<Unit> {
        let unit = self.read().get(kind).cloned();
        if unit.is_none() {
            tracing::warn!("no unit registered for quantity kind {:?}", kind);
        }
        unit
    }

    /// Like [`get`](Self::get), failing with [`Error::UnknownQuantity`].
    pub fn require(&self, kind: &K) -> Result<Unit> {
        self.get(kind)
            .ok_or_else(|| Error::UnknownQuantity(format!("{:?}", kind)))
    }

    pub fn contains(&self, kind: &K) -> bool {
        self.read().contains_key(kind)
    }

    /// Register `unit` for `kind`, returning the unit it replaced.
    pub fn register(&self, kind: K, unit: Unit) -> Option<Unit> {
        tracing::debug!("registering {} for {:?}", unit, kind);
        self.write().insert(kind, unit)
    }

    /// Existing unit for `kind`, or the one built by `make` if none was
    /// registered. `make` runs at most once per absent key.
    pub fn get_or_insert_with<F>(&self, kind: K, make: F) -> Unit
    where
        F: FnOnce() -> Unit,
    {
        let existing = self.read().get(&kind).cloned();
        if let Some(unit) = existing {
            return unit;
        }
        let mut units = self.write();
        units
            .entry(kind)
            .or_insert_with_key(|kind| {
                let unit = make();
                tracing::debug!("registered {} for {:?} on first use", unit, kind);
                unit
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the registered kinds
    pub fn kinds(&self) -> Vec<K> {
        self.read().keys().cloned().collect()
    }

    // Units are immutable, so a panic in another holder cannot leave the map
    // half-updated; recover the guard instead of propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, Unit>> {
        self.units.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, Unit>> {
        self.units.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
