use super::Unit;
use crate::{Error, Result};
use std::hash::{Hash, Hasher};

/// A system unit with its own symbol over another system unit, e.g. newton
/// over `kg·m·s^-2`.
///
/// Alternate units never nest: building one over another alternate unit uses
/// that unit's parent.
#[derive(Clone, Debug)]
pub struct AlternateUnit {
    parent: Unit,
    symbol: String,
}

impl AlternateUnit {
    /// Fails with `InvalidArgument` unless `parent` is an unscaled system unit.
    pub fn new(parent: &Unit, symbol: impl Into<String>) -> Result<Self> {
        if !parent.is_system_unit() {
            return Err(Error::invalid(format!(
                "the parent unit {} is not an unscaled SI unit",
                parent
            )));
        }
        let parent = match parent {
            Unit::Alternate(alternate) => alternate.parent.clone(),
            other => other.clone(),
        };
        Ok(Self {
            parent,
            symbol: symbol.into(),
        })
    }

    pub fn parent(&self) -> &Unit {
        &self.parent
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl PartialEq for AlternateUnit {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.symbol == other.symbol
    }
}

impl Eq for AlternateUnit {}

impl Hash for AlternateUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}
