use crate::dimension::Dimension;
use std::hash::{Hash, Hasher};

/// A unit that is its own system unit, e.g. metre or second.
///
/// The dimension is assigned by whoever defines the system of units. Two base
/// units are the same unit when their symbols match.
#[derive(Clone, Debug)]
pub struct BaseUnit {
    symbol: String,
    name: Option<String>,
    dimension: Dimension,
}

impl BaseUnit {
    pub fn new(symbol: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            dimension,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }
}

impl PartialEq for BaseUnit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for BaseUnit {}

impl Hash for BaseUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}
