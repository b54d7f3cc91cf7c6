use super::Unit;
use crate::converter::Converter;
use std::hash::{Hash, Hasher};

/// A unit derived from a parent unit by a converter, e.g. kilometre from
/// metre with `Multiply(1000)`.
///
/// The converter maps values in this unit to values in the parent unit.
#[derive(Clone, Debug)]
pub struct TransformedUnit {
    parent: Unit,
    to_parent: Converter,
    symbol: Option<String>,
}

impl TransformedUnit {
    pub(crate) fn new(parent: &Unit, to_parent: Converter, symbol: Option<String>) -> Self {
        Self {
            parent: parent.clone(),
            to_parent,
            symbol,
        }
    }

    pub fn parent(&self) -> &Unit {
        &self.parent
    }

    pub fn to_parent(&self) -> &Converter {
        &self.to_parent
    }

    pub fn symbol(&self) -> String {
        match &self.symbol {
            Some(symbol) => symbol.clone(),
            None => format!("{}[{}]", self.parent, self.to_parent),
        }
    }
}

// The symbol is a label only; identity is (parent, converter).
impl PartialEq for TransformedUnit {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.to_parent == other.to_parent
    }
}

impl Eq for TransformedUnit {}

impl Hash for TransformedUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.to_parent.hash(state);
    }
}
